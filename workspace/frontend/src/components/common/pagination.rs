use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    /// "Showing 1 to 10 of 23 customers"
    pub summary: String,
    pub on_page_change: Callback<usize>,
}

/// Footer under the customer table. Renders nothing for a single page.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = props.total_pages;
    if total_pages <= 1 {
        return html! {};
    }

    let current = props.current_page;

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if current > 1 {
                on_page_change.emit(current - 1);
            }
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if current < total_pages {
                on_page_change.emit(current + 1);
            }
        })
    };

    html! {
        <div class="px-6 py-3 border-t border-base-300 flex items-center justify-between">
            <div class="text-sm text-base-content/70">{&props.summary}</div>

            <div class="flex items-center gap-2">
                <button class="btn btn-sm" disabled={current <= 1} onclick={on_previous}>
                    <i class="fas fa-chevron-left"></i>
                    {"Previous"}
                </button>

                { for (1..=total_pages).map(|page| {
                    let on_click = {
                        let on_page_change = props.on_page_change.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_page_change.emit(page);
                        })
                    };

                    html! {
                        <button
                            key={page}
                            class={classes!("btn", "btn-sm", (page == current).then_some("btn-primary"))}
                            onclick={on_click}
                        >
                            {page}
                        </button>
                    }
                })}

                <button class="btn btn-sm" disabled={current >= total_pages} onclick={on_next}>
                    {"Next"}
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        </div>
    }
}
