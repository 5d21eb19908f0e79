use common::export::TABLE_FILE_NAME;
use common::listing::{filter_customers, paginate};
use common::{
    customers_to_csv, CustomerWithDrivers, DashboardFilters, RiskTheme, SortKey, TableBody, TableCursor,
    EMPTY_TABLE_MESSAGE,
};
use std::rc::Rc;
use web_sys::{HtmlSelectElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::common::download::download_csv;
use crate::common::toast::ToastContext;
use crate::components::common::pagination::Pagination;
use crate::components::modals::CustomerProfileModal;
use crate::components::widgets::{ScoreBadge, ThemeBadge};

#[derive(Properties, PartialEq)]
pub struct CustomerTableProps {
    pub customers: Rc<Vec<CustomerWithDrivers>>,
    #[prop_or_default]
    pub filters: DashboardFilters,
    /// Sort select and CSV export above the table.
    #[prop_or(true)]
    pub show_toolbar: bool,
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(CustomerTable)]
pub fn customer_table(props: &CustomerTableProps) -> Html {
    let sort = use_state(SortKey::default);
    let cursor = use_mut_ref(TableCursor::default);
    let refresh = use_force_update();
    let selected = use_state(|| None::<CustomerWithDrivers>);
    let toast_ctx = use_context::<ToastContext>();

    let filters = &props.filters;
    let page = {
        let mut cursor = cursor.borrow_mut();
        if cursor.sync(filters.risk, &filters.billing, filters.theme, *sort) {
            log::debug!("Table inputs changed, back to page 1");
        }
        cursor.page
    };

    let mut rows = filter_customers(&props.customers, filters);
    sort.sort(&mut rows);
    let view = paginate(&rows, page);

    let on_page_change = {
        let cursor = cursor.clone();
        Callback::from(move |page: usize| {
            log::trace!("Changing to page {}", page);
            cursor.borrow_mut().go_to(page);
            scroll_to_top();
            refresh.force_update();
        })
    };

    let on_sort_change = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<SortKey>() {
                Ok(key) => sort.set(key),
                Err(err) => log::warn!("{}", err),
            }
        })
    };

    let on_export = {
        let rows = rows.clone();
        Callback::from(move |_: MouseEvent| {
            let csv = customers_to_csv(&rows);
            match download_csv(TABLE_FILE_NAME, &csv) {
                Ok(()) => {
                    if let Some(toast_ctx) = &toast_ctx {
                        toast_ctx.show_info(format!("Exported {} customers", rows.len()));
                    }
                }
                Err(e) => log::error!("CSV export failed: {:?}", e),
            }
        })
    };

    let on_close_profile = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let body = match view.body() {
        TableBody::Empty => html! {
            <tr>
                <td colspan="5" class="py-8 text-center text-base-content/60">{EMPTY_TABLE_MESSAGE}</td>
            </tr>
        },
        TableBody::Rows(page_rows) => page_rows
            .iter()
            .map(|customer| {
                let on_view = {
                    let selected = selected.clone();
                    let customer = customer.clone();
                    Callback::from(move |_: MouseEvent| {
                        log::debug!("Opening profile of {}", customer.id);
                        selected.set(Some(customer.clone()));
                    })
                };

                html! {
                    <tr key={customer.id.clone()} class="hover">
                        <td class="font-medium">{&customer.name}</td>
                        <td>
                            <div class="flex items-center gap-1 mb-1 text-primary">
                                <i class="fas fa-box"></i>
                                <span class="font-semibold">{&customer.subscription_plan}</span>
                            </div>
                            <div class="flex items-center gap-1 text-xs text-base-content/60">
                                <i class="fas fa-credit-card"></i>
                                <span>{&customer.subscription_id}</span>
                            </div>
                        </td>
                        <td><ScoreBadge score={customer.churn_score} /></td>
                        <td><ThemeBadge theme={RiskTheme::for_name(&customer.name)} /></td>
                        <td>
                            <div class="flex flex-col gap-1">
                                <button class="btn btn-primary btn-sm">
                                    <i class="fas fa-gift"></i>
                                    {"Send Retention Offer"}
                                </button>
                                <button class="btn btn-outline btn-primary btn-sm" onclick={on_view}>
                                    <i class="fas fa-file-alt"></i>
                                    {"View Details"}
                                </button>
                            </div>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="bg-base-100 rounded-lg border border-base-300 overflow-hidden">
            if props.show_toolbar {
                <div class="flex items-center justify-end gap-2 px-6 py-3 border-b border-base-300">
                    <select class="select select-sm select-bordered" onchange={on_sort_change}>
                        { for SortKey::ALL.iter().map(|key| html! {
                            <option value={key.value()} selected={*key == *sort}>
                                {format!("Sort by {}", key.label())}
                            </option>
                        })}
                    </select>
                    <button class="btn btn-sm btn-primary" onclick={on_export}>
                        <i class="fas fa-download"></i>
                        {"Export"}
                    </button>
                </div>
            }

            <div class="overflow-x-auto">
                <table class="table w-full">
                    <thead class="bg-primary/5">
                        <tr>
                            <th>{"Customer"}</th>
                            <th>{"Plan & Subscription"}</th>
                            <th>{"Churn Risk"}</th>
                            <th>{"Risk Theme"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>

            if view.has_controls() {
                <Pagination
                    current_page={view.page}
                    total_pages={view.total_pages}
                    summary={view.summary()}
                    on_page_change={on_page_change}
                />
            }

            <CustomerProfileModal
                show={selected.is_some()}
                customer={(*selected).clone()}
                on_close={on_close_profile}
            />
        </div>
    }
}
