use common::filters::{conditions_for, search_attributes};
use common::{AdvancedFilter, FilterDraft};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterListModalProps {
    pub show: bool,
    /// Filters currently applied on the dashboard.
    pub applied: Vec<AdvancedFilter>,
    pub on_apply: Callback<Vec<AdvancedFilter>>,
    pub on_close: Callback<()>,
}

/// Builder for the advanced filter list.
///
/// Edits go to a draft. Apply hands the draft to the dashboard, Discard
/// resets it to the applied list; the header close button leaves the draft
/// as it is for the next opening.
#[function_component(FilterListModal)]
pub fn filter_list_modal(props: &FilterListModalProps) -> Html {
    let draft = use_state(|| FilterDraft::seeded(&props.applied));

    {
        let draft = draft.clone();
        use_effect_with(props.applied.clone(), move |applied| {
            draft.set(FilterDraft::seeded(applied));
            || ()
        });
    }

    let update = {
        let draft = draft.clone();
        move |f: Box<dyn Fn(&mut FilterDraft)>| {
            let mut next = (*draft).clone();
            f(&mut next);
            draft.set(next);
        }
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_apply = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let filters = draft.apply();
            log::debug!("Applying {} advanced filters", filters.len());
            on_apply.emit(filters);
            on_close.emit(());
        })
    };

    let on_discard = {
        let draft = draft.clone();
        let applied = props.applied.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.discard(&applied);
            draft.set(next);
            on_close.emit(());
        })
    };

    let on_start = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(Box::new(|d| d.selecting = true)))
    };

    let on_search = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let term = input.value();
            update(Box::new(move |d| d.search = term.clone()));
        })
    };

    let on_add = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            let now = js_sys::Date::now() as i64;
            update(Box::new(move |d| {
                d.add(now);
            }));
        })
    };

    let on_cancel = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            update(Box::new(|d| {
                d.selecting = false;
                d.attribute = None;
                d.condition = None;
                d.search.clear();
            }))
        })
    };

    let chips = draft.filters.iter().map(|filter| {
        let on_remove = {
            let update = update.clone();
            let id = filter.id.clone();
            Callback::from(move |_: MouseEvent| {
                let id = id.clone();
                update(Box::new(move |d| d.remove(&id)))
            })
        };
        html! {
            <div key={filter.id.clone()} class="alert alert-info py-2 flex justify-between">
                <span class="text-sm">{filter.label()}</span>
                <button class="btn btn-ghost btn-xs text-error" onclick={on_remove}>
                    <i class="fas fa-times"></i>
                </button>
            </div>
        }
    });

    let attributes = search_attributes(&draft.search).into_iter().map(|attribute| {
        let on_pick = {
            let update = update.clone();
            Callback::from(move |_: MouseEvent| update(Box::new(move |d| d.select_attribute(attribute))))
        };
        let active = draft.attribute.as_deref() == Some(attribute);
        html! {
            <li key={attribute}>
                <a class={classes!(active.then_some("active"))} onclick={on_pick}>{attribute}</a>
            </li>
        }
    });

    let conditions = draft.attribute.as_deref().map(|attribute| {
        conditions_for(attribute)
            .iter()
            .map(|condition| {
                let condition = *condition;
                let on_pick = {
                    let update = update.clone();
                    Callback::from(move |_: MouseEvent| update(Box::new(move |d| d.select_condition(condition))))
                };
                let active = draft.condition.as_deref() == Some(condition);
                html! {
                    <button
                        key={condition}
                        class={classes!("btn", "btn-sm", "btn-block", "justify-start", if active { "btn-info" } else { "btn-outline" })}
                        onclick={on_pick}
                    >
                        {condition}
                    </button>
                }
            })
            .collect::<Html>()
    });

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="filter_list_modal">
            <div class="modal-box w-11/12 max-w-2xl">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="font-bold text-lg">{"Filter List"}</h3>
                    <button class="btn btn-sm btn-circle btn-ghost" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                if !draft.filters.is_empty() {
                    <div class="mb-6 space-y-3">{ for chips }</div>
                }

                if draft.selecting {
                    <div class="bg-info/10 rounded-lg p-4 space-y-4">
                        <h4 class="text-sm font-semibold">{"Choose Attribute"}</h4>
                        <label class="input input-bordered input-sm flex items-center gap-2">
                            <i class="fas fa-search text-base-content/50"></i>
                            <input
                                type="text"
                                class="grow"
                                placeholder="Search attributes"
                                value={draft.search.clone()}
                                oninput={on_search}
                            />
                        </label>
                        <div class="bg-base-100 rounded-md border border-base-300 max-h-64 overflow-y-auto">
                            <ul class="menu menu-sm">
                                <li class="menu-title">{"Customer"}</li>
                                { for attributes }
                            </ul>
                        </div>

                        if let Some(conditions) = conditions {
                            <div>
                                <h4 class="text-sm font-semibold mb-2">{"Select Condition"}</h4>
                                <div class="space-y-2">{conditions}</div>
                            </div>
                        }

                        <div class="flex gap-3">
                            <button class="btn btn-info btn-sm flex-1" disabled={!draft.can_add()} onclick={on_add}>
                                {"Add Filter"}
                            </button>
                            <button class="btn btn-ghost btn-sm" onclick={on_cancel}>{"Cancel"}</button>
                        </div>
                    </div>
                } else {
                    <button class="btn btn-ghost btn-sm text-info" onclick={on_start}>
                        <i class="fas fa-plus"></i>
                        {"Add Filter"}
                    </button>
                }

                <div class="modal-action justify-between">
                    <button type="button" class="btn btn-ghost text-info" onclick={on_discard}>{"Discard Filter"}</button>
                    <button type="button" class="btn btn-info" onclick={on_apply}>{"Apply Filter"}</button>
                </div>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
