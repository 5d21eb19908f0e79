use common::export::segment_file_name;
use common::format::compact_usd;
use common::score::segment;
use common::{customers_to_csv, CustomerWithDrivers, RiskLevel};
use rust_decimal::Decimal;
use std::rc::Rc;
use yew::prelude::*;

use crate::common::download::download_csv;
use crate::components::customer_table::CustomerTable;
use crate::components::widgets::level_classes;

#[derive(Properties, PartialEq)]
pub struct RiskSegmentModalProps {
    pub show: bool,
    pub level: RiskLevel,
    pub customers: Rc<Vec<CustomerWithDrivers>>,
    pub on_close: Callback<()>,
}

/// Customers of one score segment (50/30 cut-offs) with CSV export.
#[function_component(RiskSegmentModal)]
pub fn risk_segment_modal(props: &RiskSegmentModalProps) -> Html {
    let level = props.level;
    let members = use_memo((props.customers.clone(), level), |(customers, level)| {
        segment(customers, *level)
    });

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_export = {
        let members = members.clone();
        Callback::from(move |_: MouseEvent| {
            let file_name = segment_file_name(level);
            if let Err(e) = download_csv(&file_name, &customers_to_csv(&members)) {
                log::error!("Segment export failed: {:?}", e);
            }
        })
    };

    if !props.show {
        return html! {};
    }

    let total_arr: Decimal = members.iter().map(|c| c.arr).sum();
    let headline = format!("{} customers · {} ARR at risk", members.len(), compact_usd(total_arr, 1));

    html! {
        <dialog class="modal modal-open" id="risk_segment_modal">
            <div class="modal-box w-11/12 max-w-6xl p-0 flex flex-col max-h-[90vh]">
                <div class={classes!("flex", "items-center", "justify-between", "p-6", "border-b", "border-base-300", level_classes(level))}>
                    <div>
                        <h3 class="text-2xl font-bold">{format!("{} Customers", level.title())}</h3>
                        <p class="text-sm mt-1 text-base-content/70">{headline}</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <button class="btn btn-sm btn-primary" onclick={on_export}>
                            <i class="fas fa-download"></i>
                            {"Export CSV"}
                        </button>
                        <button class="btn btn-sm btn-circle btn-ghost" onclick={on_close.clone()}>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                </div>
                <div class="flex-1 overflow-auto p-6">
                    <CustomerTable customers={members.clone()} show_toolbar={false} />
                </div>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
