use common::format::last_refreshed_label;
use common::{RiskLevel, RiskStats};
use yew::prelude::*;

use crate::components::widgets::RiskCard;

const CALCULATION_STEPS: [(&str, &str); 4] = [
    ("Step 1: Historical data", "Analyzes billing, renewals, and churn patterns"),
    ("Step 2: Pattern learning", "Identifies behaviors before churn"),
    ("Step 3: Ranking risk", "Customers are scored and ranked by churn likelihood"),
    ("Step 4: Segmenting risk", "🔴 High 🟡 Medium 🟢 Low"),
];

#[derive(Properties, PartialEq)]
pub struct RiskOverviewProps {
    pub stats: RiskStats,
    pub on_select: Callback<RiskLevel>,
    pub on_view_segment: Callback<RiskLevel>,
}

#[function_component(RiskOverview)]
pub fn risk_overview(props: &RiskOverviewProps) -> Html {
    let show_coverage = use_state(|| false);
    let refreshed = last_refreshed_label(chrono::Local::now());

    let on_toggle = {
        let show_coverage = show_coverage.clone();
        Callback::from(move |_: MouseEvent| show_coverage.set(!*show_coverage))
    };
    let on_enter = {
        let show_coverage = show_coverage.clone();
        Callback::from(move |_: MouseEvent| show_coverage.set(true))
    };
    let on_leave = {
        let show_coverage = show_coverage.clone();
        Callback::from(move |_: MouseEvent| show_coverage.set(false))
    };

    html! {
        <div class="card bg-base-100 border border-base-300 overflow-visible">
            <div class="px-6 py-4 border-b border-base-300 flex items-start justify-between">
                <div>
                    <h2 class="text-lg font-semibold">{"Customers Predicted to Churn"}</h2>
                    <p class="text-sm text-base-content/70 mt-1">{"Risk segmentation based on churn prediction model"}</p>
                </div>
                <div class="flex flex-col items-end gap-1">
                    <p class="text-xs text-base-content/60">{format!("Model last refreshed on {}", refreshed)}</p>
                    <div class="flex items-center gap-1">
                        <p class="text-xs text-base-content/40">{"How churn scores are calculated"}</p>
                        <div class="relative">
                            <button
                                class="btn btn-ghost btn-xs btn-circle"
                                onclick={on_toggle}
                                onmouseenter={on_enter}
                                onmouseleave={on_leave}
                            >
                                <i class="fas fa-info-circle"></i>
                            </button>
                            if *show_coverage {
                                <div class="absolute right-0 top-8 w-[280px] bg-base-100 rounded-lg shadow-2xl border border-base-300 z-50 p-4">
                                    <h3 class="font-semibold mb-2">{"How risk is calculated"}</h3>
                                    <div class="space-y-2">
                                        { for CALCULATION_STEPS.iter().map(|(step, detail)| html! {
                                            <div>
                                                <p class="text-xs font-medium">{*step}</p>
                                                <p class="text-xs text-base-content/70">{*detail}</p>
                                            </div>
                                        })}
                                    </div>
                                    <div class="mt-2 pt-2 border-t border-base-300">
                                        <p class="text-xs text-base-content/60">{"Updated weekly"}</p>
                                    </div>
                                </div>
                            }
                        </div>
                    </div>
                </div>
            </div>
            <div class="flex overflow-hidden rounded-b-2xl">
                { for RiskLevel::ALL.into_iter().map(|level| html! {
                    <RiskCard
                        key={level.as_str()}
                        level={level}
                        stats={props.stats}
                        on_select={props.on_select.clone()}
                        on_view_segment={props.on_view_segment.clone()}
                    />
                })}
            </div>
        </div>
    }
}
