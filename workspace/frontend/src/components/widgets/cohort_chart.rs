use yew::prelude::*;

use crate::mock_data::{get_cohorts, COHORT_SCALE};

#[function_component(CohortChart)]
pub fn cohort_chart() -> Html {
    let cohorts = get_cohorts();

    html! {
        <div>
            <h4 class="text-sm font-bold mb-2">{"Subscription Cohorts"}</h4>
            <h6 class="text-xs font-bold text-base-content/60 mb-6">{"Subscriptions at Risk by Cohort"}</h6>
            <div class="space-y-6">
                { for cohorts.iter().map(|cohort| {
                    let width = cohort.at_risk * 100 / COHORT_SCALE;
                    html! {
                        <div key={cohort.label} class="flex items-center gap-4">
                            <div class="w-40 text-right text-xs">{cohort.label}</div>
                            <div class="flex-1 h-4 bg-base-200 rounded overflow-hidden">
                                <div class="h-full rounded bg-primary transition-all duration-300" style={format!("width: {}%", width)}></div>
                            </div>
                            <div class="w-12 text-xs font-bold">{cohort.at_risk}</div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
