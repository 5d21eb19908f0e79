use yew::prelude::*;

use crate::components::widgets::{ActualVsPredictedChart, CohortChart, ModelPerformance, RiskBands};

#[function_component(Insights)]
pub fn insights() -> Html {
    html! {
        <div class="card bg-base-100 border border-base-300">
            <div class="card-body">
                <h2 class="card-title">{"Model Insights"}</h2>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <ModelPerformance />
                    <CohortChart />
                    <ActualVsPredictedChart />
                    <RiskBands />
                </div>
            </div>
        </div>
    }
}
