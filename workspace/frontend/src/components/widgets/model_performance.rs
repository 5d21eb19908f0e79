use yew::prelude::*;

use crate::mock_data::{PRECISION_PERCENT, RECALL_PERCENT};

fn metric_bar(label: &str, percent: u32) -> Html {
    html! {
        <div>
            <div class="flex justify-between items-center mb-2">
                <span class="text-sm font-medium">{label}</span>
                <span class="text-sm font-bold">{format!("{}%", percent)}</span>
            </div>
            <progress class="progress progress-primary w-full h-3" value={percent.to_string()} max="100"></progress>
        </div>
    }
}

#[function_component(ModelPerformance)]
pub fn model_performance() -> Html {
    html! {
        <div>
            <h3 class="text-lg font-semibold mb-4">{"Model Performance"}</h3>
            <div class="space-y-4">
                {metric_bar("Precision", PRECISION_PERCENT)}
                {metric_bar("Recall", RECALL_PERCENT)}
            </div>
            <div class="mt-6 pt-4 border-t border-base-300">
                <h4 class="text-sm font-semibold mb-2">{"Interpretation"}</h4>
                <p class="text-xs text-base-content/70 mb-1">
                    {"Of 5 subscriptions predicted to churn, 3 actually cancelled."}
                </p>
                <p class="text-xs text-base-content/70">
                    {"Of 5 subscriptions that cancelled, 3 were identified by the model."}
                </p>
            </div>
        </div>
    }
}
