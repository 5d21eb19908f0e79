use common::RiskLevel;
use yew::prelude::*;

use super::level_classes;
use crate::mock_data::get_risk_bands;

#[function_component(RiskBands)]
pub fn risk_bands() -> Html {
    html! {
        <div>
            <h3 class="text-lg font-semibold mb-1">{"How churn risk levels performed historically"}</h3>
            <p class="text-sm text-base-content/70 mb-6">
                {"Based on customers scored 90 days ago and churn observed over the following 90 days"}
            </p>
            <div class="space-y-4">
                { for get_risk_bands().into_iter().map(|band| {
                    let icon = if band.level == RiskLevel::Low { "fas fa-check-circle" } else { "fas fa-exclamation-circle" };
                    html! {
                        <div key={band.level.as_str()} class="border border-base-300 rounded-lg p-4">
                            <div class="flex items-start gap-4">
                                <div class={classes!("flex-shrink-0", "w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", level_classes(band.level))}>
                                    <i class={icon}></i>
                                </div>
                                <div class="flex-1 min-w-0">
                                    <div class="flex items-baseline justify-between gap-4 mb-1">
                                        <div>
                                            <span class="font-semibold">{band.level.title()}</span>
                                            <span class="text-base-content/70">{format!(" - {}", band.subtitle)}</span>
                                        </div>
                                        <span class="font-semibold whitespace-nowrap">
                                            {band.stat}<span class="font-normal text-base-content/70">{" churned"}</span>
                                        </span>
                                    </div>
                                    <p class="font-medium mb-2">{band.description}</p>
                                    <p class="text-xs text-base-content/70">{band.explanation}</p>
                                </div>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
