use common::format::usd;
use common::profile::{FactorIcon, ProfileSummary, RiskFactor, Severity, LAST_UPDATED, MODEL_VERSION};
use common::{ChurnDriver, CustomerWithDrivers, Impact};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomerProfileModalProps {
    pub show: bool,
    pub customer: Option<CustomerWithDrivers>,
    pub on_close: Callback<()>,
}

fn factor_row(factor: &RiskFactor) -> Html {
    let icon = match factor.icon {
        FactorIcon::Calendar => "fas fa-calendar-alt",
        FactorIcon::Card => "fas fa-credit-card",
        FactorIcon::Mail => "fas fa-envelope",
    };
    let (bar, text) = match factor.severity() {
        Severity::Severe => ("bg-red-500", "text-red-600"),
        Severity::Elevated => ("bg-orange-500", "text-orange-600"),
        Severity::Mild => ("bg-yellow-500", "text-yellow-600"),
    };

    html! {
        <div class="space-y-3">
            <div class="flex items-start justify-between gap-4">
                <div class="flex items-start gap-3 flex-1">
                    <i class={classes!(icon, "text-xl", "mt-0.5", "text-base-content/70")}></i>
                    <div class="flex-1">
                        <div class="font-medium text-sm mb-1">{&factor.title}</div>
                        if let Some(subtitle) = &factor.subtitle {
                            <div class="text-xs text-base-content/60 mb-1">{subtitle}</div>
                        }
                        <p class="text-sm text-base-content/70">{factor.description}</p>
                    </div>
                </div>
                <div class={classes!(text, "font-bold", "text-sm", "whitespace-nowrap")}>
                    {format!("{:.1}x", factor.multiplier)}
                </div>
            </div>
            <div class="relative h-2 bg-base-200 rounded-full overflow-hidden">
                <div class={classes!("h-full", bar)} style={format!("width: {}%", factor.bar_width())}></div>
            </div>
        </div>
    }
}

fn driver_row(driver: &ChurnDriver) -> Html {
    let (icon, tone) = match driver.impact {
        Impact::Increase => ("fas fa-arrow-up", "text-error"),
        Impact::Decrease => ("fas fa-arrow-down", "text-success"),
    };
    html! {
        <li key={driver.id.clone()} class="flex items-center gap-2 text-sm">
            <span class="badge badge-ghost badge-sm">{format!("#{}", driver.priority)}</span>
            <i class={classes!(icon, tone)}></i>
            <span>{&driver.driver_name}</span>
        </li>
    }
}

#[function_component(CustomerProfileModal)]
pub fn customer_profile_modal(props: &CustomerProfileModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let Some(customer) = props.customer.as_ref().filter(|_| props.show) else {
        return html! {};
    };
    let summary = ProfileSummary::for_customer(customer);

    html! {
        <dialog class="modal modal-open" id="customer_profile_modal">
            <div class="modal-box w-11/12 max-w-6xl p-0">
                <div class="sticky top-0 bg-base-100 border-b border-base-300 px-6 py-4 flex items-center justify-between z-10">
                    <div>
                        <h3 class="font-bold text-2xl">{"Customer Profile"}</h3>
                        <p class="text-sm text-base-content/70">{&summary.email}</p>
                    </div>
                    <button class="btn btn-sm btn-circle btn-ghost" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <div class="p-6 space-y-6">
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                        <div class="stat bg-base-200 rounded-lg">
                            <div class="stat-title">{"Customer ID"}</div>
                            <div class="stat-value text-lg">{&summary.id}</div>
                        </div>
                        <div class="stat bg-base-200 rounded-lg">
                            <div class="stat-title">{"Churn Score"}</div>
                            <div class="stat-value text-lg text-error">{summary.churn_score}</div>
                        </div>
                        <div class="stat bg-base-200 rounded-lg">
                            <div class="stat-title">{"ARR at Risk"}</div>
                            <div class="stat-value text-lg">{format!("{} / year", usd(summary.arr_at_risk))}</div>
                        </div>
                        <div class="stat bg-base-200 rounded-lg">
                            <div class="stat-title">{"Subscription Plan"}</div>
                            <div class="stat-value text-lg">{&summary.plan}</div>
                        </div>
                    </div>

                    <div class="card bg-base-100 border border-base-300">
                        <div class="card-body p-0">
                            <h3 class="card-title px-8 pt-6">{"Churn Risk Insights"}</h3>
                            <div class="grid grid-cols-1 lg:grid-cols-2">
                                <div class="p-8 lg:border-r border-base-300">
                                    <h4 class="font-semibold mb-6">{"Factors Affecting Churn"}</h4>
                                    <div class="space-y-6">
                                        { for summary.risk_factors.iter().map(factor_row) }
                                    </div>
                                </div>

                                <div class="p-8 bg-base-200 space-y-6">
                                    <div>
                                        <h4 class="font-semibold mb-3">{"Summary of Insights"}</h4>
                                        <div class="bg-base-100 border border-base-300 rounded-lg p-4">
                                            <div class="flex items-start gap-3 mb-3">
                                                <i class="fas fa-arrow-trend-up text-error mt-1"></i>
                                                <div>
                                                    <div class="text-2xl font-bold text-error">
                                                        {format!("{}x", summary.overall_multiplier)}
                                                    </div>
                                                    <div class="text-xs uppercase tracking-wide text-base-content/60">
                                                        {"Higher Churn Risk"}
                                                    </div>
                                                </div>
                                            </div>
                                            <p class="text-sm">{summary.overall_description}</p>
                                        </div>
                                        <div class="flex items-center gap-2 mt-2 text-xs text-base-content/60">
                                            <span>{format!("Updated {}", LAST_UPDATED)}</span>
                                            <span>{"•"}</span>
                                            <span>{format!("Model {}", MODEL_VERSION)}</span>
                                        </div>
                                    </div>

                                    <button class="btn btn-primary w-full">{"Take Action in Growth"}</button>

                                    <div>
                                        <h4 class="font-semibold mb-3">{"Suggested Plays"}</h4>
                                        <ul class="bg-base-100 border border-base-300 rounded-lg p-4 space-y-2 list-disc list-inside text-sm">
                                            { for summary.suggested_plays.iter().map(|play| html! { <li>{*play}</li> }) }
                                        </ul>
                                    </div>

                                    <div>
                                        <h4 class="font-semibold mb-3">{"Recorded Churn Drivers"}</h4>
                                        if summary.drivers.is_empty() {
                                            <p class="text-sm text-base-content/60">{"No drivers recorded for this customer."}</p>
                                        } else {
                                            <ul class="space-y-2">
                                                { for summary.drivers.iter().map(driver_row) }
                                            </ul>
                                        }
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
