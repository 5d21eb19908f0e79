use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RiskThemesExplainerModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

const SHAP_POINTS: [(&str, &str); 3] = [
    ("Individual Impact:", "Each customer attribute gets a SHAP value showing how much it increases or decreases churn risk"),
    ("Fair Attribution:", "Borrowed from game theory, SHAP fairly distributes prediction credit across all features"),
    ("Explainable AI:", "Unlike black-box models, SHAP provides transparency into why the model makes specific predictions"),
];

const SEGMENTATION_STEPS: [(&str, &str); 4] = [
    (
        "Step 1: Calculate SHAP Values",
        "For each customer, we compute how much each feature (payment history, engagement metrics, etc.) contributes to their churn risk score",
    ),
    (
        "Step 2: Aggregate by Theme",
        "Related features are grouped into themes (e.g., all payment-related signals form \"Payment Experience\")",
    ),
    (
        "Step 3: Rank by Impact",
        "Themes are ranked by their average SHAP magnitude to surface the most influential drivers of churn",
    ),
    (
        "Step 4: Assign Risk Levels",
        "Themes with consistently high positive SHAP values are labeled HIGH RISK, while stable patterns are MODERATE RISK",
    ),
];

fn topic(icon: &'static str, title: &'static str, body: Html) -> Html {
    html! {
        <div class="flex items-start gap-4">
            <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-md bg-primary/10">
                <i class={classes!(icon, "text-primary")}></i>
            </div>
            <div>
                <h4 class="font-bold mb-2">{title}</h4>
                {body}
            </div>
        </div>
    }
}

/// Static explanation of how risk themes are described to users.
#[function_component(RiskThemesExplainerModal)]
pub fn risk_themes_explainer_modal(props: &RiskThemesExplainerModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="risk_themes_modal">
            <div class="modal-box w-11/12 max-w-3xl space-y-6">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-xl">{"Understanding Risk Themes"}</h3>
                    <button class="btn btn-sm btn-circle btn-ghost" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                {topic("fas fa-bullseye", "What are Risk Themes?", html! {
                    <p>
                        {"Risk themes are clusters of behavioral patterns and customer attributes that indicate churn likelihood. \
                          Rather than showing individual data points, we group related signals into meaningful categories that explain "}
                        <em>{"why"}</em>
                        {" customers are at risk."}
                    </p>
                })}

                {topic("fas fa-brain", "How SHAP Values Work", html! {
                    <>
                        <p class="mb-2">
                            {"SHAP (SHapley Additive exPlanations) is an advanced machine learning technique that reveals which factors contribute most to each customer's churn risk score."}
                        </p>
                        <ul class="bg-base-200 rounded-md p-3 space-y-2 list-disc list-inside">
                            { for SHAP_POINTS.iter().map(|(label, text)| html! {
                                <li><strong>{*label}</strong>{" "}{*text}</li>
                            })}
                        </ul>
                    </>
                })}

                {topic("fas fa-arrow-trend-up", "Segmentation Process", html! {
                    <>
                        <p class="mb-2">{"We analyze SHAP values across your entire customer base to identify patterns:"}</p>
                        <div class="space-y-3">
                            { for SEGMENTATION_STEPS.iter().map(|(step, text)| html! {
                                <div class="border-l-4 border-primary bg-base-200 rounded-md p-3">
                                    <p class="font-medium mb-1">{*step}</p>
                                    <p class="text-xs">{*text}</p>
                                </div>
                            })}
                        </div>
                    </>
                })}

                <div class="bg-warning/10 border border-warning/40 rounded-md p-3">
                    <p class="font-medium mb-1">{"Why This Matters"}</p>
                    <p class="text-xs">
                        {"Understanding risk themes helps you take targeted action. Instead of generic retention campaigns, \
                          you can address specific pain points: fix payment friction for at-risk accounts, boost engagement \
                          for inactive users, or optimize renewal communications based on lifecycle stage."}
                    </p>
                </div>

                <div class="modal-action">
                    <button type="button" class="btn btn-primary" onclick={on_close.clone()}>{"Got it"}</button>
                </div>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
