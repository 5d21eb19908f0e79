use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnableChurnScoreModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

fn section(title: &str, body: &str) -> Html {
    html! {
        <div>
            <h4 class="font-semibold text-sm mb-1">{title.to_string()}</h4>
            <p class="text-sm">{body.to_string()}</p>
        </div>
    }
}

#[function_component(EnableChurnScoreModal)]
pub fn enable_churn_score_modal(props: &EnableChurnScoreModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let on_enable = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            log::info!("Churn score enable requested");
            on_close.emit(());
        })
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="enable_churn_score_modal">
            <div class="modal-box w-11/12 max-w-3xl space-y-6">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-2xl">{"Enable Churn Score"}</h3>
                    <button class="btn btn-sm btn-circle btn-ghost" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <div class="bg-orange-50 border border-orange-200 rounded-lg p-4 text-sm">
                    {"Thanks for showing interest in the "}<strong>{"Churn Score"}</strong>{" feature! As part of our "}
                    <strong>{"Early Access Program"}</strong>
                    {", we'll be enabling this for your Billing account. Here's what you can expect:"}
                </div>

                <div>
                    <h4 class="text-lg font-semibold mb-2">{"What is Churn Score?"}</h4>
                    <p class="text-sm">
                        {"Churn Score is a predictive indicator that helps you identify which of your active subscriptions are at risk of canceling in the near future."}
                    </p>
                </div>

                <div>
                    <h4 class="text-lg font-semibold mb-2">{"How does Churn Score work?"}</h4>
                    <p class="text-sm">
                        {"We look at billing patterns (failed payments, cancellations, downgrades, invoice activity) in your account and apply a prediction model to estimate the likelihood of churn."}
                    </p>
                </div>

                <div>
                    <h4 class="text-lg font-semibold mb-2">{"What do you get?"}</h4>
                    <ul class="list-disc list-inside space-y-2 text-sm ml-2">
                        <li>{"A score at the customer level, refreshed every week"}</li>
                        <li>{"A view of churn risk directly in the customer profile page"}</li>
                        <li>{"Early warning signals so your team can proactively engage at-risk customers"}</li>
                    </ul>
                </div>

                <div>
                    <h4 class="text-lg font-semibold mb-3">{"How does Churn Score work in your account?"}</h4>
                    <div class="space-y-4">
                        {section("Default Settings Applied:", "No setup required on your side. We'll use standard billing indicators such as failed payments, subscription cancellations, downgrades, and invoice activity.")}
                        {section("Prediction Window:", "By default, we'll calculate churn risk over the next 90 days (adjustable in later phases).")}
                        {section("Churn Scores Visibility:", "You'll see churn scores at the subscription level, accessible in your customer profile page.")}
                        {section("Weekly Refresh:", "Churn scores will be refreshed every week based on your latest data.")}
                        {section("Usage:", "Use these scores to identify at-risk subscriptions early and take proactive action.")}
                    </div>
                </div>

                <div>
                    <h4 class="text-lg font-semibold mb-2">{"We'll be reaching out to get your feedback on:"}</h4>
                    <ul class="list-disc list-inside space-y-2 text-sm ml-2">
                        <li>{"How useful you find the scores in your day-to-day workflows"}</li>
                        <li>{"Preferred ways of viewing or exporting the churn scores"}</li>
                    </ul>
                    <p class="text-sm mt-3">
                        {"Your feedback will directly shape how we improve and roll out this feature more broadly."}
                    </p>
                </div>

                <div class="bg-base-200 border border-base-300 rounded-lg p-4 text-sm">
                    <p class="mb-2">
                        <strong>{"Would you like us to enable churn scores this week, so you can start seeing them in action?"}</strong>
                    </p>
                    <p class="italic text-base-content/70">{"Thanks again for being an early partner,"}</p>
                </div>

                <div class="modal-action">
                    <button type="button" class="btn btn-outline" onclick={on_close.clone()}>{"Cancel"}</button>
                    <button type="button" class="btn btn-primary" onclick={on_enable}>{"Enable Churn Score"}</button>
                </div>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
