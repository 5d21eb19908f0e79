use yew::prelude::*;

use crate::mock_data::{get_connectors, MODEL_ACCURACY_PERCENT};

#[derive(Properties, PartialEq)]
pub struct DataConnectorModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

/// Catalog of extra data sources. Nothing here connects anything yet.
#[function_component(DataConnectorModal)]
pub fn data_connector_modal(props: &DataConnectorModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="data_connector_modal">
            <div class="modal-box w-11/12 max-w-3xl">
                <div class="flex items-start justify-between mb-4">
                    <div>
                        <h3 class="font-bold text-lg">{"Add Data Sources"}</h3>
                        <p class="text-sm text-base-content/70">{"Connect additional data sources to improve prediction accuracy"}</p>
                    </div>
                    <button class="btn btn-sm btn-circle btn-ghost" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <div class="alert alert-info mb-4">
                    <div>
                        <p class="font-semibold">{format!("Current Model Accuracy: {}%", MODEL_ACCURACY_PERCENT)}</p>
                        <p class="text-xs">{"Adding more data sources can improve prediction accuracy by up to 15%"}</p>
                    </div>
                </div>

                <div class="space-y-3">
                    { for get_connectors().into_iter().map(|connector| html! {
                        <div key={connector.id} class="group border border-base-300 rounded-lg p-3 hover:bg-base-200 transition-all">
                            <div class="flex items-start gap-3">
                                <div class="p-2 bg-primary/10 rounded-md">
                                    <i class={classes!(connector.icon, "text-primary")}></i>
                                </div>
                                <div class="flex-1">
                                    <div class="flex items-center justify-between mb-1">
                                        <h4 class="font-semibold">{connector.name}</h4>
                                        <span class="badge badge-success badge-sm">{connector.status}</span>
                                    </div>
                                    <p class="text-sm text-base-content/70 mb-1">{connector.description}</p>
                                    <div class="flex items-center justify-between">
                                        <span class="text-xs font-medium text-primary">{connector.impact}</span>
                                        <button class="btn btn-primary btn-xs opacity-0 group-hover:opacity-100" onclick={on_close.clone()}>
                                            {"Connect"}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    })}
                </div>

                <div class="modal-action justify-between items-center">
                    <p class="text-xs text-base-content/70">
                        {"Need help? "}<span class="link link-primary">{"Contact support"}</span>
                    </p>
                    <button type="button" class="btn" onclick={on_close.clone()}>{"Close"}</button>
                </div>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close.clone()}>{"close"}</button>
            </form>
        </dialog>
    }
}
