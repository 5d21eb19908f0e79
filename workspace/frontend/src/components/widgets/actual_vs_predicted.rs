use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::mock_data::get_churn_history;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn to_js(value: &serde_json::Value) -> Option<JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| log::error!("Failed to convert chart spec: {}", e))
        .ok()
}

/// Monthly churned subscriptions, actual against predicted.
#[function_component(ActualVsPredictedChart)]
pub fn actual_vs_predicted_chart() -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(chart_ref.clone(), move |chart_ref| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let history = get_churn_history();
            let months: Vec<&str> = history.iter().map(|p| p.month).collect();
            let actual: Vec<u32> = history.iter().map(|p| p.actual).collect();
            let predicted: Vec<u32> = history.iter().map(|p| p.predicted).collect();

            let traces = serde_json::json!([
                {
                    "x": months,
                    "y": actual,
                    "type": "scatter",
                    "mode": "lines",
                    "line": {"color": "#3b82f6", "width": 1},
                    "name": "Actual"
                },
                {
                    "x": months,
                    "y": predicted,
                    "type": "scatter",
                    "mode": "lines",
                    "line": {"color": "#9ca3af", "width": 2, "dash": "dot"},
                    "name": "Predicted"
                }
            ]);

            let layout = serde_json::json!({
                "margin": {"t": 10, "r": 10, "l": 40, "b": 30},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "xaxis": {"showgrid": false},
                "yaxis": {"showgrid": true, "gridcolor": "#eee", "range": [0, 600]},
                "showlegend": true,
                "legend": {"orientation": "h", "y": 1.15}
            });

            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            let div_id = element.id();
            if !div_id.is_empty() {
                if let (Some(data), Some(layout), Some(config)) = (to_js(&traces), to_js(&layout), to_js(&config)) {
                    newPlot(&div_id, data, layout, config);
                }
            }
        }
        || ()
    });

    html! {
        <div>
            <h3 class="text-lg font-semibold mb-2">{"Actual vs Predicted Churn"}</h3>
            <div ref={chart_ref} id="chart-actual-vs-predicted" class="chart-container" style="height: 200px;"></div>
        </div>
    }
}
