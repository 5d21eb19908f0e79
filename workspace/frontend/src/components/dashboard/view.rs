use common::{AdvancedFilter, DashboardFilters, RiskFilter, RiskLevel, RiskTheme, ThemeFilter};
use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use super::filter_bar::FilterBar;
use super::insights::Insights;
use super::risk_overview::RiskOverview;
use super::themes_panel::ThemesPanel;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::components::customer_table::CustomerTable;
use crate::components::modals::{
    DataConnectorModal, EnableChurnScoreModal, FilterListModal, RiskSegmentModal, RiskThemesExplainerModal,
};
use crate::hooks::use_churn_data;

/// Delay before scrolling so the filtered table has rendered.
const SCROLL_DELAY_MS: u32 = 100;

fn schedule_scroll(target: NodeRef) {
    Timeout::new(SCROLL_DELAY_MS, move || {
        if let Some(element) = target.cast::<web_sys::Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
    .forget();
}

fn close(flag: &UseStateHandle<bool>) -> Callback<()> {
    let flag = flag.clone();
    Callback::from(move |_| flag.set(false))
}

fn open(flag: &UseStateHandle<bool>) -> Callback<MouseEvent> {
    let flag = flag.clone();
    Callback::from(move |_| flag.set(true))
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let data = use_churn_data();
    let filters = use_state(DashboardFilters::default);
    let show_enable = use_state(|| false);
    let show_filter_list = use_state(|| false);
    let show_connectors = use_state(|| false);
    let show_themes = use_state(|| false);
    let segment = use_state(|| None::<RiskLevel>);
    let table_ref = use_node_ref();

    if data.loading {
        return html! { <Loading text={"Loading churn data..."} /> };
    }

    if let Some(error) = &data.error {
        return html! { <ErrorDisplay message={error.clone()} on_retry={data.refetch.clone()} /> };
    }

    let on_filters_change = {
        let filters = filters.clone();
        Callback::from(move |next: DashboardFilters| filters.set(next))
    };

    let on_risk_select = {
        let filters = filters.clone();
        let table_ref = table_ref.clone();
        Callback::from(move |level: RiskLevel| {
            log::debug!("Risk card selected: {}", level.as_str());
            let mut next = (*filters).clone();
            next.risk = RiskFilter::Level(level);
            filters.set(next);
            schedule_scroll(table_ref.clone());
        })
    };

    let on_theme_click = {
        let filters = filters.clone();
        let table_ref = table_ref.clone();
        Callback::from(move |theme: RiskTheme| {
            let mut next = (*filters).clone();
            next.theme = ThemeFilter::Theme(theme);
            filters.set(next);
            schedule_scroll(table_ref.clone());
        })
    };

    let on_theme_selected = {
        let table_ref = table_ref.clone();
        Callback::from(move |_: RiskTheme| schedule_scroll(table_ref.clone()))
    };

    let on_view_segment = {
        let segment = segment.clone();
        Callback::from(move |level: RiskLevel| segment.set(Some(level)))
    };

    let on_close_segment = {
        let segment = segment.clone();
        Callback::from(move |_| segment.set(None))
    };

    let on_apply_filters = {
        let filters = filters.clone();
        Callback::from(move |advanced: Vec<AdvancedFilter>| {
            let mut next = (*filters).clone();
            next.advanced = advanced;
            filters.set(next);
        })
    };

    let on_open_filter_list = {
        let show_filter_list = show_filter_list.clone();
        Callback::from(move |_| show_filter_list.set(true))
    };

    let on_learn_more = {
        let show_themes = show_themes.clone();
        Callback::from(move |_| show_themes.set(true))
    };

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">{"Predictive Intelligence Dashboard"}</h1>
                <p class="text-base-content/70 mt-1">{"Predict, prevent, and reduce subscription churn"}</p>
            </div>

            <div class="alert alert-info">
                <i class="fas fa-circle-info"></i>
                <div>
                    <h3 class="font-semibold">{"You are viewing demo data"}</h3>
                    <p class="text-sm">{"Enable Churn Score to start predicting churn on your own customers."}</p>
                </div>
                <button class="btn btn-sm btn-primary" onclick={open(&show_enable)}>{"Enable"}</button>
            </div>

            <RiskOverview
                stats={data.stats}
                on_select={on_risk_select}
                on_view_segment={on_view_segment}
            />

            <div class="card bg-base-100 border border-base-300">
                <div class="card-body">
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <h2 class="card-title">{"Improve Prediction Accuracy"}</h2>
                            <p class="text-sm text-base-content/70">
                                {"Connect more data sources to sharpen churn predictions."}
                            </p>
                        </div>
                        <button class="btn btn-outline btn-primary btn-sm" onclick={open(&show_connectors)}>
                            <i class="fas fa-plus"></i>
                            {"Add More Data"}
                        </button>
                    </div>
                    <ThemesPanel on_theme_click={on_theme_click} on_learn_more={on_learn_more} />
                </div>
            </div>

            <Insights />

            <div ref={table_ref} class="card bg-base-100 border border-base-300">
                <div class="px-6 py-4 border-b border-base-300">
                    <h2 class="text-lg font-semibold">{"Customer List"}</h2>
                </div>
                <FilterBar
                    filters={(*filters).clone()}
                    on_change={on_filters_change}
                    on_open_filter_list={on_open_filter_list}
                    on_theme_selected={on_theme_selected}
                />
                <CustomerTable customers={data.customers.clone()} filters={(*filters).clone()} />
            </div>

            <EnableChurnScoreModal show={*show_enable} on_close={close(&show_enable)} />
            <FilterListModal
                show={*show_filter_list}
                applied={filters.advanced.clone()}
                on_apply={on_apply_filters}
                on_close={close(&show_filter_list)}
            />
            <DataConnectorModal show={*show_connectors} on_close={close(&show_connectors)} />
            <RiskThemesExplainerModal show={*show_themes} on_close={close(&show_themes)} />
            if let Some(level) = *segment {
                <RiskSegmentModal
                    show={true}
                    level={level}
                    customers={data.customers.clone()}
                    on_close={on_close_segment}
                />
            }
        </div>
    }
}
