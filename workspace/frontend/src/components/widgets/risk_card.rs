use common::format::{percent_of, usd};
use common::theme::Trend;
use common::{LevelStats, RiskLevel, RiskStats};
use rust_decimal::Decimal;
use yew::prelude::*;

use super::level_classes;
use crate::mock_data::weekly_trend;

#[derive(Properties, PartialEq)]
pub struct RiskCardProps {
    pub level: RiskLevel,
    pub stats: RiskStats,
    pub on_select: Callback<RiskLevel>,
    pub on_view_segment: Callback<RiskLevel>,
}

/// One column of the "Customers Predicted to Churn" strip.
#[function_component(RiskCard)]
pub fn risk_card(props: &RiskCardProps) -> Html {
    let level = props.level;
    let LevelStats { count, arr } = props.stats.level(level);
    let count_pct = percent_of(Decimal::from(count), Decimal::from(props.stats.total_count()));
    let arr_pct = percent_of(arr, props.stats.total_arr());
    let trend = weekly_trend(level);

    // Growth is bad outside the low band, shrinkage is bad inside it.
    let trend_class = match (level, trend.direction) {
        (RiskLevel::High, Trend::Up) => "text-error",
        (RiskLevel::Medium, Trend::Up) => "text-warning",
        (RiskLevel::Low, Trend::Down) => "text-error",
        _ => "text-success",
    };
    let trend_icon = match trend.direction {
        Trend::Up => "fas fa-arrow-trend-up",
        Trend::Down => "fas fa-arrow-trend-down",
    };

    let on_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Risk card clicked: {}", level);
            on_select.emit(level);
        })
    };

    let on_view = {
        let on_view_segment = props.on_view_segment.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_view_segment.emit(level);
        })
    };

    html! {
        <div
            class={classes!("flex-1", "p-4", "flex", "flex-col", "items-center", "justify-center", "cursor-pointer", "hover:opacity-90", "transition-opacity", "min-h-[120px]", level_classes(level))}
            onclick={on_click}
        >
            <p class="text-xs font-semibold mb-1.5 uppercase tracking-wide">{level.title()}</p>

            <div class="flex items-baseline gap-1">
                <p class="text-base font-bold">{usd(arr)}</p>
                <p class="text-xs font-semibold opacity-80">{format!("({}%)", arr_pct)}</p>
            </div>
            <p class="text-xs opacity-70 mb-2">{"ARR at risk"}</p>

            <div class="flex items-baseline gap-1">
                <p class="text-base font-bold">{count}</p>
                <p class="text-xs font-semibold opacity-80">{format!("({}%)", count_pct)}</p>
            </div>
            <p class="text-xs opacity-70 mb-1.5">{"no of customers"}</p>

            <div class="flex items-center gap-1.5">
                <div class={classes!("flex", "items-center", "gap-1", trend_class)}>
                    <i class={classes!(trend_icon, "text-xs")}></i>
                    <span class="text-xs font-bold">{trend.value}</span>
                </div>
                <p class="text-xs opacity-60">{"vs. last week"}</p>
            </div>

            <button class="btn btn-link btn-xs mt-1" onclick={on_view}>{"View segment"}</button>
        </div>
    }
}
