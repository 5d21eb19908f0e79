use common::theme::{Tone, Trend};
use common::RiskTheme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeBadgeProps {
    pub theme: RiskTheme,
}

#[function_component(ThemeBadge)]
pub fn theme_badge(props: &ThemeBadgeProps) -> Html {
    let icon = match props.theme.trend() {
        Trend::Up => "fas fa-arrow-trend-up",
        Trend::Down => "fas fa-arrow-trend-down",
    };
    let tone = match props.theme.tone() {
        Tone::Danger => "text-error",
        Tone::Warning => "text-warning",
    };

    html! {
        <div class="inline-flex items-center gap-1">
            <i class={classes!(icon, tone, "text-lg")}></i>
            <span class="font-medium">{props.theme.name()}</span>
        </div>
    }
}
