use common::score::{badge_label, badge_level};
use yew::prelude::*;

use super::level_classes;

const SCORE_HINT: &str =
    "Scores range from 0–100. Higher scores indicate higher churn risk relative to other customers.";

#[derive(Properties, PartialEq)]
pub struct ScoreBadgeProps {
    pub score: i32,
}

/// Churn score with its 70/40 label and a hover explanation.
#[function_component(ScoreBadge)]
pub fn score_badge(props: &ScoreBadgeProps) -> Html {
    let hovered = use_state(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div class="relative inline-block">
            <div
                class={classes!("inline-flex", "items-center", "gap-1", "px-2", "py-1", "rounded-md", "cursor-help", level_classes(badge_level(props.score)))}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                <span class="font-bold">{props.score}</span>
                <span class="font-semibold">{badge_label(props.score)}</span>
                <i class="fas fa-info-circle text-xs opacity-60"></i>
            </div>
            if *hovered {
                <div class="absolute z-50 w-64 bg-base-100 rounded-lg shadow-xl border border-base-300 p-3 left-0 top-full mt-2">
                    <p class="text-xs text-base-content/80">{SCORE_HINT}</p>
                </div>
            }
        </div>
    }
}
