use common::RiskTheme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemesPanelProps {
    pub on_theme_click: Callback<RiskTheme>,
    pub on_learn_more: Callback<()>,
}

fn theme_icon(theme: RiskTheme) -> &'static str {
    match theme {
        RiskTheme::PaymentExperience => "fas fa-credit-card",
        RiskTheme::EngagementDepth => "fas fa-arrow-trend-up",
        RiskTheme::RenewalTiming => "fas fa-clock",
        RiskTheme::LifecycleStage => "fas fa-rotate",
        RiskTheme::ValueAlignment => "fas fa-bullseye",
    }
}

/// "Top Risk Themes": expandable list; clicking a theme also filters the table.
#[function_component(ThemesPanel)]
pub fn themes_panel(props: &ThemesPanelProps) -> Html {
    let expanded = use_state(|| None::<RiskTheme>);

    let on_learn_more = {
        let on_learn_more = props.on_learn_more.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_learn_more.emit(());
        })
    };

    html! {
        <div class="rounded-lg bg-base-100 p-6 shadow-sm">
            <h3 class="text-lg font-semibold">{"Top Risk Themes"}</h3>
            <p class="text-sm text-base-content/70 mt-2">
                {"These themes summarize the primary reasons customers are at risk of cancellation."}
            </p>

            <div class="mt-6 space-y-3">
                { for RiskTheme::ALL.into_iter().map(|theme| {
                    let is_open = *expanded == Some(theme);
                    let on_toggle = {
                        let expanded = expanded.clone();
                        let on_theme_click = props.on_theme_click.clone();
                        Callback::from(move |_: MouseEvent| {
                            expanded.set(if is_open { None } else { Some(theme) });
                            on_theme_click.emit(theme);
                        })
                    };
                    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

                    html! {
                        <div key={theme.name()} class="border-l-4 border-l-orange-500 rounded-md border border-base-300">
                            <div class="flex items-center justify-between p-3 cursor-pointer hover:bg-base-200" onclick={on_toggle}>
                                <div class="flex items-center gap-2">
                                    <div class="flex h-8 w-8 items-center justify-center rounded bg-base-200">
                                        <i class={theme_icon(theme)}></i>
                                    </div>
                                    <h4 class="font-bold">{theme.name()}</h4>
                                </div>
                                <i class={if is_open { "fas fa-chevron-up" } else { "fas fa-chevron-down" }}></i>
                            </div>
                            if is_open {
                                <div class="px-3 pb-3 pt-3 border-t border-base-200">
                                    <ul class="space-y-1 ml-10 list-disc">
                                        { for theme.indicators().iter().map(|indicator| html! { <li>{*indicator}</li> }) }
                                    </ul>
                                    <p class="mt-2 ml-10 italic text-base-content/70">{theme.description()}</p>
                                    <button class="btn btn-info btn-sm mt-3 ml-10" onclick={stop}>
                                        <i class="fas fa-bolt"></i>
                                        {"Create a play in Growth"}
                                    </button>
                                </div>
                            }
                        </div>
                    }
                })}
            </div>

            <button class="btn btn-link btn-sm mt-3 px-0" onclick={on_learn_more}>
                {"Learn More"}
                <i class="fas fa-arrow-up-right-from-square"></i>
            </button>
        </div>
    }
}
