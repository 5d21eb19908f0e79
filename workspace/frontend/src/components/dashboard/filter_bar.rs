use common::{DashboardFilters, RiskFilter, RiskLevel, RiskTheme, ThemeFilter};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filters: DashboardFilters,
    pub on_change: Callback<DashboardFilters>,
    pub on_open_filter_list: Callback<()>,
    /// Fired when a specific theme is picked.
    pub on_theme_selected: Callback<RiskTheme>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let filters = &props.filters;

    let level_buttons = RiskLevel::ALL.into_iter().map(|level| {
        let active = filters.risk == RiskFilter::Level(level);
        let onclick = {
            let filters = filters.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = filters.clone();
                next.risk = if active { RiskFilter::All } else { RiskFilter::Level(level) };
                on_change.emit(next);
            })
        };
        html! {
            <button
                key={level.as_str()}
                class={classes!("btn", "btn-sm", if active { "btn-primary" } else { "btn-outline" })}
                {onclick}
            >
                {level.title()}
            </button>
        }
    });

    let on_theme_change = {
        let filters = filters.clone();
        let on_change = props.on_change.clone();
        let on_theme_selected = props.on_theme_selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let theme = match select.value().parse::<ThemeFilter>() {
                Ok(theme) => theme,
                Err(err) => {
                    log::warn!("{}", err);
                    return;
                }
            };
            let mut next = filters.clone();
            next.theme = theme;
            on_change.emit(next);
            if let ThemeFilter::Theme(theme) = theme {
                on_theme_selected.emit(theme);
            }
        })
    };

    let on_clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(DashboardFilters::default()))
    };

    let on_open_filter_list = {
        let on_open = props.on_open_filter_list.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    let chips = filters.advanced.iter().map(|filter| {
        let on_remove = {
            let filters = filters.clone();
            let on_change = props.on_change.clone();
            let id = filter.id.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = filters.clone();
                next.remove_advanced(&id);
                on_change.emit(next);
            })
        };
        html! {
            <span key={filter.id.clone()} class="badge badge-info badge-outline gap-1 py-3">
                {filter.label()}
                <button class="btn btn-ghost btn-xs px-1" onclick={on_remove}>
                    <i class="fas fa-times"></i>
                </button>
            </span>
        }
    });

    html! {
        <div class="flex flex-col gap-3 px-6 py-4 border-b border-base-300">
            <div class="flex flex-wrap items-center justify-between gap-3">
                <div class="flex flex-wrap items-center gap-2">
                    <span class="text-sm font-medium">{"Filters:"}</span>
                    { for level_buttons }
                    <select class="select select-sm select-bordered" onchange={on_theme_change}>
                        <option value={ThemeFilter::All.value()} selected={filters.theme == ThemeFilter::All}>
                            {"All Customers"}
                        </option>
                        { for RiskTheme::ALL.into_iter().map(|theme| {
                            let value = ThemeFilter::Theme(theme);
                            html! {
                                <option value={value.value()} selected={filters.theme == value}>{theme.name()}</option>
                            }
                        })}
                    </select>
                    <button class="btn btn-sm btn-ghost" onclick={on_open_filter_list}>
                        <i class="fas fa-filter"></i>
                        {"Filter list"}
                    </button>
                    if filters.has_active() {
                        <button class="btn btn-sm btn-link" onclick={on_clear}>{"Clear selection"}</button>
                    }
                </div>
                <button class="btn btn-sm btn-primary">
                    <i class="fas fa-bolt"></i>
                    {"Take Action In Growth Play"}
                </button>
            </div>
            if !filters.advanced.is_empty() {
                <div class="flex flex-wrap gap-2">{ for chips }</div>
            }
        </div>
    }
}
