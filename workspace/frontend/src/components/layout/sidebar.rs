use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::settings;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let docs_url = format!("{}/swagger-ui", settings::get_settings().data_url.trim_end_matches('/'));

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="app-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-chart-line"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"ChurnLens"}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Dashboard} classes="nav-link"><i class="fas fa-home w-5"></i> {"Dashboard"}</Link<Route>></li>

                <div class="divider"></div>

                <li><a class="nav-link" href={docs_url} target="_blank"><i class="fas fa-book w-5"></i> {"API docs"}</a></li>
            </ul>
        </div>
    }
}
