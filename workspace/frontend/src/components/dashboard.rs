mod filter_bar;
mod insights;
mod risk_overview;
mod themes_panel;
mod view;

pub use view::Dashboard;
