//! Domain types and pure dashboard logic shared between the table service and
//! the frontend. Nothing in here touches the network or the DOM, so it
//! compiles for both the native server and the wasm dashboard.

pub mod export;
pub mod filters;
pub mod format;
pub mod join;
pub mod listing;
pub mod model;
pub mod order;
pub mod profile;
pub mod score;
pub mod stats;
pub mod theme;

pub use export::{customers_to_csv, CSV_HEADER};
pub use filters::{AdvancedFilter, FilterDraft};
pub use join::attach_drivers;
pub use listing::{
    DashboardFilters, PageView, RiskFilter, SortKey, TableBody, TableCursor, ThemeFilter, EMPTY_TABLE_MESSAGE, PAGE_SIZE,
};
pub use model::{ChurnDriver, Customer, CustomerWithDrivers, Impact, RiskLevel};
pub use order::{Direction, Order, OrderError};
pub use stats::{LevelStats, RiskStats};
pub use theme::RiskTheme;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Names of the two tables the dashboard reads.
pub const CUSTOMERS_TABLE: &str = "customers";
pub const CHURN_DRIVERS_TABLE: &str = "churn_drivers";

/// Error body returned by the table service for a failed read.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ServiceError {
    /// Human readable message
    pub message: String,
    /// Machine readable error code
    pub code: String,
}
