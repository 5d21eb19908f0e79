use common::{ChurnDriver, Customer, ServiceError};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

/// Serialized rows keyed by table and query.
pub type TableCache = Cache<String, Arc<Vec<serde_json::Value>>>;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Recent table reads
    pub cache: TableCache,
    /// Required `apikey` header value, if any
    pub anon_key: Option<String>,
}

/// Query parameters of a table read
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct TableQuery {
    /// Comma separated columns, or `*` for all
    pub select: Option<String>,
    /// `column.asc` or `column.desc`
    pub order: Option<String>,
    /// Maximum number of rows
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u64>,
    /// `eq.{id}`; only valid on churn_drivers
    pub customer_id: Option<String>,
}

impl TableQuery {
    pub fn cache_key(&self, table: &str) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            table,
            self.select.as_deref().unwrap_or("*"),
            self.order.as_deref().unwrap_or(""),
            self.limit.map(|l| l.to_string()).unwrap_or_default(),
            self.customer_id.as_deref().unwrap_or("")
        )
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::tables::read_table,
    ),
    components(
        schemas(
            Customer,
            ChurnDriver,
            common::RiskLevel,
            common::Impact,
            ServiceError,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tables", description = "Read access to the customers and churn_drivers tables"),
    ),
    info(
        title = "ChurnLens Table Service",
        description = "Development stand-in for the hosted table service the churn dashboard reads from",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
