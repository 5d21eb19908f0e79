use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{OrderError, ServiceError};
use sea_orm::DbErr;
use thiserror::Error;

/// Everything that can go wrong while serving a table read.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Table '{0}' does not exist")]
    UnknownTable(String),

    #[error("Column '{column}' does not exist on table '{table}'")]
    UnknownColumn { table: String, column: String },

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Invalid filter: {0}")]
    Filter(String),

    #[error("Invalid API key")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Failed to serialize rows: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TableError {
    pub fn status(&self) -> StatusCode {
        match self {
            TableError::UnknownTable(_) => StatusCode::NOT_FOUND,
            TableError::UnknownColumn { .. } | TableError::Order(_) | TableError::Filter(_) => StatusCode::BAD_REQUEST,
            TableError::Unauthorized => StatusCode::UNAUTHORIZED,
            TableError::Database(_) | TableError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TableError::UnknownTable(_) => "UNKNOWN_TABLE",
            TableError::UnknownColumn { .. } => "UNKNOWN_COLUMN",
            TableError::Order(_) => "BAD_ORDER",
            TableError::Filter(_) => "BAD_FILTER",
            TableError::Unauthorized => "UNAUTHORIZED",
            TableError::Database(_) => "DATABASE_ERROR",
            TableError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

impl IntoResponse for TableError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Table read failed: {}", self);
        } else {
            tracing::debug!("Rejected table read: {}", self);
        }

        let body = ServiceError { message: self.to_string(), code: self.code().to_string() };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(TableError::UnknownTable("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(TableError::Order(OrderError::Empty).status(), StatusCode::BAD_REQUEST);
        assert_eq!(TableError::Unauthorized.code(), "UNAUTHORIZED");
        assert_eq!(
            TableError::UnknownColumn { table: "customers".into(), column: "mrr".into() }.to_string(),
            "Column 'mrr' does not exist on table 'customers'"
        );
    }
}
