use common::order::read_query;
use common::{ChurnDriver, Customer, Order, ServiceError, CHURN_DRIVERS_TABLE, CUSTOMERS_TABLE};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::settings;

/// Read every row of `table` in the given order.
///
/// The table service answers with a bare JSON array. A missing URL or key is
/// logged and the read is attempted anyway; the failure then surfaces as a
/// normal request error.
pub async fn read_table<T>(table: &str, order: &Order) -> Result<Vec<T>, String>
where
    T: DeserializeOwned,
{
    let settings = settings::get_settings();
    if !settings.is_configured() {
        log::error!("Table service URL or key is not configured; reading {} anyway", table);
    }

    let url = format!("{}?{}", settings.table_url(table), read_query(order));
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .header("apikey", &settings.data_key)
        .header("Authorization", &format!("Bearer {}", settings.data_key))
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", table, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", table, response.status());
        let error_response: Result<ServiceError, _> = response.json().await;
        let error_msg = match error_response {
            Ok(err) => format!("HTTP error: {} ({})", response.status(), err.message),
            Err(_) => format!("HTTP error: {}", response.status()),
        };
        log::error!("GET {} - {}", table, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", table);
    let rows: Vec<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", table, error_msg);
        error_msg
    })?;

    log::info!("GET {} - {} rows", table, rows.len());
    Ok(rows)
}

/// Customers, riskiest first.
pub async fn get_customers() -> Result<Vec<Customer>, String> {
    read_table(CUSTOMERS_TABLE, &Order::desc("churn_score")).await
}

/// All drivers, most important first.
pub async fn get_churn_drivers() -> Result<Vec<ChurnDriver>, String> {
    read_table(CHURN_DRIVERS_TABLE, &Order::asc("priority")).await
}
