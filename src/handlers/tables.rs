use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Json,
};
use axum_valid::Valid;
use common::{Direction, Order, CHURN_DRIVERS_TABLE, CUSTOMERS_TABLE};
use model::entities::{churn_driver, customer};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, instrument, trace};

use crate::error::TableError;
use crate::schemas::{AppState, TableQuery};

/// Header carrying the client key.
pub const API_KEY_HEADER: &str = "apikey";

/// Read rows from one table
///
/// Rows come back as a bare JSON array. `order` takes `column.asc|desc`;
/// ties fall back to the primary key so repeated reads are stable.
#[utoipa::path(
    get,
    path = "/rest/v1/{table}",
    tag = "tables",
    params(
        ("table" = String, Path, description = "customers or churn_drivers"),
        TableQuery,
    ),
    responses(
        (status = 200, description = "Rows of the requested table", body = Vec<common::Customer>),
        (status = 400, description = "Bad order, select or filter", body = common::ServiceError),
        (status = 401, description = "Missing or wrong apikey", body = common::ServiceError),
        (status = 404, description = "Unknown table", body = common::ServiceError),
        (status = 500, description = "Internal server error", body = common::ServiceError)
    )
)]
#[instrument(skip(state, headers))]
pub async fn read_table(
    Path(table): Path<String>,
    headers: HeaderMap,
    State(state): State<AppState>,
    Valid(Query(query)): Valid<Query<TableQuery>>,
) -> Result<Json<Vec<Value>>, TableError> {
    trace!("Entering read_table function");
    authorize(&state, &headers)?;

    let cache_key = query.cache_key(&table);
    if let Some(rows) = state.cache.get(&cache_key).await {
        debug!("Serving {} rows of {} from cache", rows.len(), table);
        return Ok(Json(rows.as_ref().clone()));
    }

    let order = query.order.as_deref().map(Order::from_str).transpose()?;

    let rows = match table.as_str() {
        CUSTOMERS_TABLE => read_customers(&state.db, &query, order.as_ref()).await?,
        CHURN_DRIVERS_TABLE => read_drivers(&state.db, &query, order.as_ref()).await?,
        other => return Err(TableError::UnknownTable(other.to_string())),
    };

    info!("Read {} rows from {}", rows.len(), table);
    state.cache.insert(cache_key, Arc::new(rows.clone())).await;

    Ok(Json(rows))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), TableError> {
    let Some(expected) = state.anon_key.as_deref() else {
        return Ok(());
    };

    match headers.get(API_KEY_HEADER).and_then(|value| value.to_str().ok()) {
        Some(given) if given == expected => Ok(()),
        _ => Err(TableError::Unauthorized),
    }
}

async fn read_customers(
    db: &DatabaseConnection,
    query: &TableQuery,
    order: Option<&Order>,
) -> Result<Vec<Value>, TableError> {
    if query.customer_id.is_some() {
        return Err(TableError::Filter("customer_id applies to churn_drivers only".to_string()));
    }

    let select = ordered(customer::Entity::find(), CUSTOMERS_TABLE, order, customer::Column::Id)?;
    let models = limited(select, query.limit).all(db).await?;
    let rows = to_rows(models.into_iter().map(common::Customer::from))?;

    project::<customer::Entity>(rows, CUSTOMERS_TABLE, query.select.as_deref())
}

async fn read_drivers(
    db: &DatabaseConnection,
    query: &TableQuery,
    order: Option<&Order>,
) -> Result<Vec<Value>, TableError> {
    let mut select = churn_driver::Entity::find();
    if let Some(filter) = query.customer_id.as_deref() {
        select = select.filter(churn_driver::Column::CustomerId.eq(parse_eq(filter)?));
    }

    let select = ordered(select, CHURN_DRIVERS_TABLE, order, churn_driver::Column::Id)?;
    let models = limited(select, query.limit).all(db).await?;
    let rows = to_rows(models.into_iter().map(common::ChurnDriver::from))?;

    project::<churn_driver::Entity>(rows, CHURN_DRIVERS_TABLE, query.select.as_deref())
}

/// `eq.c1` -> `c1`
fn parse_eq(filter: &str) -> Result<&str, TableError> {
    filter
        .strip_prefix("eq.")
        .filter(|value| !value.is_empty())
        .ok_or_else(|| TableError::Filter(format!("expected eq.<value>, got '{}'", filter)))
}

fn column<E>(table: &str, name: &str) -> Result<E::Column, TableError>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    E::Column::from_str(name).map_err(|_| TableError::UnknownColumn {
        table: table.to_string(),
        column: name.to_string(),
    })
}

fn ordered<E>(select: Select<E>, table: &str, order: Option<&Order>, primary_key: E::Column) -> Result<Select<E>, TableError>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    let select = match order {
        Some(order) => {
            let col = column::<E>(table, &order.column)?;
            match order.direction {
                Direction::Asc => select.order_by_asc(col),
                Direction::Desc => select.order_by_desc(col),
            }
        }
        None => select,
    };
    Ok(select.order_by_asc(primary_key))
}

fn limited<E: EntityTrait>(select: Select<E>, limit: Option<u64>) -> Select<E> {
    match limit {
        Some(limit) => select.limit(limit),
        None => select,
    }
}

fn to_rows<T: Serialize>(rows: impl Iterator<Item = T>) -> Result<Vec<Value>, TableError> {
    rows.map(|row| serde_json::to_value(row).map_err(TableError::from)).collect()
}

/// Keep only the requested columns. `*` or no selection returns rows untouched.
fn project<E>(rows: Vec<Value>, table: &str, select: Option<&str>) -> Result<Vec<Value>, TableError>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    let columns: Vec<&str> = match select.map(str::trim) {
        None | Some("") | Some("*") => return Ok(rows),
        Some(list) => list.split(',').map(str::trim).collect(),
    };
    for name in &columns {
        column::<E>(table, name)?;
    }

    Ok(rows
        .into_iter()
        .map(|row| match row {
            Value::Object(mut fields) => {
                Value::Object(columns.iter().filter_map(|name| fields.remove_entry(*name)).collect())
            }
            other => other,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_eq() {
        assert_eq!(parse_eq("eq.cus_0001").unwrap(), "cus_0001");
        assert!(matches!(parse_eq("cus_0001"), Err(TableError::Filter(_))));
        assert!(matches!(parse_eq("eq."), Err(TableError::Filter(_))));
    }

    #[test]
    fn test_project_keeps_requested_columns() {
        let rows = vec![json!({"id": "c1", "name": "Acme", "churn_score": 80})];

        let projected = project::<customer::Entity>(rows.clone(), CUSTOMERS_TABLE, Some("id, churn_score")).unwrap();
        assert_eq!(projected, vec![json!({"id": "c1", "churn_score": 80})]);

        let all = project::<customer::Entity>(rows.clone(), CUSTOMERS_TABLE, Some("*")).unwrap();
        assert_eq!(all, rows);
    }

    #[test]
    fn test_project_rejects_unknown_column() {
        let result = project::<customer::Entity>(vec![], CUSTOMERS_TABLE, Some("id,mrr"));
        assert!(matches!(result, Err(TableError::UnknownColumn { column, .. }) if column == "mrr"));
    }
}
