use anyhow::Result;
use moka::future::Cache;
use sea_orm::Database;
use std::time::Duration;

use crate::schemas::AppState;

/// How long a table read is served from memory.
pub const CACHE_TTL: Duration = Duration::from_secs(60);

pub fn build_cache() -> crate::schemas::TableCache {
    Cache::builder().max_capacity(1000).time_to_live(CACHE_TTL).build()
}

/// Connect to the database and assemble shared handler state.
pub async fn initialize_app_state_with_url(database_url: &str, anon_key: Option<String>) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState {
        db,
        cache: build_cache(),
        anon_key: anon_key.filter(|key| !key.is_empty()),
    })
}
