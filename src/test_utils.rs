use crate::cli::commands::seed::sample_rows;
use crate::config::build_cache;
use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use chrono::{TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Number of customers inserted by [`setup_test_app_state`].
pub const SEEDED_CUSTOMERS: usize = 12;

/// Create an in-memory SQLite database for testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create AppState backed by a seeded database
pub async fn setup_test_app_state(anon_key: Option<&str>) -> AppState {
    let db = setup_test_db().await;

    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    for (customer, drivers) in sample_rows(SEEDED_CUSTOMERS, now) {
        model::entities::customer::ActiveModel::from(customer)
            .reset_all()
            .insert(&db)
            .await
            .expect("Failed to insert test customer");
        for driver in drivers {
            model::entities::churn_driver::ActiveModel::from(driver)
                .reset_all()
                .insert(&db)
                .await
                .expect("Failed to insert test driver");
        }
    }

    AppState {
        db,
        cache: build_cache(),
        anon_key: anon_key.map(str::to_string),
    }
}

/// Initialize tracing for tests with output to STDERR.
///
/// The level comes from RUST_LOG and defaults to WARN.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing
pub async fn setup_test_app(anon_key: Option<&str>) -> Router {
    let _guard = init_test_tracing();
    let state = setup_test_app_state(anon_key).await;
    create_router(state)
}
