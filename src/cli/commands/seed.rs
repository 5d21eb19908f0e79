use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use model::entities::{churn_driver, customer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, TransactionTrait};
use tracing::{debug, info, trace};

use super::initdb::connect_and_migrate;

const COMPANIES: [&str; 16] = [
    "Acme Corp",
    "Globex",
    "Initech",
    "Umbrella Health",
    "Stark Logistics",
    "Wayne Analytics",
    "Hooli",
    "Vandelay Imports",
    "Soylent Foods",
    "Cyberdyne Systems",
    "Tyrell Labs",
    "Wonka Retail",
    "Gringotts Finance",
    "Oscorp",
    "Pied Piper",
    "Massive Dynamic",
];

/// Plan name and base ARR.
const PLANS: [(&str, i64); 4] = [("Starter", 1_200), ("Growth", 6_000), ("Business", 18_000), ("Enterprise", 60_000)];

const DRIVERS: [(&str, churn_driver::Impact); 8] = [
    ("Recent payment failure", churn_driver::Impact::Increase),
    ("Annual renewal within 30 days", churn_driver::Impact::Increase),
    ("Invoice volume dropped", churn_driver::Impact::Increase),
    ("Delayed payments last quarter", churn_driver::Impact::Increase),
    ("Short paid tenure", churn_driver::Impact::Increase),
    ("Auto collection enabled", churn_driver::Impact::Decrease),
    ("Recent plan upgrade", churn_driver::Impact::Decrease),
    ("Multiple active seats", churn_driver::Impact::Decrease),
];

/// Fixed seed so every run writes the same table.
const SAMPLE_SEED: u64 = 0x5eed;

/// Upstream bucketing used when the sample rows are written.
fn stored_risk_level(score: i32) -> customer::RiskLevel {
    if score >= 70 {
        customer::RiskLevel::High
    } else if score >= 40 {
        customer::RiskLevel::Medium
    } else {
        customer::RiskLevel::Low
    }
}

/// Build `count` customers with two to four drivers each.
pub fn sample_rows(count: usize, now: DateTime<Utc>) -> Vec<(customer::Model, Vec<churn_driver::Model>)> {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);

    (0..count)
        .map(|i| {
            let base = COMPANIES[i % COMPANIES.len()];
            let name = match i / COMPANIES.len() {
                0 => base.to_string(),
                n => format!("{} {}", base, n + 1),
            };
            let id = format!("cus_{:04}", i + 1);
            let (plan, base_arr) = PLANS[rng.gen_range(0..PLANS.len())];
            let score = rng.gen_range(0..=100);
            let arr = Decimal::from(base_arr + rng.gen_range(0..40i64) * 150);
            let created_at = now - Duration::days(rng.gen_range(30..930));

            let driver_count = rng.gen_range(2..=4);
            let first = rng.gen_range(0..DRIVERS.len());
            let drivers = (0..driver_count)
                .map(|p| {
                    let (driver_name, impact) = DRIVERS[(first + p) % DRIVERS.len()];
                    churn_driver::Model {
                        id: format!("drv_{:04}_{}", i + 1, p + 1),
                        customer_id: id.clone(),
                        driver_name: driver_name.to_string(),
                        impact,
                        priority: p as i32 + 1,
                        created_at: now,
                    }
                })
                .collect();

            let email = (i % 3 != 0).then(|| format!("billing@{}.example", base.to_lowercase().replace(' ', "-")));

            let customer = customer::Model {
                id,
                name,
                email,
                subscription_plan: plan.to_string(),
                subscription_id: format!("sub_{:06}", 100_000 + i * 37),
                churn_score: score,
                risk_level: stored_risk_level(score),
                arr,
                created_at,
                updated_at: now,
            };
            (customer, drivers)
        })
        .collect()
}

pub async fn seed_database(database_url: &str, count: usize, reset: bool) -> Result<()> {
    trace!("Entering seed_database function");
    info!("Seeding database with {} sample customers", count);

    let db = connect_and_migrate(database_url).await?;
    let txn = db.begin().await?;

    if reset {
        let drivers = churn_driver::Entity::delete_many().exec(&txn).await?;
        let customers = customer::Entity::delete_many().exec(&txn).await?;
        info!(
            "Removed {} customers and {} drivers",
            customers.rows_affected, drivers.rows_affected
        );
    }

    let mut driver_total = 0;
    for (customer, drivers) in sample_rows(count, Utc::now()) {
        debug!("Inserting customer {} ({})", customer.name, customer.id);
        customer::ActiveModel::from(customer).reset_all().insert(&txn).await?;
        for driver in drivers {
            churn_driver::ActiveModel::from(driver).reset_all().insert(&txn).await?;
            driver_total += 1;
        }
    }

    txn.commit().await?;
    info!("Seeded {} customers and {} drivers", count, driver_total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_sample_rows_are_deterministic() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(sample_rows(20, now), sample_rows(20, now));
    }

    #[test]
    fn test_sample_rows_shape() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let rows = sample_rows(40, now);
        assert_eq!(rows.len(), 40);

        for (customer, drivers) in &rows {
            assert!((0..=100).contains(&customer.churn_score));
            assert_eq!(customer.risk_level, stored_risk_level(customer.churn_score));
            assert!((2..=4).contains(&drivers.len()));
            assert!(drivers.iter().all(|d| d.customer_id == customer.id));
            let priorities: Vec<i32> = drivers.iter().map(|d| d.priority).collect();
            assert_eq!(priorities, (1..=drivers.len() as i32).collect::<Vec<_>>());
        }

        let ids: HashSet<&str> = rows.iter().map(|(c, _)| c.id.as_str()).collect();
        assert_eq!(ids.len(), 40);
        assert_eq!(rows[16].0.name, "Acme Corp 2");
    }
}
