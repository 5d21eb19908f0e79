//! SeaORM entities for the two tables the dashboard reads.

pub mod churn_driver;
pub mod customer;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::churn_driver::Entity as ChurnDriver;
    pub use super::customer::Entity as Customer;
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
        QueryOrder, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    async fn insert_customer(db: &DatabaseConnection, id: &str, score: i32) -> Result<customer::Model, DbErr> {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        customer::ActiveModel {
            id: Set(id.to_string()),
            name: Set(format!("Customer {}", id)),
            email: Set(None),
            subscription_plan: Set("Growth".to_string()),
            subscription_id: Set(format!("sub_{}", id)),
            churn_score: Set(score),
            risk_level: Set(customer::RiskLevel::High),
            arr: Set(Decimal::new(120000, 2)),
            created_at: Set(ts),
            updated_at: Set(ts),
        }
        .insert(db)
        .await
    }

    async fn insert_driver(db: &DatabaseConnection, id: &str, customer_id: &str, priority: i32) -> Result<churn_driver::Model, DbErr> {
        churn_driver::ActiveModel {
            id: Set(id.to_string()),
            customer_id: Set(customer_id.to_string()),
            driver_name: Set(format!("Driver {}", id)),
            impact: Set(churn_driver::Impact::Increase),
            priority: Set(priority),
            created_at: Set(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()),
        }
        .insert(db)
        .await
    }

    #[tokio::test]
    async fn test_customer_drivers_relation() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let acme = insert_customer(&db, "c1", 90).await?;
        insert_driver(&db, "d2", "c1", 2).await?;
        insert_driver(&db, "d1", "c1", 1).await?;

        let drivers = acme
            .find_related(ChurnDriver)
            .order_by_asc(churn_driver::Column::Priority)
            .all(&db)
            .await?;
        let ids: Vec<&str> = drivers.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2"]);

        let stored = Customer::find_by_id("c1".to_string()).one(&db).await?.expect("customer exists");
        assert_eq!(stored.arr, Decimal::new(120000, 2));
        assert_eq!(stored.risk_level, customer::RiskLevel::High);

        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_customer_cascades() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let acme = insert_customer(&db, "c1", 90).await?;
        insert_driver(&db, "d1", "c1", 1).await?;

        acme.delete(&db).await?;
        assert!(ChurnDriver::find().all(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_driver_requires_customer() -> Result<(), DbErr> {
        let db = setup_db().await?;
        assert!(insert_driver(&db, "d1", "missing", 1).await.is_err());
        Ok(())
    }
}
