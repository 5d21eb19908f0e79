use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Stored risk bucket. Written by the scoring pipeline, never recomputed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum RiskLevel {
    #[sea_orm(string_value = "high")]
    High,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "low")]
    Low,
}

impl From<RiskLevel> for common::RiskLevel {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => common::RiskLevel::High,
            RiskLevel::Medium => common::RiskLevel::Medium,
            RiskLevel::Low => common::RiskLevel::Low,
        }
    }
}

impl From<common::RiskLevel> for RiskLevel {
    fn from(level: common::RiskLevel) -> Self {
        match level {
            common::RiskLevel::High => RiskLevel::High,
            common::RiskLevel::Medium => RiskLevel::Medium,
            common::RiskLevel::Low => RiskLevel::Low,
        }
    }
}

/// A scored customer subscription.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub subscription_plan: String,
    pub subscription_id: String,
    /// 0-100, higher is riskier.
    pub churn_score: i32,
    pub risk_level: RiskLevel,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub arr: Decimal,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::churn_driver::Entity")]
    ChurnDriver,
}

impl Related<super::churn_driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChurnDriver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::Customer {
    fn from(model: Model) -> Self {
        common::Customer {
            id: model.id,
            name: model.name,
            email: model.email,
            subscription_plan: model.subscription_plan,
            subscription_id: model.subscription_id,
            churn_score: model.churn_score,
            risk_level: model.risk_level.into(),
            arr: model.arr,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_model_converts_to_row() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let model = Model {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            email: None,
            subscription_plan: "Enterprise".to_string(),
            subscription_id: "sub_1".to_string(),
            churn_score: 81,
            risk_level: RiskLevel::High,
            arr: Decimal::new(1249950, 2),
            created_at: ts,
            updated_at: ts,
        };

        let row: common::Customer = model.into();
        assert_eq!(row.risk_level, common::RiskLevel::High);
        assert_eq!(row.arr, Decimal::new(1249950, 2));
        assert_eq!(row.created_at, ts);
    }

    #[test]
    fn test_risk_level_roundtrip() {
        for level in common::RiskLevel::ALL {
            let stored: RiskLevel = level.into();
            assert_eq!(common::RiskLevel::from(stored), level);
            assert_eq!(stored.to_value(), level.as_str());
        }
    }
}
