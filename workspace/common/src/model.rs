//! Row shapes of the `customers` and `churn_drivers` tables.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Coarse risk bucket assigned upstream from the churn score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }

    /// Title-case label, e.g. "High Risk".
    pub fn title(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(RiskLevel::High),
            "medium" => Ok(RiskLevel::Medium),
            "low" => Ok(RiskLevel::Low),
            other => Err(format!("Unknown risk level: {}", other)),
        }
    }
}

/// Direction in which a driver moves the churn likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Increase,
    Decrease,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Increase => "increase",
            Impact::Decrease => "decrease",
        }
    }
}

impl FromStr for Impact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "increase" => Ok(Impact::Increase),
            "decrease" => Ok(Impact::Decrease),
            other => Err(format!("Unknown driver impact: {}", other)),
        }
    }
}

/// A customer row. Created and updated by the external store; read only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub subscription_plan: String,
    pub subscription_id: String,
    /// Predicted churn likelihood, 0-100. Higher is riskier.
    pub churn_score: i32,
    pub risk_level: RiskLevel,
    /// Annual recurring revenue. Travels as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub arr: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single explanatory driver recorded against a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChurnDriver {
    pub id: String,
    pub customer_id: String,
    pub driver_name: String,
    pub impact: Impact,
    /// Lower is more important.
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

/// A customer joined with its top drivers (at most three).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerWithDrivers {
    #[serde(flatten)]
    pub customer: Customer,
    pub drivers: Vec<ChurnDriver>,
}

impl AsRef<Customer> for Customer {
    fn as_ref(&self) -> &Customer {
        self
    }
}

impl AsRef<Customer> for CustomerWithDrivers {
    fn as_ref(&self) -> &Customer {
        &self.customer
    }
}

impl std::ops::Deref for CustomerWithDrivers {
    type Target = Customer;

    fn deref(&self) -> &Self::Target {
        &self.customer
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn customer(id: &str, name: &str, score: i32, level: RiskLevel, arr: i64) -> Customer {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            subscription_plan: "Growth".to_string(),
            subscription_id: format!("sub_{}", id),
            churn_score: score,
            risk_level: level,
            arr: Decimal::from(arr),
            created_at: ts,
            updated_at: ts,
        }
    }

    pub fn with_drivers(customer: Customer) -> CustomerWithDrivers {
        CustomerWithDrivers { customer, drivers: Vec::new() }
    }

    pub fn driver(id: &str, customer_id: &str, priority: i32) -> ChurnDriver {
        ChurnDriver {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            driver_name: format!("driver {}", id),
            impact: Impact::Increase,
            priority,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_deserializes_table_row() {
        let row = serde_json::json!({
            "id": "c1",
            "name": "Acme Corp",
            "email": null,
            "subscription_plan": "Enterprise",
            "subscription_id": "sub_123",
            "churn_score": 87,
            "risk_level": "high",
            "arr": 1249.5,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z"
        });

        let customer: Customer = serde_json::from_value(row).expect("row should parse");
        assert_eq!(customer.risk_level, RiskLevel::High);
        assert_eq!(customer.arr, Decimal::new(12495, 1));
        assert_eq!(customer.email, None);
    }

    #[test]
    fn test_arr_serializes_as_number() {
        let customer = fixtures::customer("c1", "Acme", 10, RiskLevel::Low, 500);
        let value = serde_json::to_value(&customer).unwrap();
        assert!(value["arr"].is_number());
        assert_eq!(value["risk_level"], "low");
    }

    #[test]
    fn test_joined_customer_flattens() {
        let joined = fixtures::with_drivers(fixtures::customer("c1", "Acme", 10, RiskLevel::Low, 1));
        let value = serde_json::to_value(&joined).unwrap();
        assert_eq!(value["name"], "Acme");
        assert!(value["drivers"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_risk_level_from_str() {
        assert_eq!("HIGH".parse::<RiskLevel>(), Ok(RiskLevel::High));
        assert!("critical".parse::<RiskLevel>().is_err());
    }
}
