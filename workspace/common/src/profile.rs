//! Content of the customer profile view.
//!
//! Only the header fields come from the customer row; the risk factor
//! breakdown and plays are fixed illustrative content.

use crate::model::{ChurnDriver, CustomerWithDrivers};
use rust_decimal::Decimal;

/// Shown when the stored ARR is zero.
pub const FALLBACK_ARR: i64 = 1249;
pub const MODEL_VERSION: &str = "v2.3.1";
pub const LAST_UPDATED: &str = "3 days ago";
pub const OVERALL_MULTIPLIER: f64 = 5.7;

/// Multiplier at which a factor bar is full width.
const BAR_FULL_AT: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorIcon {
    Calendar,
    Card,
    Mail,
}

/// Bar colour for a multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Severe,
    Elevated,
    Mild,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactor {
    pub icon: FactorIcon,
    pub title: String,
    pub subtitle: Option<String>,
    pub multiplier: f64,
    pub description: &'static str,
}

impl RiskFactor {
    /// Bar width in percent, capped at 100.
    pub fn bar_width(&self) -> f64 {
        (self.multiplier * 100.0 / BAR_FULL_AT).min(100.0)
    }

    pub fn severity(&self) -> Severity {
        if self.multiplier >= 2.0 {
            Severity::Severe
        } else if self.multiplier >= 1.5 {
            Severity::Elevated
        } else {
            Severity::Mild
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    /// The profile uses the customer name as its identifier.
    pub id: String,
    pub email: String,
    pub churn_score: i32,
    pub arr_at_risk: Decimal,
    pub plan: String,
    pub risk_factors: Vec<RiskFactor>,
    pub overall_multiplier: f64,
    pub overall_description: &'static str,
    pub suggested_plays: [&'static str; 3],
    pub drivers: Vec<ChurnDriver>,
}

/// `jane doe` -> `jane.doe@example.com`. Only the first space is replaced.
pub fn fallback_email(name: &str) -> String {
    format!("{}@example.com", name.to_lowercase().replacen(' ', ".", 1))
}

impl ProfileSummary {
    pub fn for_customer(customer: &CustomerWithDrivers) -> Self {
        let email = customer
            .email
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| fallback_email(&customer.name));
        let arr_at_risk = if customer.arr.is_zero() { Decimal::from(FALLBACK_ARR) } else { customer.arr };

        Self {
            id: customer.name.clone(),
            email,
            churn_score: customer.churn_score,
            arr_at_risk,
            plan: customer.subscription_plan.clone(),
            risk_factors: risk_factors(&customer.subscription_plan),
            overall_multiplier: OVERALL_MULTIPLIER,
            overall_description: "Overall, this customer has 5.7x higher odds of churn compared to your baseline due to annual billing, recent payment failures, delayed payment, short active tenure.",
            suggested_plays: ["Save Offer", "Usage Re-engagement Sequence", "Payment Recovery Workflow"],
            drivers: customer.drivers.clone(),
        }
    }
}

fn risk_factors(plan: &str) -> Vec<RiskFactor> {
    vec![
        RiskFactor {
            icon: FactorIcon::Calendar,
            title: "Billing Period: Yearly".to_string(),
            subtitle: Some(plan.to_string()),
            multiplier: 2.0,
            description: "Annual billing increases odds of churn compared to monthly",
        },
        RiskFactor {
            icon: FactorIcon::Card,
            title: "Recent Payment Failure".to_string(),
            subtitle: None,
            multiplier: 1.2,
            description: "Most recent payment failed",
        },
        RiskFactor {
            icon: FactorIcon::Mail,
            title: "18.3% Delayed Payment".to_string(),
            subtitle: None,
            multiplier: 1.1,
            description: "Overdue invoices last 3 months",
        },
        RiskFactor {
            icon: FactorIcon::Calendar,
            title: "95 Paying Days Active".to_string(),
            subtitle: None,
            multiplier: 1.1,
            description: "Short active paid tenure of 95 days",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{customer, driver, with_drivers};
    use crate::model::RiskLevel;

    #[test]
    fn test_fallback_email_replaces_first_space_only() {
        assert_eq!(fallback_email("Acme Big Corp"), "acme.big corp@example.com");
        assert_eq!(fallback_email("Globex"), "globex@example.com");
    }

    #[test]
    fn test_summary_uses_customer_fields() {
        let mut row = customer("c1", "Acme Corp", 82, RiskLevel::High, 5000);
        row.email = Some("ops@acme.test".to_string());
        let mut joined = with_drivers(row);
        joined.drivers.push(driver("d1", "c1", 1));

        let summary = ProfileSummary::for_customer(&joined);
        assert_eq!(summary.id, "Acme Corp");
        assert_eq!(summary.email, "ops@acme.test");
        assert_eq!(summary.arr_at_risk, Decimal::from(5000));
        assert_eq!(summary.risk_factors[0].subtitle.as_deref(), Some("Growth"));
        assert_eq!(summary.drivers.len(), 1);
    }

    #[test]
    fn test_summary_fallbacks() {
        let joined = with_drivers(customer("c1", "Acme Corp", 82, RiskLevel::High, 0));
        let summary = ProfileSummary::for_customer(&joined);
        assert_eq!(summary.email, "acme.corp@example.com");
        assert_eq!(summary.arr_at_risk, Decimal::from(FALLBACK_ARR));
    }

    #[test]
    fn test_factor_bars() {
        let factors = risk_factors("Growth");
        assert_eq!(factors[0].bar_width(), 80.0);
        assert_eq!(factors[0].severity(), Severity::Severe);
        assert_eq!(factors[1].severity(), Severity::Mild);

        let big = RiskFactor { multiplier: 3.0, ..factors[1].clone() };
        assert_eq!(big.bar_width(), 100.0);
        let mid = RiskFactor { multiplier: 1.5, ..factors[1].clone() };
        assert_eq!(mid.severity(), Severity::Elevated);
    }
}
