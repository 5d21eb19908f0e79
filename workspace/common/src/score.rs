//! Score thresholds used by the UI.
//!
//! Two cut sets coexist with the stored `risk_level`: the table badge splits at
//! 70/40 and the segment drill-down (and its CSV) splits at 50/30. Neither is
//! reconciled with the stored level.

use crate::model::{Customer, RiskLevel};

pub const BADGE_HIGH: i32 = 70;
pub const BADGE_MEDIUM: i32 = 40;
pub const SEGMENT_HIGH: i32 = 50;
pub const SEGMENT_MEDIUM: i32 = 30;

/// Level shown on the churn score badge.
pub fn badge_level(score: i32) -> RiskLevel {
    if score >= BADGE_HIGH {
        RiskLevel::High
    } else if score >= BADGE_MEDIUM {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn badge_label(score: i32) -> &'static str {
    match badge_level(score) {
        RiskLevel::High => "High",
        RiskLevel::Medium => "Medium",
        RiskLevel::Low => "Low",
    }
}

/// Level used by the segment drill-down and its export.
pub fn segment_level(score: i32) -> RiskLevel {
    if score >= SEGMENT_HIGH {
        RiskLevel::High
    } else if score >= SEGMENT_MEDIUM {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn segment_label(score: i32) -> &'static str {
    match segment_level(score) {
        RiskLevel::High => "High",
        RiskLevel::Medium => "Medium",
        RiskLevel::Low => "Low",
    }
}

/// Customers whose score falls in `level` under the segment cuts, in input order.
pub fn segment<T: AsRef<Customer> + Clone>(customers: &[T], level: RiskLevel) -> Vec<T> {
    customers
        .iter()
        .filter(|c| segment_level(c.as_ref().churn_score) == level)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::customer;

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(badge_label(70), "High");
        assert_eq!(badge_label(69), "Medium");
        assert_eq!(badge_label(40), "Medium");
        assert_eq!(badge_label(39), "Low");
        assert_eq!(badge_label(0), "Low");
    }

    #[test]
    fn test_segment_thresholds() {
        assert_eq!(segment_level(50), RiskLevel::High);
        assert_eq!(segment_level(49), RiskLevel::Medium);
        assert_eq!(segment_level(30), RiskLevel::Medium);
        assert_eq!(segment_level(29), RiskLevel::Low);
    }

    #[test]
    fn test_segment_ignores_stored_level() {
        let customers = vec![
            customer("c1", "A", 55, RiskLevel::Medium, 1),
            customer("c2", "B", 35, RiskLevel::High, 1),
            customer("c3", "C", 90, RiskLevel::High, 1),
        ];

        let high = segment(&customers, RiskLevel::High);
        let ids: Vec<&str> = high.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
        assert_eq!(segment(&customers, RiskLevel::Medium).len(), 1);
    }
}
