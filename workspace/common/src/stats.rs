use crate::model::{Customer, RiskLevel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    pub count: usize,
    pub arr: Decimal,
}

/// Count and summed ARR per stored risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskStats {
    pub high: LevelStats,
    pub medium: LevelStats,
    pub low: LevelStats,
}

impl RiskStats {
    pub fn from_customers<'a, I>(customers: I) -> Self
    where
        I: IntoIterator<Item = &'a Customer>,
    {
        let mut stats = RiskStats::default();
        for customer in customers {
            let bucket = stats.level_mut(customer.risk_level);
            bucket.count += 1;
            bucket.arr += customer.arr;
        }
        stats
    }

    pub fn level(&self, level: RiskLevel) -> LevelStats {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    fn level_mut(&mut self, level: RiskLevel) -> &mut LevelStats {
        match level {
            RiskLevel::High => &mut self.high,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::Low => &mut self.low,
        }
    }

    pub fn total_count(&self) -> usize {
        self.high.count + self.medium.count + self.low.count
    }

    pub fn total_arr(&self) -> Decimal {
        self.high.arr + self.medium.arr + self.low.arr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::customer;

    #[test]
    fn test_stats_sum_per_level() {
        let customers = vec![
            customer("c1", "A", 90, RiskLevel::High, 1000),
            customer("c2", "B", 85, RiskLevel::High, 500),
            customer("c3", "C", 45, RiskLevel::Medium, 250),
            customer("c4", "D", 10, RiskLevel::Low, 100),
        ];

        let stats = RiskStats::from_customers(&customers);
        assert_eq!(stats.high, LevelStats { count: 2, arr: Decimal::from(1500) });
        assert_eq!(stats.medium.count, 1);
        assert_eq!(stats.low.arr, Decimal::from(100));
        assert_eq!(stats.total_count(), 4);
        assert_eq!(stats.total_arr(), Decimal::from(1850));
    }

    #[test]
    fn test_stats_empty() {
        let stats = RiskStats::from_customers(std::iter::empty());
        assert_eq!(stats.total_count(), 0);
        assert_eq!(stats.total_arr(), Decimal::ZERO);
    }
}
