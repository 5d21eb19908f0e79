use crate::model::{ChurnDriver, Customer, CustomerWithDrivers};
use std::collections::HashMap;

/// Most drivers shown per customer.
pub const MAX_DRIVERS: usize = 3;

/// Attach each customer's drivers, keeping the order both lists arrive in.
///
/// Drivers are expected pre-sorted by priority; the first three matching a
/// customer are kept. Drivers pointing at unknown customers are dropped.
pub fn attach_drivers(customers: Vec<Customer>, drivers: Vec<ChurnDriver>) -> Vec<CustomerWithDrivers> {
    let mut by_customer: HashMap<String, Vec<ChurnDriver>> = HashMap::new();
    for driver in drivers {
        let bucket = by_customer.entry(driver.customer_id.clone()).or_default();
        if bucket.len() < MAX_DRIVERS {
            bucket.push(driver);
        }
    }

    tracing::debug!("Joining {} customers with drivers for {} customers", customers.len(), by_customer.len());

    customers
        .into_iter()
        .map(|customer| {
            let drivers = by_customer.get(&customer.id).cloned().unwrap_or_default();
            CustomerWithDrivers { customer, drivers }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{customer, driver};
    use crate::model::RiskLevel;

    #[test]
    fn test_attach_caps_at_three_in_priority_order() {
        let customers = vec![customer("c1", "Acme", 90, RiskLevel::High, 100)];
        let drivers = vec![
            driver("d1", "c1", 1),
            driver("d2", "c1", 2),
            driver("d3", "c1", 3),
            driver("d4", "c1", 4),
        ];

        let joined = attach_drivers(customers, drivers);
        let ids: Vec<&str> = joined[0].drivers.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2", "d3"]);
    }

    #[test]
    fn test_attach_preserves_customer_order() {
        let customers = vec![
            customer("c2", "Globex", 80, RiskLevel::High, 10),
            customer("c1", "Acme", 40, RiskLevel::Medium, 10),
        ];
        let drivers = vec![driver("d1", "c1", 1), driver("d2", "c2", 1)];

        let joined = attach_drivers(customers, drivers);
        assert_eq!(joined[0].id, "c2");
        assert_eq!(joined[0].drivers[0].id, "d2");
        assert_eq!(joined[1].id, "c1");
        assert_eq!(joined[1].drivers[0].id, "d1");
    }

    #[test]
    fn test_customer_without_drivers_gets_empty_list() {
        let customers = vec![customer("c1", "Acme", 10, RiskLevel::Low, 10)];
        let joined = attach_drivers(customers, vec![driver("d1", "other", 1)]);
        assert!(joined[0].drivers.is_empty());
    }
}
