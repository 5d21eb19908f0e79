use crate::model::{Customer, RiskLevel};
use crate::score::segment_label;

pub const CSV_HEADER: &str = "Customer,Plan,Subscription ID,Churn Score,Risk Level,Benchmarking";

const BENCHMARK: &str = "Benchmark comparison";

/// Render rows as CSV, one line per row in the given order.
///
/// Fields are written as-is; values containing commas are not quoted.
pub fn customers_to_csv<T: AsRef<Customer>>(rows: &[T]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(rows.iter().map(|row| {
        let c = row.as_ref();
        format!(
            "{},{},{},{},{},{}",
            c.name,
            c.subscription_plan,
            c.subscription_id,
            c.churn_score,
            segment_label(c.churn_score),
            BENCHMARK
        )
    }));
    lines.join("\n")
}

/// Download name for a segment export, e.g. "high-risk-customers.csv".
pub fn segment_file_name(level: RiskLevel) -> String {
    format!("{}-risk-customers.csv", level.as_str())
}

pub const TABLE_FILE_NAME: &str = "customers.csv";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::customer;

    #[test]
    fn test_csv_has_header_and_row_per_customer() {
        let rows = vec![
            customer("c1", "Acme", 72, RiskLevel::High, 1),
            customer("c2", "Globex", 35, RiskLevel::High, 1),
            customer("c3", "Initech", 5, RiskLevel::Low, 1),
        ];

        let csv = customers_to_csv(&rows);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "Acme,Growth,sub_c1,72,High,Benchmark comparison");
        // level comes from the score, not the stored risk_level
        assert_eq!(lines[2], "Globex,Growth,sub_c2,35,Medium,Benchmark comparison");
        assert!(lines[3].starts_with("Initech,"));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_csv_is_header_only() {
        let rows: Vec<Customer> = Vec::new();
        assert_eq!(customers_to_csv(&rows), CSV_HEADER);
    }

    #[test]
    fn test_segment_file_name() {
        assert_eq!(segment_file_name(RiskLevel::Medium), "medium-risk-customers.csv");
    }
}
