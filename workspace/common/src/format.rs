//! Display helpers for money, percentages and dates.

use chrono::{DateTime, Duration, TimeZone};
use std::fmt;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{iso, Money};

/// Days between the last model refresh and now, as shown on the dashboard.
pub const REFRESH_LAG_DAYS: i64 = 7;

/// Whole-number percentage of `part` in `total`, half away from zero.
/// A zero total yields 0.
pub fn percent_of(part: Decimal, total: Decimal) -> u32 {
    if total.is_zero() {
        return 0;
    }
    (part * Decimal::ONE_HUNDRED / total)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Thousands with a fixed number of decimals: `$23.3K`, `$23K`.
pub fn compact_usd(amount: Decimal, decimals: u32) -> String {
    let thousands = (amount / Decimal::ONE_THOUSAND)
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.*}K", decimals as usize, thousands)
}

/// Full dollar amount with grouping, e.g. `$1,249.00`.
pub fn usd(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::USD).to_string()
}

/// "Jan 5, 2024, 09:30 AM" for the model refresh time relative to `now`.
pub fn last_refreshed_label<Tz>(now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    (now - Duration::days(REFRESH_LAG_DAYS))
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(Decimal::from(1), Decimal::from(3)), 33);
        assert_eq!(percent_of(Decimal::from(1), Decimal::from(8)), 13);
        assert_eq!(percent_of(Decimal::from(5), Decimal::ZERO), 0);
        assert_eq!(percent_of(Decimal::from(10), Decimal::from(10)), 100);
    }

    #[test]
    fn test_compact_usd() {
        assert_eq!(compact_usd(Decimal::from(23_250), 1), "$23.3K");
        assert_eq!(compact_usd(Decimal::from(23_000), 1), "$23.0K");
        assert_eq!(compact_usd(Decimal::from(23_500), 0), "$24K");
        assert_eq!(compact_usd(Decimal::ZERO, 0), "$0K");
    }

    #[test]
    fn test_usd_groups_thousands() {
        let text = usd(Decimal::from(1249));
        assert!(text.starts_with("$1,249"), "got {}", text);
    }

    #[test]
    fn test_last_refreshed_is_a_week_back() {
        let now = Utc.with_ymd_and_hms(2024, 3, 12, 14, 5, 0).unwrap();
        assert_eq!(last_refreshed_label(now), "Mar 5, 2024, 02:05 PM");
    }
}
