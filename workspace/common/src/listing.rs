//! Filtering, sorting and paging of the customer list.

use crate::filters::AdvancedFilter;
use crate::model::{Customer, RiskLevel};
use crate::theme::RiskTheme;
use std::fmt;
use std::str::FromStr;

/// Rows per table page.
pub const PAGE_SIZE: usize = 10;

/// Text of the single row rendered when nothing matches.
pub const EMPTY_TABLE_MESSAGE: &str = "No customers found matching the selected filters";

/// Value used by the selects for "no restriction".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RiskFilter {
    #[default]
    All,
    Level(RiskLevel),
}

impl RiskFilter {
    pub fn value(&self) -> &'static str {
        match self {
            RiskFilter::All => ALL,
            RiskFilter::Level(level) => level.as_str(),
        }
    }

    pub fn matches(&self, level: RiskLevel) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Level(wanted) => *wanted == level,
        }
    }
}

impl FromStr for RiskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(RiskFilter::All)
        } else {
            s.parse().map(RiskFilter::Level)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeFilter {
    #[default]
    All,
    Theme(RiskTheme),
}

impl ThemeFilter {
    pub fn value(&self) -> &'static str {
        match self {
            ThemeFilter::All => ALL,
            ThemeFilter::Theme(theme) => theme.name(),
        }
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            ThemeFilter::All => true,
            ThemeFilter::Theme(wanted) => RiskTheme::for_name(&customer.name) == *wanted,
        }
    }
}

impl FromStr for ThemeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(ThemeFilter::All)
        } else {
            s.parse().map(ThemeFilter::Theme)
        }
    }
}

/// Filter state owned by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFilters {
    pub risk: RiskFilter,
    /// Carried through to the table but not applied.
    pub billing: String,
    pub theme: ThemeFilter,
    pub advanced: Vec<AdvancedFilter>,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            risk: RiskFilter::All,
            billing: ALL.to_string(),
            theme: ThemeFilter::All,
            advanced: Vec::new(),
        }
    }
}

impl DashboardFilters {
    pub fn has_active(&self) -> bool {
        self.risk != RiskFilter::All
            || self.billing != ALL
            || self.theme != ThemeFilter::All
            || !self.advanced.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn remove_advanced(&mut self, id: &str) {
        self.advanced.retain(|f| f.id != id);
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        self.risk.matches(customer.risk_level) && self.theme.matches(customer)
    }
}

/// Rows matching the risk and theme filters, in input order.
pub fn filter_customers<T: AsRef<Customer> + Clone>(rows: &[T], filters: &DashboardFilters) -> Vec<T> {
    rows.iter().filter(|row| filters.matches(row.as_ref())).cloned().collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Score descending; this is the order rows are fetched in.
    #[default]
    ChurnRisk,
    PlanType,
    ArrValue,
    SubscriptionDate,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::ChurnRisk, SortKey::PlanType, SortKey::ArrValue, SortKey::SubscriptionDate];

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::ChurnRisk => "churn-risk",
            SortKey::PlanType => "plan-type",
            SortKey::ArrValue => "arr-value",
            SortKey::SubscriptionDate => "subscription-date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::ChurnRisk => "Churn Risk",
            SortKey::PlanType => "Plan Type",
            SortKey::ArrValue => "ARR Value",
            SortKey::SubscriptionDate => "Subscription Date",
        }
    }

    /// Stable sort in place.
    pub fn sort<T: AsRef<Customer>>(&self, rows: &mut [T]) {
        match self {
            SortKey::ChurnRisk => rows.sort_by(|a, b| b.as_ref().churn_score.cmp(&a.as_ref().churn_score)),
            SortKey::PlanType => rows.sort_by(|a, b| a.as_ref().subscription_plan.cmp(&b.as_ref().subscription_plan)),
            SortKey::ArrValue => rows.sort_by(|a, b| b.as_ref().arr.cmp(&a.as_ref().arr)),
            SortKey::SubscriptionDate => rows.sort_by(|a, b| b.as_ref().created_at.cmp(&a.as_ref().created_at)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.value() == s)
            .ok_or_else(|| format!("Unknown sort key: {}", s))
    }
}

/// One page of rows plus what the pagination footer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    /// 1-based, already clamped.
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    /// Zero-based offset of the first row on this page.
    pub start: usize,
}

impl<T> PageView<T> {
    pub fn has_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn body(&self) -> TableBody<'_, T> {
        if self.rows.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(&self.rows)
        }
    }

    /// "Showing 11 to 20 of 23 customers"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} customers",
            self.start + 1,
            (self.start + PAGE_SIZE).min(self.total),
            self.total
        )
    }
}

/// Table body for one page: the rows, or one placeholder row.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a, T> {
    Empty,
    Rows(&'a [T]),
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Slice out `page` (1-based). Pages past the end clamp to the last one.
pub fn paginate<T: Clone>(rows: &[T], page: usize) -> PageView<T> {
    let total = rows.len();
    let total_pages = page_count(total);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total);

    PageView {
        rows: rows.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        total_pages,
        total,
        start,
    }
}

/// Current page plus the inputs it was computed for. Any change to the
/// filters or the sort key sends the table back to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCursor {
    pub page: usize,
    risk: RiskFilter,
    billing: String,
    theme: ThemeFilter,
    sort: SortKey,
}

impl Default for TableCursor {
    fn default() -> Self {
        Self {
            page: 1,
            risk: RiskFilter::All,
            billing: ALL.to_string(),
            theme: ThemeFilter::All,
            sort: SortKey::ChurnRisk,
        }
    }
}

impl TableCursor {
    /// Returns true when the page was reset.
    pub fn sync(&mut self, risk: RiskFilter, billing: &str, theme: ThemeFilter, sort: SortKey) -> bool {
        if self.risk == risk && self.billing == billing && self.theme == theme && self.sort == sort {
            return false;
        }
        self.risk = risk;
        self.billing = billing.to_string();
        self.theme = theme;
        self.sort = sort;
        self.page = 1;
        true
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::customer;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn population() -> Vec<Customer> {
        // 8 high, 10 medium, 5 low
        (0..23)
            .map(|i| {
                let level = match i {
                    0..=7 => RiskLevel::High,
                    8..=17 => RiskLevel::Medium,
                    _ => RiskLevel::Low,
                };
                customer(&format!("c{}", i), &format!("Customer {}", i), 100 - i, level, 1000 + i as i64)
            })
            .collect()
    }

    #[test]
    fn test_risk_filter_selects_level() {
        let rows = population();
        let filters = DashboardFilters { risk: RiskFilter::Level(RiskLevel::High), ..Default::default() };

        let filtered = filter_customers(&rows, &filters);
        assert_eq!(filtered.len(), 8);
        assert!(filtered.iter().all(|c| c.risk_level == RiskLevel::High));
        assert_eq!(filter_customers(&rows, &DashboardFilters::default()).len(), 23);
    }

    #[test]
    fn test_high_risk_fits_on_one_page() {
        let rows = population();
        let filters = DashboardFilters { risk: RiskFilter::Level(RiskLevel::High), ..Default::default() };
        let view = paginate(&filter_customers(&rows, &filters), 1);

        assert_eq!(view.total_pages, 1);
        assert_eq!(view.summary(), "Showing 1 to 8 of 8 customers");
        assert!(!view.has_controls());
    }

    #[test]
    fn test_theme_filter_uses_hash() {
        let rows = population();
        let theme = RiskTheme::for_name(&rows[0].name);
        let filters = DashboardFilters { theme: ThemeFilter::Theme(theme), ..Default::default() };

        let filtered = filter_customers(&rows, &filters);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|c| RiskTheme::for_name(&c.name) == theme));
    }

    #[test]
    fn test_pages_partition_rows() {
        let rows = population();
        let pages = page_count(rows.len());
        assert_eq!(pages, 3);

        let mut seen = Vec::new();
        for page in 1..=pages {
            seen.extend(paginate(&rows, page).rows.into_iter().map(|c| c.id));
        }
        let expected: Vec<String> = rows.iter().map(|c| c.id.clone()).collect();
        assert_eq!(seen, expected);

        let last = paginate(&rows, 3);
        assert_eq!(last.summary(), "Showing 21 to 23 of 23 customers");
        assert_eq!(last.page, last.total_pages);
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let rows = population();
        assert_eq!(paginate(&rows, 9).page, 3);
        assert_eq!(paginate(&rows, 0).page, 1);

        let empty: Vec<Customer> = Vec::new();
        let view = paginate(&empty, 4);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 0);
        assert!(view.rows.is_empty());
        assert!(!view.has_controls());
    }

    #[test]
    fn test_table_body_placeholder_only_when_empty() {
        let empty: Vec<Customer> = Vec::new();
        let view = paginate(&empty, 1);
        assert_eq!(view.body(), TableBody::Empty);

        let rows = population();
        let no_match = DashboardFilters {
            risk: RiskFilter::Level(RiskLevel::High),
            ..Default::default()
        };
        let lows: Vec<Customer> = rows.iter().filter(|c| c.risk_level == RiskLevel::Low).cloned().collect();
        assert_eq!(paginate(&filter_customers(&lows, &no_match), 1).body(), TableBody::Empty);

        let first = paginate(&rows, 1);
        match first.body() {
            TableBody::Rows(page) => {
                assert_eq!(page.len(), PAGE_SIZE);
                assert_eq!(page[0].id, rows[0].id);
            }
            TableBody::Empty => panic!("first page should have rows"),
        }
    }

    #[test]
    fn test_cursor_resets_on_change() {
        let mut cursor = TableCursor::default();
        cursor.go_to(3);
        assert!(!cursor.sync(RiskFilter::All, ALL, ThemeFilter::All, SortKey::ChurnRisk));
        assert_eq!(cursor.page, 3);

        assert!(cursor.sync(RiskFilter::Level(RiskLevel::Low), ALL, ThemeFilter::All, SortKey::ChurnRisk));
        assert_eq!(cursor.page, 1);

        cursor.go_to(2);
        assert!(cursor.sync(RiskFilter::Level(RiskLevel::Low), "active", ThemeFilter::All, SortKey::ChurnRisk));
        assert_eq!(cursor.page, 1);

        cursor.go_to(2);
        assert!(cursor.sync(RiskFilter::Level(RiskLevel::Low), "active", ThemeFilter::All, SortKey::ArrValue));
        assert_eq!(cursor.page, 1);
    }

    #[test]
    fn test_sort_keys() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut a = customer("a", "A", 50, RiskLevel::Medium, 300);
        a.subscription_plan = "Starter".to_string();
        a.created_at = base;
        let mut b = customer("b", "B", 90, RiskLevel::High, 100);
        b.subscription_plan = "Enterprise".to_string();
        b.created_at = base + Duration::days(10);
        let mut c = customer("c", "C", 50, RiskLevel::Medium, 200);
        c.subscription_plan = "Growth".to_string();
        c.created_at = base + Duration::days(5);

        let ids = |rows: &[Customer]| rows.iter().map(|r| r.id.clone()).collect::<Vec<_>>();

        let mut rows = vec![a.clone(), b.clone(), c.clone()];
        SortKey::ChurnRisk.sort(&mut rows);
        // ties keep input order
        assert_eq!(ids(&rows), vec!["b", "a", "c"]);

        SortKey::PlanType.sort(&mut rows);
        assert_eq!(ids(&rows), vec!["b", "c", "a"]);

        SortKey::ArrValue.sort(&mut rows);
        assert_eq!(ids(&rows), vec!["a", "c", "b"]);
        assert_eq!(rows[0].arr, Decimal::from(300));

        SortKey::SubscriptionDate.sort(&mut rows);
        assert_eq!(ids(&rows), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_active_filters_and_clear() {
        let mut filters = DashboardFilters::default();
        assert!(!filters.has_active());

        filters.advanced.push(AdvancedFilter {
            id: "1".to_string(),
            attribute: "Id".to_string(),
            condition: "is".to_string(),
            value: "is".to_string(),
        });
        assert!(filters.has_active());
        filters.remove_advanced("1");
        assert!(!filters.has_active());

        filters.theme = "Renewal Timing".parse().unwrap();
        filters.billing = "past_due".to_string();
        assert!(filters.has_active());
        filters.clear();
        assert_eq!(filters, DashboardFilters::default());
    }

    #[test]
    fn test_filter_values_parse() {
        assert_eq!("all".parse::<RiskFilter>(), Ok(RiskFilter::All));
        assert_eq!("medium".parse::<RiskFilter>(), Ok(RiskFilter::Level(RiskLevel::Medium)));
        assert_eq!("plan-type".parse::<SortKey>(), Ok(SortKey::PlanType));
        assert_eq!(ThemeFilter::Theme(RiskTheme::LifecycleStage).value(), "Lifecycle Stage");
    }
}
