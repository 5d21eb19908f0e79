//! Advanced filter builder state.
//!
//! Filters are kept in memory only and are not evaluated against customers;
//! the dashboard shows them as chips.

use serde::{Deserialize, Serialize};

pub const CUSTOMER_ATTRIBUTES: [&str; 12] = [
    "Payment Terms",
    "Id",
    "Name",
    "Email",
    "Company",
    "Phone",
    "Auto Collection",
    "Vat Number",
    "Billing Address",
    "Shipping Address",
    "Created Date",
    "Last Modified Date",
];

pub const PAYMENT_TERMS_CONDITIONS: [&str; 6] = [
    "is Due Upon Receipt",
    "is Net 15",
    "is Net 30",
    "is Net 45",
    "is Net 60",
    "is Net 90",
];

pub const TEXT_CONDITIONS: [&str; 6] = [
    "is",
    "is not",
    "contains",
    "does not contain",
    "starts with",
    "ends with",
];

pub const AUTO_COLLECTION_CONDITIONS: [&str; 2] = ["is On", "is Off"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedFilter {
    pub id: String,
    pub attribute: String,
    pub condition: String,
    /// Mirrors `condition`.
    pub value: String,
}

impl AdvancedFilter {
    /// Chip text, e.g. "Payment Terms is Net 30".
    pub fn label(&self) -> String {
        format!("{} {}", self.attribute, self.condition)
    }
}

pub fn conditions_for(attribute: &str) -> &'static [&'static str] {
    match attribute {
        "Payment Terms" => &PAYMENT_TERMS_CONDITIONS,
        "Auto Collection" => &AUTO_COLLECTION_CONDITIONS,
        _ => &TEXT_CONDITIONS,
    }
}

/// Case-insensitive substring search over the attribute catalog.
pub fn search_attributes(term: &str) -> Vec<&'static str> {
    let needle = term.to_lowercase();
    CUSTOMER_ATTRIBUTES
        .iter()
        .copied()
        .filter(|attr| attr.to_lowercase().contains(&needle))
        .collect()
}

/// Working copy of the filter list while the builder modal is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDraft {
    pub filters: Vec<AdvancedFilter>,
    pub attribute: Option<String>,
    pub condition: Option<String>,
    pub search: String,
    pub selecting: bool,
}

impl FilterDraft {
    pub fn seeded(applied: &[AdvancedFilter]) -> Self {
        Self { filters: applied.to_vec(), ..Default::default() }
    }

    pub fn select_attribute(&mut self, attribute: &str) {
        self.attribute = Some(attribute.to_string());
        self.condition = None;
    }

    pub fn select_condition(&mut self, condition: &str) {
        self.condition = Some(condition.to_string());
    }

    pub fn can_add(&self) -> bool {
        self.attribute.is_some() && self.condition.is_some()
    }

    /// Append the selected attribute/condition as a new filter.
    ///
    /// `now_millis` seeds the id; it is bumped past any id already in the
    /// draft. Returns false and leaves the draft untouched when either part
    /// is missing.
    pub fn add(&mut self, now_millis: i64) -> bool {
        if !self.can_add() {
            return false;
        }
        let (Some(attribute), Some(condition)) = (self.attribute.take(), self.condition.take()) else {
            return false;
        };

        let mut id = now_millis;
        while self.filters.iter().any(|f| f.id == id.to_string()) {
            id += 1;
        }

        tracing::debug!("Adding filter {} {}", attribute, condition);
        self.filters.push(AdvancedFilter {
            id: id.to_string(),
            attribute,
            value: condition.clone(),
            condition,
        });
        self.selecting = false;
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.filters.retain(|f| f.id != id);
    }

    /// The list to hand back to the owner.
    pub fn apply(&self) -> Vec<AdvancedFilter> {
        self.filters.clone()
    }

    /// Drop unsaved edits, returning to the last applied list.
    pub fn discard(&mut self, applied: &[AdvancedFilter]) {
        *self = Self::seeded(applied);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied() -> Vec<AdvancedFilter> {
        vec![AdvancedFilter {
            id: "1".to_string(),
            attribute: "Name".to_string(),
            condition: "contains".to_string(),
            value: "contains".to_string(),
        }]
    }

    #[test]
    fn test_conditions_depend_on_attribute() {
        assert_eq!(conditions_for("Payment Terms").len(), 6);
        assert_eq!(conditions_for("Auto Collection"), &["is On", "is Off"]);
        assert_eq!(conditions_for("Email")[0], "is");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(search_attributes("ADDRESS"), vec!["Billing Address", "Shipping Address"]);
        assert_eq!(search_attributes("").len(), 12);
        assert!(search_attributes("zzz").is_empty());
    }

    #[test]
    fn test_add_requires_attribute_and_condition() {
        let mut draft = FilterDraft::default();
        draft.select_attribute("Phone");
        assert!(!draft.add(100));
        assert!(draft.filters.is_empty());

        draft.select_attribute("Phone");
        draft.select_condition("starts with");
        assert!(draft.add(100));
        assert_eq!(draft.filters[0].value, "starts with");
        assert_eq!(draft.filters[0].label(), "Phone starts with");
        assert!(draft.attribute.is_none());
    }

    #[test]
    fn test_add_keeps_ids_unique() {
        let mut draft = FilterDraft::default();
        for _ in 0..2 {
            draft.select_attribute("Id");
            draft.select_condition("is");
            draft.add(42);
        }
        assert_eq!(draft.filters[0].id, "42");
        assert_eq!(draft.filters[1].id, "43");
    }

    #[test]
    fn test_apply_and_discard() {
        let applied = applied();
        let mut draft = FilterDraft::seeded(&applied);
        draft.remove("1");
        draft.select_attribute("Auto Collection");
        draft.select_condition("is Off");
        draft.add(7);

        let pushed = draft.apply();
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].attribute, "Auto Collection");

        draft.discard(&applied);
        assert_eq!(draft.filters, applied);
    }
}
