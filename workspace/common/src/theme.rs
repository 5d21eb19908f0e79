//! Risk themes: five fixed categories used to group customers in the UI.
//!
//! A customer's theme is derived from its name only, by summing the UTF-16
//! code units of the name and taking the remainder modulo the theme count.
//! The mapping is stable across renders but carries no meaning; it does not
//! look at the customer's drivers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTheme {
    PaymentExperience,
    EngagementDepth,
    RenewalTiming,
    LifecycleStage,
    ValueAlignment,
}

/// Arrow shown next to the theme name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Colour family used for the theme arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Warning,
}

impl RiskTheme {
    /// Order matters: the hash indexes into this array.
    pub const ALL: [RiskTheme; 5] = [
        RiskTheme::PaymentExperience,
        RiskTheme::EngagementDepth,
        RiskTheme::RenewalTiming,
        RiskTheme::LifecycleStage,
        RiskTheme::ValueAlignment,
    ];

    /// Assign a theme to a customer by name.
    pub fn for_name(name: &str) -> RiskTheme {
        let sum: u64 = name.encode_utf16().map(u64::from).sum();
        Self::ALL[(sum % Self::ALL.len() as u64) as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiskTheme::PaymentExperience => "Payment Experience",
            RiskTheme::EngagementDepth => "Engagement Depth",
            RiskTheme::RenewalTiming => "Renewal Timing",
            RiskTheme::LifecycleStage => "Lifecycle Stage",
            RiskTheme::ValueAlignment => "Value Alignment",
        }
    }

    pub fn trend(&self) -> Trend {
        match self {
            RiskTheme::PaymentExperience | RiskTheme::RenewalTiming | RiskTheme::LifecycleStage => Trend::Up,
            RiskTheme::EngagementDepth | RiskTheme::ValueAlignment => Trend::Down,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            RiskTheme::PaymentExperience | RiskTheme::RenewalTiming => Tone::Danger,
            _ => Tone::Warning,
        }
    }

    /// Signals grouped under this theme, as listed in the themes panel.
    pub fn indicators(&self) -> &'static [&'static str] {
        match self {
            RiskTheme::PaymentExperience => &[
                "Latest transaction failed",
                "Transaction failure percentage",
                "Delayed payment patterns",
                "Auto-collection status",
                "Payment method stability",
            ],
            RiskTheme::EngagementDepth => &[
                "Invoice generation frequency",
                "Invoice payment completion rate",
                "Free tier time spent percentage",
            ],
            RiskTheme::RenewalTiming => &[
                "Days until upcoming renewal",
                "Billing period unit",
                "Past cancellation history",
            ],
            RiskTheme::LifecycleStage => &[
                "Total active paid tenure",
                "Time taken for activation",
                "Early invoice activity",
            ],
            RiskTheme::ValueAlignment => &[
                "Monthly recurring revenue level",
                "Currency and pricing tier",
                "Plan upgrade/downgrade patterns",
            ],
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskTheme::PaymentExperience => {
                "Payment friction increases involuntary churn even when customer intent is positive."
            }
            RiskTheme::EngagementDepth => "Low operational dependence makes renewal easier to drop.",
            RiskTheme::RenewalTiming => "Churn risk concentrates at renewal decision points.",
            RiskTheme::LifecycleStage => {
                "New customers are more likely to churn before establishing habits and realizing value."
            }
            RiskTheme::ValueAlignment => {
                "Mismatch between plan tier and actual usage suggests customer may not perceive sufficient value."
            }
        }
    }
}

impl fmt::Display for RiskTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiskTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| format!("Unknown risk theme: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_is_deterministic() {
        for name in ["Acme Corp", "Globex", "Initech", ""] {
            assert_eq!(RiskTheme::for_name(name), RiskTheme::for_name(name));
        }
    }

    #[test]
    fn test_theme_uses_code_unit_sum() {
        // 'A' = 65 -> 65 % 5 = 0
        assert_eq!(RiskTheme::for_name("A"), RiskTheme::PaymentExperience);
        // 'B' = 66 -> 1
        assert_eq!(RiskTheme::for_name("B"), RiskTheme::EngagementDepth);
        // "AB" = 131 -> 1
        assert_eq!(RiskTheme::for_name("AB"), RiskTheme::EngagementDepth);
        // 'D' = 68 -> 3
        assert_eq!(RiskTheme::for_name("D"), RiskTheme::LifecycleStage);
        // empty name sums to zero
        assert_eq!(RiskTheme::for_name(""), RiskTheme::PaymentExperience);
    }

    #[test]
    fn test_theme_counts_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D + 0xDE00 = 112_189 -> 4
        assert_eq!(RiskTheme::for_name("\u{1F600}"), RiskTheme::ValueAlignment);
    }

    #[test]
    fn test_theme_name_roundtrip() {
        for theme in RiskTheme::ALL {
            assert_eq!(theme.name().parse::<RiskTheme>(), Ok(theme));
        }
        assert!("Pricing".parse::<RiskTheme>().is_err());
    }
}
