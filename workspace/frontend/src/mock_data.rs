//! Fixed figures for the model insight widgets. None of this comes from the
//! table service.

use common::theme::Trend;
use common::RiskLevel;

pub struct Cohort {
    pub label: &'static str,
    pub at_risk: u32,
}

/// Bar length of the cohort chart is relative to this.
pub const COHORT_SCALE: u32 = 40;

pub fn get_cohorts() -> Vec<Cohort> {
    vec![
        Cohort { label: "Jan Subscription Cohort", at_risk: 27 },
        Cohort { label: "Mar Subscription Cohort", at_risk: 21 },
        Cohort { label: "Q2 Trial Conversion Cohort", at_risk: 12 },
        Cohort { label: "Q4 Plan Upgrade Cohort", at_risk: 35 },
    ]
}

pub struct ChurnPoint {
    pub month: &'static str,
    pub actual: u32,
    pub predicted: u32,
}

pub fn get_churn_history() -> Vec<ChurnPoint> {
    vec![
        ChurnPoint { month: "Jul", actual: 120, predicted: 100 },
        ChurnPoint { month: "Aug", actual: 250, predicted: 220 },
        ChurnPoint { month: "Sep", actual: 380, predicted: 350 },
        ChurnPoint { month: "Oct", actual: 450, predicted: 420 },
        ChurnPoint { month: "Nov", actual: 520, predicted: 480 },
        ChurnPoint { month: "Dec", actual: 580, predicted: 550 },
    ]
}

pub const PRECISION_PERCENT: u32 = 60;
pub const RECALL_PERCENT: u32 = 50;
pub const MODEL_ACCURACY_PERCENT: u32 = 78;

pub struct Connector {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub status: &'static str,
    pub impact: &'static str,
}

pub fn get_connectors() -> Vec<Connector> {
    vec![
        Connector {
            id: "usage",
            name: "Product Usage Analytics",
            description: "Track feature adoption and engagement patterns",
            icon: "fas fa-chart-bar",
            status: "available",
            impact: "High impact on accuracy",
        },
        Connector {
            id: "support",
            name: "Support Ticket Data",
            description: "Incorporate customer service interactions and issue resolution",
            icon: "fas fa-link",
            status: "available",
            impact: "Medium impact on accuracy",
        },
        Connector {
            id: "nps",
            name: "Customer Feedback & NPS",
            description: "Include satisfaction scores and survey responses",
            icon: "fas fa-arrow-trend-up",
            status: "available",
            impact: "Medium impact on accuracy",
        },
        Connector {
            id: "crm",
            name: "CRM Data",
            description: "Import customer interactions and relationship data",
            icon: "fas fa-cloud",
            status: "available",
            impact: "Medium impact on accuracy",
        },
        Connector {
            id: "custom",
            name: "Custom Data Upload",
            description: "Upload CSV files with additional customer attributes",
            icon: "fas fa-upload",
            status: "available",
            impact: "Variable impact",
        },
    ]
}

/// Historical churn observed per risk band.
pub struct RiskBand {
    pub level: RiskLevel,
    pub subtitle: &'static str,
    pub stat: &'static str,
    pub description: &'static str,
    pub explanation: &'static str,
}

pub fn get_risk_bands() -> Vec<RiskBand> {
    vec![
        RiskBand {
            level: RiskLevel::High,
            subtitle: "Needs immediate attention",
            stat: "1 in 2",
            description: "About 1 in 2 customers churned",
            explanation: "Customers ranked as High Risk historically churned much more often than average. This is where intervention has the highest impact.",
        },
        RiskBand {
            level: RiskLevel::Medium,
            subtitle: "Watch closely",
            stat: "1 in 5",
            description: "About 1 in 5 customers churned",
            explanation: "These customers showed early warning signs. Many stayed when engaged proactively.",
        },
        RiskBand {
            level: RiskLevel::Low,
            subtitle: "Likely to stay",
            stat: "1 in 20",
            description: "Only 1 in 20 customers churned",
            explanation: "Customers ranked as Low Risk rarely churned during the same period.",
        },
    ]
}

/// Change in customer count since last week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyTrend {
    pub value: u32,
    pub direction: Trend,
}

pub fn weekly_trend(level: RiskLevel) -> WeeklyTrend {
    match level {
        RiskLevel::High => WeeklyTrend { value: 8, direction: Trend::Up },
        RiskLevel::Medium => WeeklyTrend { value: 12, direction: Trend::Down },
        RiskLevel::Low => WeeklyTrend { value: 23, direction: Trend::Up },
    }
}
