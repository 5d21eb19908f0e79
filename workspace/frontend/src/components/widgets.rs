mod actual_vs_predicted;
mod cohort_chart;
mod model_performance;
mod risk_bands;
mod risk_card;
mod score_badge;
mod theme_badge;

pub use actual_vs_predicted::ActualVsPredictedChart;
pub use cohort_chart::CohortChart;
pub use model_performance::ModelPerformance;
pub use risk_bands::RiskBands;
pub use risk_card::RiskCard;
pub use score_badge::ScoreBadge;
pub use theme_badge::ThemeBadge;

use common::RiskLevel;

/// Background and text classes for a risk level.
pub fn level_classes(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "bg-error/15 text-error",
        RiskLevel::Medium => "bg-warning/20 text-warning-content",
        RiskLevel::Low => "bg-success/15 text-success",
    }
}
