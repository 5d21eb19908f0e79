pub mod customer_profile;
pub mod data_connector;
pub mod enable_churn_score;
pub mod filter_list;
pub mod risk_segment;
pub mod risk_themes_explainer;

pub use customer_profile::CustomerProfileModal;
pub use data_connector::DataConnectorModal;
pub use enable_churn_score::EnableChurnScoreModal;
pub use filter_list::FilterListModal;
pub use risk_segment::RiskSegmentModal;
pub use risk_themes_explainer::RiskThemesExplainerModal;
