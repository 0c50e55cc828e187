//! Analysis surfaces derived from the mock RFP review — eligibility and risk.

pub mod eligibility;
pub mod risk;

pub use eligibility::{EligibilityReport, MatchCounts, MatchLevel, ScoreBand};
pub use risk::{LevelCounts, RiskAssessment, RiskLevel, RiskProfile};
