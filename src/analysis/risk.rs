//! Risk assessment — flagged contract provisions and the overall profile.

use serde::{Deserialize, Serialize};

/// Severity of a flagged provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        write!(f, "{s}")
    }
}

/// A contract provision flagged during review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProvision {
    /// Stable identifier (e.g. `RP-001`).
    pub id: String,
    /// Risk category label.
    pub category: String,
    /// Severity.
    pub level: RiskLevel,
    /// RFP section reference.
    pub section: String,
    /// The flagged clause.
    pub clause: String,
    /// What the clause could cost the company.
    pub impact: String,
    /// Suggested negotiation position.
    pub suggestion: String,
}

/// A per-category risk score, 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCategoryScore {
    pub name: String,
    pub score: u32,
}

/// One point of the risk-over-time trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskTrendPoint {
    /// Days since the analysis started.
    pub day: u32,
    /// Overall risk score that day.
    pub risk: u32,
}

/// Overall risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Low,
    Moderate,
    High,
}

impl RiskProfile {
    /// Classify a 0–100 risk score: below 30 is low, below 60 moderate.
    pub fn from_score(score: u32) -> Self {
        if score < 30 {
            Self::Low
        } else if score < 60 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk Profile",
            Self::Moderate => "Moderate Risk Profile",
            Self::High => "High Risk Profile",
        }
    }
}

/// Counts of provisions by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// The full risk picture for one RFP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Overall risk score, 0–100.
    pub overall_risk: u32,
    /// Per-category risk scores.
    pub categories: Vec<RiskCategoryScore>,
    /// Risk score by day since the analysis started.
    pub trend: Vec<RiskTrendPoint>,
    /// Flagged provisions.
    pub provisions: Vec<RiskProvision>,
}

impl RiskAssessment {
    /// Classification of the overall score.
    pub fn profile(&self) -> RiskProfile {
        RiskProfile::from_score(self.overall_risk)
    }

    /// Provision counts by severity.
    pub fn counts(&self) -> LevelCounts {
        let mut counts = LevelCounts {
            high: 0,
            medium: 0,
            low: 0,
        };
        for provision in &self.provisions {
            match provision.level {
                RiskLevel::High => counts.high += 1,
                RiskLevel::Medium => counts.medium += 1,
                RiskLevel::Low => counts.low += 1,
            }
        }
        counts
    }

    /// The provisions needing attention first.
    pub fn high_risk_provisions(&self) -> Vec<&RiskProvision> {
        self.provisions
            .iter()
            .filter(|p| p.level == RiskLevel::High)
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn provision(
    id: &str,
    category: &str,
    level: RiskLevel,
    section: &str,
    clause: &str,
    impact: &str,
    suggestion: &str,
) -> RiskProvision {
    RiskProvision {
        id: id.into(),
        category: category.into(),
        level,
        section: section.into(),
        clause: clause.into(),
        impact: impact.into(),
        suggestion: suggestion.into(),
    }
}

/// The sample risk assessment for the IT Modernization RFP.
pub fn sample_assessment() -> RiskAssessment {
    let categories = vec![
        RiskCategoryScore {
            name: "Legal".into(),
            score: 35,
        },
        RiskCategoryScore {
            name: "Financial".into(),
            score: 22,
        },
        RiskCategoryScore {
            name: "Technical".into(),
            score: 18,
        },
        RiskCategoryScore {
            name: "Timeline".into(),
            score: 30,
        },
        RiskCategoryScore {
            name: "Compliance".into(),
            score: 20,
        },
    ];

    let trend = [45, 42, 40, 35, 32, 28, 25]
        .iter()
        .enumerate()
        .map(|(n, risk)| RiskTrendPoint {
            day: n as u32 + 1,
            risk: *risk,
        })
        .collect();

    let provisions = vec![
        provision(
            "RP-001",
            "Legal",
            RiskLevel::High,
            "8.3.2",
            "Unlimited liability for data breaches without proportional responsibility limits",
            "Could expose company to unlimited financial risk in case of any breach, even if \
             not directly at fault",
            "Propose language that limits liability to direct damages and caps liability \
             based on contract value",
        ),
        provision(
            "RP-002",
            "Financial",
            RiskLevel::Medium,
            "5.1.4",
            "Payment terms requiring completion of all deliverables before any payment is made",
            "Creates cash flow challenges and increases financial exposure",
            "Request milestone-based payments aligned with defined deliverables",
        ),
        provision(
            "RP-003",
            "Technical",
            RiskLevel::Medium,
            "9.2.7",
            "Requirement to integrate with legacy systems without provided documentation",
            "May lead to extended development time and unexpected technical challenges",
            "Request system documentation and API specifications as part of the contract",
        ),
        provision(
            "RP-004",
            "Timeline",
            RiskLevel::Medium,
            "3.4.1",
            "90-day implementation timeline without accounting for approval processes",
            "Unrealistic timeline given the scope and approval dependencies",
            "Propose phased implementation with timeline adjustments for approval delays",
        ),
        provision(
            "RP-005",
            "Compliance",
            RiskLevel::Low,
            "11.2.3",
            "Compliance with emerging regulations not yet formalized",
            "Creates uncertainty around compliance requirements",
            "Clarify that compliance will apply to regulations finalized by contract signing \
             date",
        ),
    ];

    RiskAssessment {
        overall_risk: 25,
        categories,
        trend,
        provisions,
    }
}
