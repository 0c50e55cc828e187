//! Eligibility assessment — requirement matches and category scores.

use serde::{Deserialize, Serialize};

/// How well the company meets a single requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    /// Requirement fully met.
    Met,
    /// Partial match, may need improvement.
    Partial,
    /// Requirement not met, action needed.
    Gap,
}

impl std::fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Met => "met",
            Self::Partial => "partial",
            Self::Gap => "gap",
        };
        write!(f, "{s}")
    }
}

/// One RFP requirement compared against the company's capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementAssessment {
    /// Scoring category this requirement belongs to.
    pub category: String,
    /// Short requirement name.
    pub requirement: String,
    /// What the RFP asks for.
    pub rfp_requirement: String,
    /// What the company can show.
    pub company_capability: String,
    /// Assessment outcome.
    pub level: MatchLevel,
}

/// A per-category match score, 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    pub score: u32,
}

impl CategoryScore {
    /// Band the score falls in for display emphasis.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Display band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::Strong
        } else if score >= 70 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// A suggested step toward closing a partial match or gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub detail: String,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Counts of requirement outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCounts {
    pub met: usize,
    pub partial: usize,
    pub gaps: usize,
}

/// The full eligibility picture for one RFP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityReport {
    /// Overall match score, 0–100.
    pub overall_score: u32,
    /// Per-category scores.
    pub categories: Vec<CategoryScore>,
    /// Requirement-by-requirement comparison.
    pub requirements: Vec<RequirementAssessment>,
    /// Steps toward improving eligibility.
    pub recommendations: Vec<Recommendation>,
}

impl EligibilityReport {
    /// Requirement outcome counts.
    pub fn counts(&self) -> MatchCounts {
        let mut counts = MatchCounts {
            met: 0,
            partial: 0,
            gaps: 0,
        };
        for req in &self.requirements {
            match req.level {
                MatchLevel::Met => counts.met += 1,
                MatchLevel::Partial => counts.partial += 1,
                MatchLevel::Gap => counts.gaps += 1,
            }
        }
        counts
    }

    /// Band of the overall score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }
}

fn requirement(
    category: &str,
    requirement: &str,
    rfp_requirement: &str,
    company_capability: &str,
    level: MatchLevel,
) -> RequirementAssessment {
    RequirementAssessment {
        category: category.into(),
        requirement: requirement.into(),
        rfp_requirement: rfp_requirement.into(),
        company_capability: company_capability.into(),
        level,
    }
}

/// The sample eligibility report for the IT Modernization RFP.
pub fn sample_report() -> EligibilityReport {
    let categories = vec![
        CategoryScore {
            name: "Technical Capabilities".into(),
            score: 92,
        },
        CategoryScore {
            name: "Past Performance".into(),
            score: 78,
        },
        CategoryScore {
            name: "Certifications".into(),
            score: 95,
        },
        CategoryScore {
            name: "Team Composition".into(),
            score: 83,
        },
        CategoryScore {
            name: "Financial Requirements".into(),
            score: 76,
        },
    ];

    let requirements = vec![
        requirement(
            "Technical Capabilities",
            "Cloud migration experience",
            "5+ cloud migration projects",
            "7 completed cloud migration projects",
            MatchLevel::Met,
        ),
        requirement(
            "Technical Capabilities",
            "Agile development methodology",
            "Certified Scrum team members",
            "4 Certified Scrum Masters, Agile team structure",
            MatchLevel::Met,
        ),
        requirement(
            "Past Performance",
            "Government contract experience",
            "3+ federal contracts in past 5 years",
            "2 federal contracts, 5 state contracts",
            MatchLevel::Gap,
        ),
        requirement(
            "Past Performance",
            "Similar project size",
            "$2M+ project implementation",
            "$3.5M average project size",
            MatchLevel::Met,
        ),
        requirement(
            "Certifications",
            "ISO 27001",
            "Current certification required",
            "ISO 27001:2022 certified",
            MatchLevel::Met,
        ),
        requirement(
            "Certifications",
            "CMMI Level",
            "CMMI Level 3 or higher",
            "CMMI Level 4 certified",
            MatchLevel::Met,
        ),
        requirement(
            "Team Composition",
            "Security specialist",
            "CISSP certified security lead",
            "CISSP certified security architect on staff",
            MatchLevel::Met,
        ),
        requirement(
            "Team Composition",
            "Technical Architect",
            "10+ years experience",
            "Available technical architect has 8 years experience",
            MatchLevel::Partial,
        ),
        requirement(
            "Financial Requirements",
            "Revenue threshold",
            "$10M annual revenue minimum",
            "$12.5M annual revenue",
            MatchLevel::Met,
        ),
        requirement(
            "Financial Requirements",
            "Insurance coverage",
            "$5M liability insurance",
            "$3M liability insurance",
            MatchLevel::Gap,
        ),
    ];

    let recommendations = vec![
        Recommendation::new(
            "Secure additional government contracts reference",
            "Consider partnering with a firm that has more federal contract experience to \
             strengthen this requirement.",
        ),
        Recommendation::new(
            "Assign technical architect with more experience",
            "Consider bringing in a more senior technical architect for this project to meet \
             the 10+ years experience requirement.",
        ),
        Recommendation::new(
            "Increase liability insurance coverage",
            "Current coverage is $3M, but RFP requires $5M. Contact your insurance provider \
             to upgrade coverage before submission.",
        ),
    ];

    EligibilityReport {
        overall_score: 85,
        categories,
        requirements,
        recommendations,
    }
}
