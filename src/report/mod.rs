//! Report summary — composes the analysis surfaces into one document.

use std::fmt::Write as _;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::eligibility::{EligibilityReport, MatchCounts};
use crate::analysis::risk::{LevelCounts, RiskAssessment};
use crate::checklist::model::ChecklistStats;

/// A top-level section of the RFP document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfpSection {
    pub name: String,
    /// Page range as displayed (e.g. `13-22`).
    pub pages: String,
}

/// Header metadata for the RFP under analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfpProfile {
    pub title: String,
    pub agency: String,
    /// Display date, no scheduling semantics.
    pub due_date: String,
    pub time_left: String,
    pub estimated_value: String,
    pub status: String,
    pub sections: Vec<RfpSection>,
}

/// The sample profile for the IT Modernization RFP.
pub fn sample_profile() -> RfpProfile {
    let sections = [
        ("Introduction", "1-5"),
        ("Scope of Work", "6-12"),
        ("Technical Requirements", "13-22"),
        ("Evaluation Criteria", "23-27"),
        ("Pricing Structure", "28-32"),
        ("Terms & Conditions", "33-40"),
    ]
    .iter()
    .map(|(name, pages)| RfpSection {
        name: (*name).to_string(),
        pages: (*pages).to_string(),
    })
    .collect();

    RfpProfile {
        title: "IT Modernization and Cloud Migration Services".into(),
        agency: "Department of Technology".into(),
        due_date: "May 15, 2025".into(),
        time_left: "42 days".into(),
        estimated_value: "$2.5M - $3.2M".into(),
        status: "Open".into(),
        sections,
    }
}

/// A compiled summary across eligibility, risk, and submission progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub profile: RfpProfile,
    pub eligibility_score: u32,
    pub risk_score: u32,
    pub completion_score: u32,
    pub eligibility: MatchCounts,
    pub risk: LevelCounts,
    pub checklist: ChecklistStats,
    pub key_takeaways: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl ReportSummary {
    /// Compile a summary from the current state of each surface.
    pub fn compile(
        profile: RfpProfile,
        eligibility: &EligibilityReport,
        risk: &RiskAssessment,
        checklist: &ChecklistStats,
    ) -> Self {
        let match_counts = eligibility.counts();
        let level_counts = risk.counts();

        let mut key_takeaways = vec![
            format!(
                "{} of {} requirements met ({}% eligibility score)",
                match_counts.met,
                eligibility.requirements.len(),
                eligibility.overall_score,
            ),
            format!(
                "{} ({}% risk score) with {} high-risk provision{} to address",
                risk.profile().label(),
                risk.overall_risk,
                level_counts.high,
                plural(level_counts.high),
            ),
            format!(
                "Submission preparation is {}% complete with {} required document{} pending",
                checklist.completion_pct,
                checklist.required_pending(),
                plural(checklist.required_pending()),
            ),
        ];
        key_takeaways.extend(
            eligibility
                .recommendations
                .iter()
                .map(|r| r.title.clone()),
        );

        info!(
            eligibility = eligibility.overall_score,
            risk = risk.overall_risk,
            completion = checklist.completion_pct,
            "Report summary compiled"
        );

        Self {
            eligibility_score: eligibility.overall_score,
            risk_score: risk.overall_risk,
            completion_score: checklist.completion_pct,
            eligibility: match_counts,
            risk: level_counts,
            checklist: *checklist,
            key_takeaways,
            generated_at: Utc::now(),
            profile,
        }
    }

    /// Render the summary as plain text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "RFP Analysis Report — {}", self.profile.title);
        let _ = writeln!(
            out,
            "{} · Due {} ({} remaining) · {}",
            self.profile.agency,
            self.profile.due_date,
            self.profile.time_left,
            self.profile.estimated_value,
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Eligibility {}%  |  Risk {}%  |  Completion {}%",
            self.eligibility_score, self.risk_score, self.completion_score,
        );
        let _ = writeln!(
            out,
            "Requirements: {} met, {} partial, {} gaps",
            self.eligibility.met, self.eligibility.partial, self.eligibility.gaps,
        );
        let _ = writeln!(
            out,
            "Provisions: {} high, {} medium, {} low",
            self.risk.high, self.risk.medium, self.risk.low,
        );
        let _ = writeln!(
            out,
            "Checklist: {} of {} complete, {} required pending",
            self.checklist.completed,
            self.checklist.total,
            self.checklist.required_pending(),
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Key takeaways:");
        for takeaway in &self.key_takeaways {
            let _ = writeln!(out, "  - {takeaway}");
        }
        out
    }

    /// Simulated export: waits out the given delay, then returns the
    /// rendered text.
    pub async fn export(&self, delay: Duration) -> String {
        tokio::time::sleep(delay).await;
        info!(title = %self.profile.title, "Report exported");
        self.render_text()
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::eligibility::sample_report;
    use crate::analysis::risk::sample_assessment;
    use crate::checklist::seed::sample_checklist;

    fn summary() -> ReportSummary {
        ReportSummary::compile(
            sample_profile(),
            &sample_report(),
            &sample_assessment(),
            &ChecklistStats::from_items(&sample_checklist()),
        )
    }

    #[test]
    fn scores_come_from_the_inputs() {
        let summary = summary();
        assert_eq!(summary.eligibility_score, 85);
        assert_eq!(summary.risk_score, 25);
        assert_eq!(summary.completion_score, 44);
        assert_eq!(summary.eligibility.met, 7);
        assert_eq!(summary.risk.high, 1);
        assert_eq!(summary.checklist.total, 18);
    }

    #[test]
    fn takeaways_embed_the_compiled_numbers() {
        let summary = summary();
        assert_eq!(summary.key_takeaways.len(), 6); // 3 stat lines + 3 recommendations
        assert!(summary.key_takeaways[0].contains("85% eligibility score"));
        assert!(summary.key_takeaways[1].contains("Low Risk Profile"));
        assert!(summary.key_takeaways[1].contains("1 high-risk provision to address"));
        assert!(summary.key_takeaways[2].contains("44% complete"));
        assert!(summary.key_takeaways[2].contains("9 required documents pending"));
    }

    #[test]
    fn render_includes_the_header_and_takeaways() {
        let summary = summary();
        let text = summary.render_text();
        assert!(text.contains("IT Modernization and Cloud Migration Services"));
        assert!(text.contains("Department of Technology"));
        assert!(text.contains("Eligibility 85%"));
        assert!(text.contains("  - "));
    }

    #[test]
    fn sample_profile_sections() {
        let profile = sample_profile();
        assert_eq!(profile.sections.len(), 6);
        assert_eq!(profile.sections[2].name, "Technical Requirements");
        assert_eq!(profile.sections[2].pages, "13-22");
    }

    #[tokio::test]
    async fn export_returns_the_rendered_text() {
        let summary = summary();
        let exported = summary.export(Duration::ZERO).await;
        assert_eq!(exported, summary.render_text());
    }
}
