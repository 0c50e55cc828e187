//! Sample submission checklist for the demo RFP.

use super::model::ChecklistItem;

fn doc(
    id: &str,
    section: &str,
    name: &str,
    description: &str,
    required: bool,
    completed: bool,
) -> ChecklistItem {
    let mut item = ChecklistItem::new(id, section, name, description, required);
    item.completed = completed;
    item
}

/// The 18-item sample checklist for the IT Modernization RFP.
///
/// Eight items start completed, so a fresh board reports 44% overall
/// completion and 44% required completion.
pub fn sample_checklist() -> Vec<ChecklistItem> {
    vec![
        doc(
            "DOC-001",
            "Administrative",
            "Cover Letter",
            "Include company letterhead, contact information, and brief statement of interest",
            true,
            true,
        ),
        doc(
            "DOC-002",
            "Administrative",
            "Executive Summary",
            "2-3 page overview of your proposal and key differentiators",
            true,
            true,
        ),
        doc(
            "DOC-003",
            "Administrative",
            "Table of Contents",
            "Including section numbers and page references",
            true,
            false,
        ),
        doc(
            "DOC-004",
            "Technical",
            "Technical Approach",
            "Detailed methodology for cloud migration and modernization",
            true,
            true,
        ),
        doc(
            "DOC-005",
            "Technical",
            "Work Breakdown Structure",
            "Detailed WBS showing all phases and deliverables",
            true,
            true,
        ),
        doc(
            "DOC-006",
            "Technical",
            "Project Schedule",
            "Gantt chart showing timeline and dependencies",
            true,
            false,
        ),
        doc(
            "DOC-007",
            "Technical",
            "Technical Diagrams",
            "Architecture diagrams for the proposed solution",
            true,
            false,
        ),
        doc(
            "DOC-008",
            "Management",
            "Project Management Plan",
            "Approach to managing the project, including communication plans",
            true,
            true,
        ),
        doc(
            "DOC-009",
            "Management",
            "Staffing Plan",
            "Key personnel, roles, and availability",
            true,
            false,
        ),
        doc(
            "DOC-010",
            "Management",
            "Risk Management Plan",
            "Identification of risks and mitigation strategies",
            true,
            false,
        ),
        doc(
            "DOC-011",
            "Past Performance",
            "Case Studies",
            "3-5 case studies demonstrating similar work",
            true,
            false,
        ),
        doc(
            "DOC-012",
            "Past Performance",
            "Reference Letters",
            "Reference letters from previous clients",
            false,
            false,
        ),
        doc(
            "DOC-013",
            "Financial",
            "Price Proposal",
            "Detailed cost breakdown as per RFP requirements",
            true,
            false,
        ),
        doc(
            "DOC-014",
            "Financial",
            "Financial Statements",
            "Last 3 years of audited financial statements",
            true,
            false,
        ),
        doc(
            "DOC-015",
            "Compliance",
            "Certifications",
            "Copies of all required certifications",
            true,
            true,
        ),
        doc(
            "DOC-016",
            "Compliance",
            "Compliance Matrix",
            "Point-by-point compliance with all RFP requirements",
            true,
            false,
        ),
        doc(
            "DOC-017",
            "Appendices",
            "Team Resumes",
            "CVs of all key team members",
            true,
            true,
        ),
        doc(
            "DOC-018",
            "Appendices",
            "Supporting Documents",
            "Any additional materials referenced in the proposal",
            false,
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::board::ChecklistBoard;
    use crate::checklist::model::{ChecklistFilter, ChecklistStats};
    use std::collections::HashSet;

    #[test]
    fn seed_shape() {
        let items = sample_checklist();
        assert_eq!(items.len(), 18);
        assert_eq!(items.iter().filter(|i| i.completed).count(), 8);
        assert_eq!(items.iter().filter(|i| i.required).count(), 16);

        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn doc_003_starts_pending() {
        let items = sample_checklist();
        let item = items.iter().find(|i| i.id == "DOC-003").unwrap();
        assert!(!item.completed);
        assert!(item.required);
    }

    #[test]
    fn seeded_stats() {
        let stats = ChecklistStats::from_items(&sample_checklist());
        assert_eq!(stats.completion_pct, 44); // round(100 * 8/18)
        assert_eq!(stats.required_completed, 7);
        assert_eq!(stats.required_completion_pct, 44); // round(100 * 7/16)
    }

    #[test]
    fn toggling_doc_003_hits_fifty_percent() {
        let mut board = ChecklistBoard::new(sample_checklist()).unwrap();
        assert_eq!(board.stats().completion_pct, 44);

        let updated = board.toggle_completed("DOC-003").unwrap();
        assert!(updated.completed);
        assert_eq!(board.stats().completion_pct, 50); // round(100 * 9/18)
    }

    #[test]
    fn sections_group_in_document_order() {
        let board = ChecklistBoard::new(sample_checklist()).unwrap();
        let groups = board.grouped(ChecklistFilter::All);
        let sections: Vec<&str> = groups.iter().map(|g| g.section.as_str()).collect();
        assert_eq!(
            sections,
            vec![
                "Administrative",
                "Technical",
                "Management",
                "Past Performance",
                "Financial",
                "Compliance",
                "Appendices",
            ]
        );
    }
}
