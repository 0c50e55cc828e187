//! Checklist data model — items, filters, and derived statistics.

use serde::{Deserialize, Serialize};

/// A single trackable submission-document requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable identifier, unique within a board (e.g. `DOC-003`).
    pub id: String,
    /// Grouping label; sections display in first-seen order.
    pub section: String,
    /// Short display name.
    pub name: String,
    /// Longer display description.
    pub description: String,
    /// Whether the item counts toward the required-completion statistic.
    pub required: bool,
    /// Completion state, flipped by [`toggle_completed`](super::ChecklistBoard::toggle_completed).
    pub completed: bool,
    /// Display-only due date; no scheduling semantics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl ChecklistItem {
    /// Create a new pending item.
    pub fn new(
        id: impl Into<String>,
        section: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            id: id.into(),
            section: section.into(),
            name: name.into(),
            description: description.into(),
            required,
            completed: false,
            due_date: None,
        }
    }

    /// Builder: set the display due date.
    pub fn with_due_date(mut self, due: impl Into<String>) -> Self {
        self.due_date = Some(due.into());
        self
    }
}

/// Which items a derived view includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistFilter {
    All,
    Completed,
    Pending,
}

impl ChecklistFilter {
    /// Whether an item passes this filter.
    pub fn matches(&self, item: &ChecklistItem) -> bool {
        match self {
            Self::All => true,
            Self::Completed => item.completed,
            Self::Pending => !item.completed,
        }
    }
}

impl std::fmt::Display for ChecklistFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        };
        write!(f, "{s}")
    }
}

/// Completion statistics for a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistStats {
    pub total: usize,
    pub completed: usize,
    /// `round(100 * completed / total)`; 0 when the board is empty.
    pub completion_pct: u32,
    pub required_total: usize,
    pub required_completed: usize,
    /// Same rounding over the required subset.
    pub required_completion_pct: u32,
}

impl ChecklistStats {
    /// Compute statistics over a slice of items.
    pub fn from_items(items: &[ChecklistItem]) -> Self {
        let total = items.len();
        let completed = items.iter().filter(|i| i.completed).count();
        let required_total = items.iter().filter(|i| i.required).count();
        let required_completed = items.iter().filter(|i| i.required && i.completed).count();

        Self {
            total,
            completed,
            completion_pct: percentage(completed, total),
            required_total,
            required_completed,
            required_completion_pct: percentage(required_completed, required_total),
        }
    }

    /// Items still pending.
    pub fn pending(&self) -> usize {
        self.total - self.completed
    }

    /// Required items still pending.
    pub fn required_pending(&self) -> usize {
        self.required_total - self.required_completed
    }
}

/// A section label with its member items, in original relative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGroup {
    pub section: String,
    pub items: Vec<ChecklistItem>,
}

/// Group items by section, preserving first-seen section order.
///
/// Sections with no members are never emitted.
pub fn group_by_section(items: &[ChecklistItem]) -> Vec<SectionGroup> {
    let mut groups: Vec<SectionGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.section == item.section) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(SectionGroup {
                section: item.section.clone(),
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
