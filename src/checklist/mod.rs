//! Submission checklist — items, completion aggregation, filtered views.

pub mod board;
pub mod model;
pub mod seed;

pub use board::{ChecklistBoard, ChecklistEvent};
pub use model::{
    ChecklistFilter, ChecklistItem, ChecklistStats, SectionGroup, group_by_section,
};
pub use seed::sample_checklist;
