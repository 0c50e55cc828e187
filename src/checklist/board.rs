//! Checklist board — owns the item collection and derived completion state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::info;

use crate::error::ChecklistError;

use super::model::{
    ChecklistFilter, ChecklistItem, ChecklistStats, SectionGroup, group_by_section,
};

/// Event broadcast capacity.
const EVENT_CAPACITY: usize = 64;

/// Events broadcast to subscribers on board mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChecklistEvent {
    /// An item's completion state was flipped.
    ItemToggled { item: ChecklistItem },
}

/// In-memory checklist with completion aggregation.
///
/// Fully synchronous: every operation completes before returning. Read
/// accessors return snapshots; the underlying collection is only mutated
/// through [`toggle_completed`](Self::toggle_completed).
#[derive(Debug)]
pub struct ChecklistBoard {
    items: Vec<ChecklistItem>,
    tx: broadcast::Sender<ChecklistEvent>,
}

impl ChecklistBoard {
    /// Create a board from a list of items. Insertion order is display order.
    ///
    /// Fails if two items share an id.
    pub fn new(items: Vec<ChecklistItem>) -> Result<Self, ChecklistError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(ChecklistError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }

        let (tx, _rx) = broadcast::channel(EVENT_CAPACITY);
        Ok(Self { items, tx })
    }

    /// Subscribe to board mutation events.
    pub fn subscribe(&self) -> broadcast::Receiver<ChecklistEvent> {
        self.tx.subscribe()
    }

    /// Flip the completion state of exactly the matching item.
    ///
    /// Returns the updated item — the caller's input for any notification —
    /// and broadcasts [`ChecklistEvent::ItemToggled`]. All other items are
    /// left untouched. Toggling twice restores the original state.
    pub fn toggle_completed(&mut self, id: &str) -> Result<ChecklistItem, ChecklistError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ChecklistError::NotFound { id: id.to_string() })?;

        item.completed = !item.completed;
        let updated = item.clone();

        info!(
            id = %updated.id,
            name = %updated.name,
            completed = updated.completed,
            "Checklist item toggled"
        );

        // Broadcast — ok if no receivers are listening yet
        let _ = self.tx.send(ChecklistEvent::ItemToggled {
            item: updated.clone(),
        });

        Ok(updated)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Derived, order-preserving view of items passing the filter.
    pub fn filter(&self, filter: ChecklistFilter) -> Vec<ChecklistItem> {
        self.items
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect()
    }

    /// Filtered items grouped by section, empty sections omitted.
    pub fn grouped(&self, filter: ChecklistFilter) -> Vec<SectionGroup> {
        group_by_section(&self.filter(filter))
    }

    /// Completion statistics over the full collection.
    pub fn stats(&self) -> ChecklistStats {
        ChecklistStats::from_items(&self.items)
    }

    /// Number of items on the board.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the board holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
