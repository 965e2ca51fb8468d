//! Per-checklist completion tracking.

use crate::catalog::Checklist;
use crate::constants::CHECKLISTS_KEY;
use crate::models::UserRole;
use crate::store::PersistentStore;
use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Checklist id to completed item ids, as stored.
pub type ProgressMap = BTreeMap<String, Vec<String>>;

/// Completed and total visible item counts for one checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Visible items marked complete
    pub completed: usize,
    /// Items visible to the viewer's role
    pub total: usize,
}

impl Progress {
    /// Whole-number percentage; 0 when nothing is visible.
    #[must_use]
    pub const fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.completed * 100 / self.total
        }
    }
}

/// Tracks which checklist items have been ticked off.
#[derive(Debug, Clone)]
pub struct ChecklistProgressTracker {
    store: PersistentStore,
}

impl ChecklistProgressTracker {
    /// Creates a tracker over the shared store.
    #[must_use]
    pub const fn new(store: PersistentStore) -> Self {
        Self { store }
    }

    /// All recorded progress, with duplicate ids collapsed.
    #[must_use]
    pub fn all(&self) -> ProgressMap {
        let mut map: ProgressMap = self.store.read(CHECKLISTS_KEY, ProgressMap::new());
        for ids in map.values_mut() {
            dedupe(ids);
        }
        map
    }

    /// Completed item ids for one checklist.
    #[must_use]
    pub fn completed(&self, checklist_id: &str) -> BTreeSet<String> {
        self.all()
            .remove(checklist_id)
            .unwrap_or_default()
            .into_iter()
            .collect()
    }

    /// Whether `item_id` is complete in `checklist_id`.
    #[must_use]
    pub fn is_completed(&self, checklist_id: &str, item_id: &str) -> bool {
        self.completed(checklist_id).contains(item_id)
    }

    /// Flips membership of `item_id` in the checklist's completed set.
    ///
    /// Returns whether the item is complete afterwards.
    pub fn toggle_item(&self, checklist_id: &str, item_id: &str) -> Result<bool> {
        let mut now_complete = false;
        self.store
            .update(CHECKLISTS_KEY, ProgressMap::new(), |mut map| {
                let ids = map.entry(checklist_id.to_string()).or_default();
                dedupe(ids);
                if let Some(pos) = ids.iter().position(|id| id == item_id) {
                    ids.remove(pos);
                } else {
                    ids.push(item_id.to_string());
                    now_complete = true;
                }
                if ids.is_empty() {
                    map.remove(checklist_id);
                }
                map
            })?;
        debug!(checklist_id, item_id, now_complete, "Toggled checklist item");
        Ok(now_complete)
    }

    /// Completion for `checklist` as seen by `role`.
    ///
    /// Professional-only items count only for professionals, both in the
    /// total and in the completed count. Ids that are not part of the
    /// checklist are ignored.
    #[must_use]
    pub fn completion_ratio(&self, checklist: &Checklist, role: Option<UserRole>) -> Progress {
        let done = self.completed(&checklist.id);
        let mut progress = Progress {
            completed: 0,
            total: 0,
        };
        for item in checklist.visible_items(role) {
            progress.total += 1;
            if done.contains(&item.id) {
                progress.completed += 1;
            }
        }
        progress
    }

    /// Forgets all progress for one checklist.
    pub fn reset(&self, checklist_id: &str) -> Result<()> {
        self.store
            .update(CHECKLISTS_KEY, ProgressMap::new(), |mut map| {
                map.remove(checklist_id);
                map
            })
            .map(drop)
    }
}

fn dedupe(ids: &mut Vec<String>) {
    let mut seen = BTreeSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}
