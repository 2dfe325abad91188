//! To-do item domain model.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another item.
//! - `category_uuid` always points at the owning category.
//! - `done` starts as `false`; `created_at` is set once at creation.

use crate::model::category::CategoryId;
use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an item.
pub type ItemId = Uuid;

/// A single to-do entry belonging to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable global id.
    pub uuid: ItemId,
    /// Owning category back-reference.
    pub category_uuid: CategoryId,
    /// User-entered title. Empty input is accepted as an empty-string record.
    pub title: String,
    /// Done flag toggled from the list screen.
    pub done: bool,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
}

impl Item {
    /// Creates an item with a generated id, `done=false` and the current
    /// timestamp.
    pub fn new(category_uuid: CategoryId, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), category_uuid, title)
    }

    /// Creates an item with a caller-provided stable id.
    pub fn with_id(uuid: ItemId, category_uuid: CategoryId, title: impl Into<String>) -> Self {
        Self {
            uuid,
            category_uuid,
            title: title.into(),
            done: false,
            created_at: now_epoch_ms(),
        }
    }

    /// Flips the done flag in place.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}
