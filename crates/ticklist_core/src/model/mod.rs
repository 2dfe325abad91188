//! Domain model for the two list aggregates.
//!
//! # Responsibility
//! - Define the canonical category and item records used by core logic.
//! - Provide creation-time defaults (ids, timestamps, done flag).
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - An item always carries the id of exactly one owning category.
//! - A category's `color_hex` must stay parseable; write paths validate it.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod category;
pub mod item;

/// Current wall-clock time in epoch milliseconds.
///
/// Falls back to 0 when the system clock reports a pre-epoch time instead of
/// panicking inside model constructors.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
