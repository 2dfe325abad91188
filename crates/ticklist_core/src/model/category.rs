//! Category domain model.
//!
//! # Responsibility
//! - Define the record backing the category list screen.
//! - Validate the assigned list color before persistence.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another category.
//! - `color_hex` is six hex digits and must parse; the original app treated a
//!   broken color as fatal, here it surfaces as a typed validation error.
//! - Names are free text: not unique, empty allowed.

use crate::model::now_epoch_ms;
use crate::theme::color::{parse_hex, ColorParseError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a category.
pub type CategoryId = Uuid;

/// Validation error raised before category writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    /// `color_hex` does not parse as a six-digit hex color.
    InvalidColor {
        value: String,
        source: ColorParseError,
    },
}

impl Display for CategoryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColor { value, source } => {
                write!(f, "invalid category color `{value}`: {source}")
            }
        }
    }
}

impl Error for CategoryValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidColor { source, .. } => Some(source),
        }
    }
}

/// A named list of to-do items with an assigned base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable global id.
    pub uuid: CategoryId,
    /// User-entered display name. Not guaranteed unique.
    pub name: String,
    /// Six hex digits without a leading `#`, e.g. `1D9BF6`.
    pub color_hex: String,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
}

impl Category {
    /// Creates a category with a generated id and the current timestamp.
    pub fn new(name: impl Into<String>, color_hex: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, color_hex)
    }

    /// Creates a category with a caller-provided stable id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        uuid: CategoryId,
        name: impl Into<String>,
        color_hex: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            color_hex: color_hex.into(),
            created_at: now_epoch_ms(),
        }
    }

    /// Checks the invariants repositories enforce before SQL mutations.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if let Err(source) = parse_hex(&self.color_hex) {
            return Err(CategoryValidationError::InvalidColor {
                value: self.color_hex.clone(),
                source,
            });
        }
        Ok(())
    }
}
