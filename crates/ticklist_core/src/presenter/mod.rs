//! List presenters for the two screens.
//!
//! # Responsibility
//! - Bind a store's current result set to renderable rows.
//! - Translate user gestures (tap, swipe, text entry) into store operations.
//! - Re-query after every mutation so the visible rows track storage.
//!
//! # Invariants
//! - Data flows one direction per interaction: gesture, store mutation,
//!   re-query, re-render.
//! - Row visual weight is a pure function of position and the category base
//!   color; it is recomputed on every render and never persisted.
//! - A storage write failure is logged and followed by a best-effort reload;
//!   display state is otherwise left unchanged.

use crate::model::category::{CategoryId, CategoryValidationError};
use crate::repo::RepoError;
use crate::theme::color::{contrast_on, ColorParseError, Rgb};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category_list;
pub mod item_list;

/// Screen list state machine.
///
/// `Empty` means no backing result set has been queried yet; `Loaded` holds
/// the full (possibly zero-length) result set; `Filtered` narrows it by a
/// search term with the alternate sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Empty,
    Loaded,
    Filtered { term: String },
}

/// Background/foreground pair for one rendered row or bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTheme {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl RowTheme {
    /// Theme for a base color with a contrast-picked foreground.
    pub fn for_base(base: Rgb) -> Self {
        Self {
            background: base,
            foreground: contrast_on(base),
        }
    }
}

/// Navigation-bar colors restored when no category drives the chrome, e.g.
/// when leaving the item screen.
pub fn default_bar_theme() -> RowTheme {
    RowTheme::for_base(crate::theme::color::DEFAULT_BAR_COLOR)
}

/// Row shade as a pure function of position: the base color darkened by
/// `index / count`, with a contrasting foreground.
pub fn row_theme(base: Rgb, index: usize, count: usize) -> RowTheme {
    let fraction = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    };
    RowTheme::for_base(base.darken(fraction))
}

/// Non-recoverable presenter error terminating the current screen.
///
/// Storage write failures are not represented here; presenters log those and
/// keep going (see module invariants).
#[derive(Debug)]
pub enum PresenterError {
    /// Navigation context references a category that no longer exists.
    MissingCategory(CategoryId),
    /// A persisted color failed to parse.
    Theme(ColorParseError),
    /// The backing store failed on a read path.
    Store(RepoError),
}

impl Display for PresenterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCategory(id) => write!(f, "category not found: {id}"),
            Self::Theme(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingCategory(_) => None,
            Self::Theme(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RepoError> for PresenterError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(CategoryValidationError::InvalidColor { source, .. }) => {
                Self::Theme(source)
            }
            other => Self::Store(other),
        }
    }
}
