//! List color theming.
//!
//! # Responsibility
//! - Parse and render the six-digit hex colors stored on categories.
//! - Compute derived row colors (position darkening, contrast foreground).
//! - Assign random flat-palette colors to new categories.

pub mod color;
pub mod palette;
