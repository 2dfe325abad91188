//! Flat-UI palette backing random category color assignment.
//!
//! # Invariants
//! - Every palette entry is a valid six-digit hex code in stored form.

use crate::theme::color::DEFAULT_BAR_COLOR_HEX;
use rand::seq::SliceRandom;

/// Candidate colors for new categories, in stored `color_hex` form.
pub const FLAT_PALETTE: &[&str] = &[
    "E74C3C", // alizarin
    "C0392B", // pomegranate
    "E67E22", // carrot
    "D35400", // pumpkin
    "F1C40F", // sunflower
    "F39C12", // orange
    "2ECC71", // emerald
    "27AE60", // nephritis
    "1ABC9C", // turquoise
    "16A085", // green sea
    "3498DB", // peter river
    "2980B9", // belize hole
    "9B59B6", // amethyst
    "8E44AD", // wisteria
    "34495E", // wet asphalt
    "2C3E50", // midnight blue
    "95A5A6", // concrete
    "7F8C8D", // asbestos
];

/// Picks a uniformly random palette entry for a new category.
pub fn random_flat_hex() -> String {
    FLAT_PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEFAULT_BAR_COLOR_HEX)
        .to_string()
}
