//! RGB color value with the small set of operations the list screens need.
//!
//! # Responsibility
//! - Parse the persisted `color_hex` form (six hex digits, optional `#`).
//! - Derive row backgrounds by darkening a base color per position.
//! - Pick a flat black/white foreground with enough contrast.
//!
//! # Invariants
//! - `parse_hex` and `to_hex` round-trip: the stored form is always
//!   six uppercase hex digits without a prefix.
//! - Darkening never leaves the `[0, 255]` channel range.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// Stored form of the navigation-bar fallback color the item screen restores
/// on exit.
pub const DEFAULT_BAR_COLOR_HEX: &str = "1D9BF6";

/// Parsed form of [`DEFAULT_BAR_COLOR_HEX`].
pub const DEFAULT_BAR_COLOR: Rgb = Rgb::new(0x1D, 0x9B, 0xF6);

/// Flat white used as foreground on dark backgrounds.
pub const FLAT_WHITE: Rgb = Rgb::new(0xEC, 0xF0, 0xF1);

/// Flat black used as foreground on light backgrounds.
pub const FLAT_BLACK: Rgb = Rgb::new(0x26, 0x26, 0x26);

/// Error type for hex color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Input is not exactly six hex digits (with optional leading `#`).
    #[error("expected six hex digits, got `{0}`")]
    InvalidHexCode(String),
}

/// Opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Renders the persisted form: six uppercase hex digits, no prefix.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Relative luminance in `[0.0, 1.0]` using Rec. 601 channel weights.
    pub fn luminance(self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)) / 255.0
    }

    /// Returns this color with its HSL lightness scaled down by `fraction`.
    ///
    /// `fraction` is clamped to `[0.0, 1.0]`; `0.0` is the identity and
    /// `1.0` yields black. Row weight on the item screen is
    /// `darken(index / count)` of the category base color.
    pub fn darken(self, fraction: f32) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, l * (1.0 - fraction))
    }

    fn to_hsl(self) -> (f32, f32, f32) {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + (if g < b { 6.0 } else { 0.0 })
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h * 60.0, s, l)
    }

    fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = (h % 360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            let channel = (l * 255.0).round() as u8;
            return Self::new(channel, channel, channel);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let to_channel = |value: f32| (value * 255.0).round() as u8;

        Self::new(
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

/// Parses the persisted `color_hex` form.
///
/// Accepts exactly six hex digits with an optional leading `#`. Anything else
/// is a [`ColorParseError`]; callers treat a broken persisted color as a
/// non-recoverable condition for the screen showing it.
pub fn parse_hex(value: &str) -> Result<Rgb, ColorParseError> {
    if !HEX_COLOR_RE.is_match(value) {
        return Err(ColorParseError::InvalidHexCode(value.to_string()));
    }

    let digits = value.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorParseError::InvalidHexCode(value.to_string()))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Flat black or white, whichever contrasts more with `background`.
pub fn contrast_on(background: Rgb) -> Rgb {
    if background.luminance() > 0.5 {
        FLAT_BLACK
    } else {
        FLAT_WHITE
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
