//! Familiarity color palettes
//!
//! Supplied by the preferences layer; the core never validates the color
//! values, it only guarantees all three level keys exist so every tagged
//! run has a renderable style.

use crate::spans::highlight::FamiliarityLevel;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Display color per familiarity level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    #[serde(rename = "not-familiar")]
    pub not_familiar: String,

    #[serde(rename = "somewhat-familiar")]
    pub somewhat_familiar: String,

    #[serde(rename = "familiar")]
    pub familiar: String,
}

impl ColorPalette {
    pub fn new(not_familiar: &str, somewhat_familiar: &str, familiar: &str) -> Self {
        Self {
            not_familiar: not_familiar.to_string(),
            somewhat_familiar: somewhat_familiar.to_string(),
            familiar: familiar.to_string(),
        }
    }

    /// The color for a level
    pub fn color_for(&self, level: FamiliarityLevel) -> &str {
        match level {
            FamiliarityLevel::NotFamiliar => &self.not_familiar,
            FamiliarityLevel::SomewhatFamiliar => &self.somewhat_familiar,
            FamiliarityLevel::Familiar => &self.familiar,
        }
    }
}

/// Standard palette (red / yellow / green)
pub static DEFAULT_PALETTE: Lazy<ColorPalette> =
    Lazy::new(|| ColorPalette::new("#FF6B6B", "#FFD93D", "#6BCF7F"));

/// Colorblind-friendly palette (Okabe-Ito hues)
pub static COLORBLIND_PALETTE: Lazy<ColorPalette> =
    Lazy::new(|| ColorPalette::new("#0173B2", "#DE8F05", "#029E73"));

/// High-contrast grayscale palette for low vision
pub static HIGH_CONTRAST_PALETTE: Lazy<ColorPalette> =
    Lazy::new(|| ColorPalette::new("#000000", "#555555", "#AAAAAA"));

/// Dyslexia-friendly palette with muted saturation
pub static DYSLEXIA_PALETTE: Lazy<ColorPalette> =
    Lazy::new(|| ColorPalette::new("#E63946", "#F4A261", "#2A9D8F"));

/// Resolve a palette from a user's accessibility need
///
/// Unknown needs fall back to the default palette.
pub fn palette_for_need(need: &str) -> &'static ColorPalette {
    match need {
        "colorblind" => &COLORBLIND_PALETTE,
        "dyslexia" => &DYSLEXIA_PALETTE,
        "low-vision" => &HIGH_CONTRAST_PALETTE,
        _ => &DEFAULT_PALETTE,
    }
}
