//! Normalized colors for fixed primitive attributes

use serde::{Deserialize, Serialize};

use crate::mapping::ConstantMapping;
use crate::role::ScalarRole;

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB (alpha = 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 0-255 channel values
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from hex string (e.g., "#FF5733" or "FF5733")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;

        Some(Self::from_rgb8(r, g, b))
    }

    /// Fixed red, green and blue values for a drawn primitive.
    ///
    /// Only the three color channels become fixed attributes. `a` is
    /// ignored, so a translucent color draws the same as its opaque form.
    pub fn to_constant_mappings(&self) -> Vec<ConstantMapping> {
        vec![
            ConstantMapping::new(self.r as f64, ScalarRole::Red),
            ConstantMapping::new(self.g as f64, ScalarRole::Green),
            ConstantMapping::new(self.b as f64, ScalarRole::Blue),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
}
