// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Highlight colors.
//!
//! Colors are kept as the CSS string the user picked so they round-trip
//! unchanged through persistence. They are parsed with peniko's CSS color
//! parser only when a derived color (the area fill) is needed.

use crate::theme;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The color of a highlight, as a CSS color string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightColor(String);

impl HighlightColor {
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as an sRGB color. Any CSS color syntax is accepted (hex,
    /// named, `rgb()` with commas or spaces, `hsl()`, ...).
    pub fn parse(&self) -> Option<Color> {
        match parse_color(self.0.trim()) {
            Ok(color) => Some(color.to_alpha_color::<Srgb>()),
            Err(err) => {
                tracing::debug!("Unparseable highlight color {:?}: {:?}", self.0, err);
                None
            }
        }
    }

    /// Fill color for an area region.
    ///
    /// A fully opaque color gets the theme's area fill alpha and is
    /// rendered as `rgba(...)`. A color that is already translucent is used
    /// as-is, and so is anything that cannot be parsed.
    pub fn translucent_fill(&self) -> String {
        match self.parse() {
            Some(color) if color.components[3] >= 1.0 => {
                to_css(color.with_alpha(theme::region::AREA_FILL_ALPHA as f32))
            }
            _ => self.0.clone(),
        }
    }
}

fn to_css(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("rgba({}, {}, {}, {})", rgba.r, rgba.g, rgba.b, color.components[3])
}

impl Default for HighlightColor {
    fn default() -> Self {
        Self::new(theme::region::DEFAULT_COLOR)
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HighlightColor {
    fn from(css: &str) -> Self {
        Self::new(css)
    }
}
