// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Interaction settings and configuration constants.
//!
//! This module holds non-visual settings: gesture thresholds and the
//! geometric constraints applied to regions. Visual styling (colors, border
//! widths) belongs in `theme.rs`.
//!
//! The constants below are the defaults. A host can override them at
//! runtime by loading a [`Settings`] value from TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// GESTURE SETTINGS
// ============================================================================
/// Distance the pointer must travel from the down point before a press
/// becomes a drag (pixels)
const DRAG_THRESHOLD: f64 = 5.0;

/// A finished selection narrower or shorter than this is treated as a click
/// (pixels)
const MIN_SELECTION_SIZE: f64 = 1.0;

// ============================================================================
// UNDERLINE SETTINGS
// ============================================================================
/// Rendered thickness of an underline region (pixels)
const UNDERLINE_THICKNESS: f64 = 3.0;

// ============================================================================
// REGION EDITOR SETTINGS
// ============================================================================
/// Smallest width or height a resize may produce (pixels)
const MIN_REGION_SIZE: f64 = 1.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Area-selection gesture settings
pub mod gesture {
    /// Drag threshold in pixels
    pub const DRAG_THRESHOLD: f64 = super::DRAG_THRESHOLD;

    /// Drag threshold squared, so the hot path avoids a square root
    pub const DRAG_THRESHOLD_SQUARED: f64 = super::DRAG_THRESHOLD * super::DRAG_THRESHOLD;

    /// Minimum width/height of a selection that is kept
    pub const MIN_SELECTION_SIZE: f64 = super::MIN_SELECTION_SIZE;
}

/// Underline region settings
pub mod underline {
    /// Fixed bar thickness in pixels
    pub const THICKNESS: f64 = super::UNDERLINE_THICKNESS;
}

/// Region editor settings
pub mod editor {
    /// Minimum size a resize can shrink a region to
    pub const MIN_REGION_SIZE: f64 = super::MIN_REGION_SIZE;
}

// ============================================================================
// RUNTIME SETTINGS
// ============================================================================

/// Runtime-overridable settings.
///
/// Every field falls back to the compile-time default when absent, so a
/// TOML file only needs to list what it changes:
///
/// ```toml
/// drag_threshold = 8.0
/// underline_thickness = 2.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixels of travel before a press becomes a drag
    pub drag_threshold: f64,
    /// Minimum width/height of a kept selection
    pub min_selection_size: f64,
    /// Underline bar thickness
    pub underline_thickness: f64,
    /// Minimum width/height a resize may produce
    pub min_region_size: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drag_threshold: gesture::DRAG_THRESHOLD,
            min_selection_size: gesture::MIN_SELECTION_SIZE,
            underline_thickness: underline::THICKNESS,
            min_region_size: editor::MIN_REGION_SIZE,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(source).context("Failed to parse settings")?;
        tracing::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Load settings from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading settings from: {}", path.display());
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_toml_str(&source)
    }

    /// Squared drag threshold used by the gesture state machine.
    pub fn drag_threshold_squared(&self) -> f64 {
        self.drag_threshold * self.drag_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.drag_threshold, 5.0);
        assert_eq!(settings.drag_threshold_squared(), gesture::DRAG_THRESHOLD_SQUARED);
        assert_eq!(settings.drag_threshold_squared(), 25.0);
        assert_eq!(settings.underline_thickness, 3.0);
        assert_eq!(settings.min_selection_size, 1.0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let settings = Settings::from_toml_str("drag_threshold = 8.0").unwrap();
        assert_eq!(settings.drag_threshold, 8.0);
        assert_eq!(settings.underline_thickness, underline::THICKNESS);
    }

    #[test]
    fn empty_toml_is_default() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Settings::from_toml_str("drag_threshold = \"far\"").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load(Path::new("/nonexistent/pagemark.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }
}
