// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! Colors are CSS color strings, handed to the host renderer as-is.

// ============================================================================
// REGIONS -- Area and underline highlight boxes
// ============================================================================
// Used when a highlight has no color of its own
const REGION_DEFAULT_COLOR: &str = "rgba(0, 0, 255, 0.7)";
// Alpha of the area fill when the highlight color is opaque
const REGION_AREA_FILL_ALPHA: f64 = 0.3;
const REGION_BORDER_WIDTH: f64 = 1.0;
// The highlight the view last scrolled to
const REGION_SCROLLED_TO_COLOR: &str = "#ff4141";

// ============================================================================
// RESIZE HANDLES
// ============================================================================
const HANDLE_HIT_RADIUS: f64 = 6.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Highlight region styling
pub mod region {
    pub const DEFAULT_COLOR: &str = super::REGION_DEFAULT_COLOR;
    pub const AREA_FILL_ALPHA: f64 = super::REGION_AREA_FILL_ALPHA;
    pub const BORDER_WIDTH: f64 = super::REGION_BORDER_WIDTH;
    pub const SCROLLED_TO_COLOR: &str = super::REGION_SCROLLED_TO_COLOR;
}

/// Resize handle hit testing
pub mod handle {
    pub const HIT_RADIUS: f64 = super::HANDLE_HIT_RADIUS;
}
