// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Positions: a bounding rect plus optional per-line sub-rects.

use super::rect::{PageRect, ScaledRect};
use serde::{Deserialize, Serialize};

/// The persisted position of a highlight.
///
/// `rects` holds per-line sub-rects for text regions and is empty for
/// area and underline regions. Each sub-rect names its own page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub bounding_rect: ScaledRect,
    #[serde(default)]
    pub rects: Vec<ScaledRect>,
    /// Corners are raw page-space units instead of ratios
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_pdf_coordinates: bool,
}

impl Position {
    /// A ratio-mode position with no sub-rects.
    pub fn from_bounding_rect(bounding_rect: ScaledRect) -> Self {
        Self {
            bounding_rect,
            rects: Vec::new(),
            use_pdf_coordinates: false,
        }
    }

    /// Page of the bounding rect.
    pub fn page_number(&self) -> u32 {
        self.bounding_rect.page_number
    }
}

/// A position projected onto the current render pass.
///
/// Derived from a [`Position`] and invalid as soon as the page layout
/// changes; recompute it rather than caching it across renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportPosition {
    pub bounding_rect: PageRect,
    pub rects: Vec<PageRect>,
}

impl ViewportPosition {
    /// A position with no sub-rects, as produced by area selection.
    pub fn from_bounding_rect(bounding_rect: PageRect) -> Self {
        Self {
            bounding_rect,
            rects: Vec::new(),
        }
    }

    pub fn page_number(&self) -> u32 {
        self.bounding_rect.page_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn missing_rects_default_to_empty() {
        let json = r#"{
            "boundingRect": {
                "x1": 0, "y1": 0, "x2": 1, "y2": 1,
                "width": 1, "height": 1, "pageNumber": 1
            }
        }"#;
        let position: Position = serde_json::from_str(json).unwrap();
        assert!(position.rects.is_empty());
        assert!(!position.use_pdf_coordinates);
    }

    #[test]
    fn ratio_mode_omits_the_pdf_flag() {
        let rect = ScaledRect::new(Point::ZERO, Point::new(1.0, 1.0), 1.0, 1.0, 1);
        let json = serde_json::to_value(Position::from_bounding_rect(rect)).unwrap();
        assert!(json.get("usePdfCoordinates").is_none());
        assert!(json.get("boundingRect").is_some());
    }
}
