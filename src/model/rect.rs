// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Rectangles in the two coordinate families.
//!
//! `PageRect` is left/top/width/height in viewport pixels, relative to the
//! page's own origin. `ScaledRect` is the persisted corner form whose
//! meaning depends on the owning position's `use_pdf_coordinates` flag:
//! either a fraction of the recorded `width`/`height`, or raw page-space
//! units.

use crate::error::LegacyFormatError;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

// ============================================================================
// PAGE RECT (viewport pixels)
// ============================================================================

/// A pixel rectangle on one page for the current render pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// 1-based page number
    pub page_number: u32,
}

impl PageRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64, page_number: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            page_number,
        }
    }

    /// Build from a kurbo rect, normalizing so width and height are
    /// non-negative.
    pub fn from_rect(rect: Rect, page_number: u32) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height(), page_number)
    }

    /// The same rectangle as a kurbo rect (y grows downward).
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Shift by `offset`, keeping size and page.
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            left: self.left + offset.x,
            top: self.top + offset.y,
            ..*self
        }
    }

    /// Component-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &PageRect, epsilon: f64) -> bool {
        self.page_number == other.page_number
            && (self.left - other.left).abs() <= epsilon
            && (self.top - other.top).abs() <= epsilon
            && (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
    }
}

// ============================================================================
// SCALED RECT (persisted)
// ============================================================================

/// A resolution-independent rectangle as persisted.
///
/// Corners are optional only so the old bounding-box-only shape can be
/// read and rejected; every rect built by this crate has all four.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledRect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<f64>,
    /// Page render width at capture time (ratio denominator)
    pub width: f64,
    /// Page render height at capture time (ratio denominator)
    pub height: f64,
    /// 1-based page number
    pub page_number: u32,
}

impl ScaledRect {
    pub fn new(p0: Point, p1: Point, width: f64, height: f64, page_number: u32) -> Self {
        Self {
            x1: Some(p0.x),
            y1: Some(p0.y),
            x2: Some(p1.x),
            y2: Some(p1.y),
            width,
            height,
            page_number,
        }
    }

    /// Both corners, or `LegacyFormatError` if the rect predates the
    /// corner format.
    pub fn corners(&self) -> Result<(Point, Point), LegacyFormatError> {
        match (self.x1, self.y1, self.x2, self.y2) {
            (Some(x1), Some(y1), Some(x2), Some(y2)) => {
                Ok((Point::new(x1, y1), Point::new(x2, y2)))
            }
            _ => Err(LegacyFormatError {
                page_number: self.page_number,
            }),
        }
    }

    /// True when this rect is in the old bounding-box-only shape.
    pub fn is_legacy(&self) -> bool {
        self.corners().is_err()
    }
}
