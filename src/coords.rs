// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Conversion between scaled (persisted) and viewport (on-screen) rects.
//!
//! Everything here is a pure function of its inputs. A scaled rect in ratio
//! mode records the page's render size at capture time in `width`/`height`;
//! projecting it onto another viewport is a linear rescale. In pdf mode the
//! corners are page-space units and go through the viewport's page-to-device
//! affine instead, which also flips the y axis.

use crate::error::{GeometryError, LegacyFormatError, Result};
use crate::model::{PageRect, Position, ScaledRect, ViewportPosition};
use kurbo::{Affine, Point, Rect, Size};

// ============================================================================
// PAGE VIEWPORT
// ============================================================================

/// The render state of one page: its pixel size and the affine that maps
/// page-space units to device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageViewport {
    pub width: f64,
    pub height: f64,
    /// Page space to device space
    pub transform: Affine,
}

impl PageViewport {
    /// A viewport whose page space is already device space.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            transform: Affine::IDENTITY,
        }
    }

    /// Viewport for an unrotated page of `page_size` units rendered at
    /// `scale` pixels per unit. Page space has its origin at the bottom-left
    /// with y pointing up, so the transform flips y.
    pub fn from_page_size(page_size: Size, scale: f64) -> Self {
        Self {
            width: page_size.width * scale,
            height: page_size.height * scale,
            transform: Affine::new([scale, 0.0, 0.0, -scale, 0.0, page_size.height * scale]),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Map a page-space point to device pixels.
    pub fn page_to_device(&self, point: Point) -> Point {
        self.transform * point
    }
}

/// Resolves a page number to its current viewport.
pub trait ViewportLookup {
    fn viewport(&self, page_number: u32) -> Option<PageViewport>;
}

/// Pages in order; page `n` is at index `n - 1`.
impl ViewportLookup for [PageViewport] {
    fn viewport(&self, page_number: u32) -> Option<PageViewport> {
        let index = usize::try_from(page_number).ok()?.checked_sub(1)?;
        self.get(index).copied()
    }
}

impl ViewportLookup for Vec<PageViewport> {
    fn viewport(&self, page_number: u32) -> Option<PageViewport> {
        self.as_slice().viewport(page_number)
    }
}

// ============================================================================
// SINGLE RECT
// ============================================================================

/// Convert a viewport rect to its scaled form against `page_size`, the
/// page's current render size.
pub fn to_scaled(rect: &PageRect, page_size: Size) -> ScaledRect {
    ScaledRect::new(
        Point::new(rect.left, rect.top),
        Point::new(rect.left + rect.width, rect.top + rect.height),
        page_size.width,
        page_size.height,
        rect.page_number,
    )
}

/// Project a scaled rect onto `viewport`.
///
/// Fails with [`LegacyFormatError`] if the rect has no corners; nothing is
/// partially converted in that case.
pub fn to_viewport(
    scaled: &ScaledRect,
    viewport: &PageViewport,
    use_pdf_coordinates: bool,
) -> Result<PageRect, LegacyFormatError> {
    let (p1, p2) = scaled.corners()?;

    if use_pdf_coordinates {
        return Ok(pdf_to_viewport(p1, p2, viewport, scaled.page_number));
    }

    let x1 = viewport.width * p1.x / scaled.width;
    let y1 = viewport.height * p1.y / scaled.height;
    let x2 = viewport.width * p2.x / scaled.width;
    let y2 = viewport.height * p2.y / scaled.height;

    Ok(PageRect::new(x1, y1, x2 - x1, y2 - y1, scaled.page_number))
}

/// Page-space corners through the viewport affine, normalized so the rect
/// has a top-left origin and non-negative size.
fn pdf_to_viewport(p1: Point, p2: Point, viewport: &PageViewport, page_number: u32) -> PageRect {
    let d1 = viewport.page_to_device(p1);
    let d2 = viewport.page_to_device(p2);
    PageRect::from_rect(Rect::from_points(d1, d2), page_number)
}

// ============================================================================
// WHOLE POSITION
// ============================================================================

fn viewport_for(lookup: &(impl ViewportLookup + ?Sized), page_number: u32) -> Result<PageViewport> {
    lookup
        .viewport(page_number)
        .ok_or(GeometryError::UnknownPage(page_number))
}

/// Convert a viewport position to its persisted form.
///
/// Every rect is scaled against its own page's viewport, so a position
/// spanning pages rendered at different sizes converts correctly.
pub fn position_to_scaled(
    position: &ViewportPosition,
    lookup: &(impl ViewportLookup + ?Sized),
) -> Result<Position> {
    let scale = |rect: &PageRect| -> Result<ScaledRect> {
        let viewport = viewport_for(lookup, rect.page_number)?;
        Ok(to_scaled(rect, viewport.size()))
    };

    Ok(Position {
        bounding_rect: scale(&position.bounding_rect)?,
        rects: position.rects.iter().map(scale).collect::<Result<_>>()?,
        use_pdf_coordinates: false,
    })
}

/// Project a persisted position onto the current layout.
pub fn position_to_viewport(
    position: &Position,
    lookup: &(impl ViewportLookup + ?Sized),
) -> Result<ViewportPosition> {
    let project = |rect: &ScaledRect| -> Result<PageRect> {
        let viewport = viewport_for(lookup, rect.page_number)?;
        Ok(to_viewport(rect, &viewport, position.use_pdf_coordinates)?)
    };

    Ok(ViewportPosition {
        bounding_rect: project(&position.bounding_rect)?,
        rects: position.rects.iter().map(project).collect::<Result<_>>()?,
    })
}
