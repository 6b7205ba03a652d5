// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! The document renderer as seen by the geometry subsystem.
//!
//! The renderer owns page layout. This crate only reads it, and treats
//! whatever it reads as valid for the current event only: zooming or
//! scrolling can move every page between two events.

use crate::coords::{PageViewport, ViewportLookup};
use crate::error::{GeometryError, Result};
use crate::model::PageRect;
use crate::snapshot::Snapshot;
use image::RgbaImage;
use kurbo::{Point, Rect, Vec2};

/// What to resolve to a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageTarget {
    /// A container-relative point
    Point(Point),
    /// A page already known by number
    Page(u32),
}

/// A page's place in the container and its current render state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_number: u32,
    /// Offset of the page's top-left corner within the container
    pub origin: Vec2,
    pub viewport: PageViewport,
}

impl PageGeometry {
    /// The page box in container coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin.to_point(), self.viewport.size())
    }
}

/// Page lookup, raster capture and page-space transforms
pub trait PageLayout: ViewportLookup {
    /// Resolve a point or page number to the page and its geometry.
    fn locate_page(&self, target: PageTarget) -> Option<PageGeometry>;

    /// Capture the pixels of `rect` (page-local) on its page, as currently
    /// rendered.
    fn capture_region(&self, rect: &PageRect) -> Result<Snapshot>;

    /// Map page-space points to device pixels for `page_number`.
    fn convert_page_space_to_device(
        &self,
        points: &[Point],
        page_number: u32,
    ) -> Result<Vec<Point>> {
        let viewport = self
            .viewport(page_number)
            .ok_or(GeometryError::UnknownPage(page_number))?;
        Ok(points.iter().map(|&p| viewport.page_to_device(p)).collect())
    }
}

// ============================================================================
// STACKED LAYOUT
// ============================================================================

/// One page of a [`StackedLayout`]
#[derive(Debug, Clone)]
pub struct StackedPage {
    pub viewport: PageViewport,
    /// Rendered pixels, if the page has been rasterized
    pub raster: Option<RgbaImage>,
}

/// Pages stacked top to bottom in a scroll container, separated by a gap,
/// each horizontally offset by the same margin.
///
/// This is the layout a continuous-scroll viewer produces. It is enough to
/// drive the gesture and editor state machines without a real renderer.
#[derive(Debug, Clone, Default)]
pub struct StackedLayout {
    pages: Vec<StackedPage>,
    margin: f64,
    gap: f64,
}

impl StackedLayout {
    pub fn new(margin: f64, gap: f64) -> Self {
        Self {
            pages: Vec::new(),
            margin,
            gap,
        }
    }

    /// Append a page; returns its 1-based number.
    pub fn push_page(&mut self, viewport: PageViewport, raster: Option<RgbaImage>) -> u32 {
        self.pages.push(StackedPage { viewport, raster });
        self.pages.len() as u32
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Replace a page's viewport (and raster), as after a zoom.
    pub fn set_page(
        &mut self,
        page_number: u32,
        viewport: PageViewport,
        raster: Option<RgbaImage>,
    ) -> Result<()> {
        let page = self
            .page_mut(page_number)
            .ok_or(GeometryError::UnknownPage(page_number))?;
        *page = StackedPage { viewport, raster };
        Ok(())
    }

    fn page(&self, page_number: u32) -> Option<&StackedPage> {
        self.pages.get((page_number as usize).checked_sub(1)?)
    }

    fn page_mut(&mut self, page_number: u32) -> Option<&mut StackedPage> {
        self.pages.get_mut((page_number as usize).checked_sub(1)?)
    }

    /// Geometry of every page, top to bottom.
    fn geometries(&self) -> impl Iterator<Item = PageGeometry> + '_ {
        let mut y = self.gap;
        self.pages.iter().enumerate().map(move |(index, page)| {
            let geometry = PageGeometry {
                page_number: index as u32 + 1,
                origin: Vec2::new(self.margin, y),
                viewport: page.viewport,
            };
            y += page.viewport.height + self.gap;
            geometry
        })
    }
}

impl ViewportLookup for StackedLayout {
    fn viewport(&self, page_number: u32) -> Option<PageViewport> {
        self.page(page_number).map(|page| page.viewport)
    }
}

impl PageLayout for StackedLayout {
    fn locate_page(&self, target: PageTarget) -> Option<PageGeometry> {
        match target {
            PageTarget::Page(number) => self.geometries().find(|g| g.page_number == number),
            PageTarget::Point(point) => self.geometries().find(|g| g.bounds().contains(point)),
        }
    }

    fn capture_region(&self, rect: &PageRect) -> Result<Snapshot> {
        let page = self
            .page(rect.page_number)
            .ok_or(GeometryError::UnknownPage(rect.page_number))?;
        let raster = page.raster.as_ref().ok_or_else(|| GeometryError::Capture {
            page_number: rect.page_number,
            reason: "page has not been rendered".to_string(),
        })?;
        let ratio = |pixels: u32, extent: f64| {
            if extent > 0.0 { f64::from(pixels) / extent } else { 1.0 }
        };
        let pixel_ratio = Vec2::new(
            ratio(raster.width(), page.viewport.width),
            ratio(raster.height(), page.viewport.height),
        );
        Snapshot::crop(raster, rect, pixel_ratio)
    }
}
