// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Moving and resizing an existing area or underline region.
//!
//! The editor shows one region as a box with resize handles and reports the
//! new viewport rect when a move or resize ends. It never owns the
//! region: the authoritative rect comes from the caller on every render via
//! [`RegionEditor::sync`], and any change to it throws away whatever the
//! user was in the middle of doing.
//!
//! An underline is drawn as a bar of fixed thickness along the bottom edge
//! of its rect. It can only be stretched sideways, and every rect it
//! reports has exactly that thickness.

use super::mouse::Drag;
use crate::error::{GeometryError, Result};
use crate::model::{HighlightColor, PageRect, RegionVariant};
use crate::page::{PageLayout, PageTarget};
use crate::settings::Settings;
use crate::theme;
use kurbo::{Point, Rect, Size};

// ============================================================================
// RESIZE HANDLE
// ============================================================================

/// Which handle the user is dragging for resize.
///
/// Corner handles move two edges, side handles one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// The only handles an underline has.
    pub const HORIZONTAL: [ResizeHandle; 2] = [Self::Left, Self::Right];

    /// True for corner handles.
    pub fn is_corner(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight)
    }

    fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft | Self::Left)
    }

    fn moves_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight | Self::Right)
    }

    fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight | Self::Top)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight | Self::Bottom)
    }

    /// Where this handle sits on `frame`.
    pub fn position(self, frame: Rect) -> Point {
        let cx = (frame.x0 + frame.x1) / 2.0;
        let cy = (frame.y0 + frame.y1) / 2.0;
        match self {
            Self::TopLeft => Point::new(frame.x0, frame.y0),
            Self::TopRight => Point::new(frame.x1, frame.y0),
            Self::BottomLeft => Point::new(frame.x0, frame.y1),
            Self::BottomRight => Point::new(frame.x1, frame.y1),
            Self::Top => Point::new(cx, frame.y0),
            Self::Bottom => Point::new(cx, frame.y1),
            Self::Left => Point::new(frame.x0, cy),
            Self::Right => Point::new(frame.x1, cy),
        }
    }
}

// ============================================================================
// STYLE
// ============================================================================

/// Border drawn around an area region
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub color: String,
    pub width: f64,
}

/// How the region box should be painted
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStyle {
    /// CSS fill color
    pub fill: String,
    pub border: Option<Border>,
}

// ============================================================================
// DELEGATE
// ============================================================================

/// Receives region edit notifications.
pub trait RegionEditDelegate {
    /// A move or resize started. Hosts use this to suspend anything that
    /// would fight the edit, such as scrolling to the highlight.
    fn on_edit_start(&mut self) {}

    /// A move or resize finished with this page-local rect.
    fn on_change(&mut self, _rect: PageRect) {}
}

impl RegionEditDelegate for () {}

// ============================================================================
// REGION EDITOR
// ============================================================================

/// Everything an external change is detected by
#[derive(Debug, Clone, PartialEq)]
struct GeometryKey {
    page_number: u32,
    frame: Rect,
    variant: RegionVariant,
    color: HighlightColor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Interaction {
    Idle,
    Moving { drag: Drag, frame_at_grab: Rect },
    Resizing { handle: ResizeHandle, drag: Drag, frame_at_grab: Rect },
}

/// Interactive box for one area or underline region
#[derive(Debug, Clone)]
pub struct RegionEditor {
    rect: PageRect,
    variant: RegionVariant,
    color: HighlightColor,
    settings: Settings,
    /// Page size the box must stay within, if constrained
    bounds: Option<Size>,
    scrolled_to: bool,
    key: GeometryKey,
    /// The box as currently shown, page-local
    frame: Rect,
    interaction: Interaction,
}

impl RegionEditor {
    /// Create an editor for a region whose viewport bounding rect is
    /// `rect`. Text regions are not editable.
    pub fn new(
        rect: PageRect,
        variant: RegionVariant,
        color: HighlightColor,
        settings: Settings,
    ) -> Result<Self> {
        if !variant.is_editable() {
            return Err(GeometryError::NotEditable(variant));
        }
        let key = geometry_key(&rect, variant, &color, &settings);
        Ok(Self {
            frame: key.frame,
            rect,
            variant,
            color,
            settings,
            bounds: None,
            scrolled_to: false,
            key,
            interaction: Interaction::Idle,
        })
    }

    /// Keep the box inside a page of `size` while moving or resizing.
    pub fn with_bounds(mut self, size: Size) -> Self {
        self.bounds = Some(size);
        self
    }

    /// Mark the region as the one the view has scrolled to.
    pub fn set_scrolled_to(&mut self, scrolled_to: bool) {
        self.scrolled_to = scrolled_to;
    }

    /// Re-read the authoritative geometry.
    ///
    /// If page, box, variant or color differ from what the editor last
    /// saw, any move or resize in progress is dropped and the box snaps to
    /// the new geometry. Returns whether that happened.
    pub fn sync(
        &mut self,
        rect: PageRect,
        variant: RegionVariant,
        color: HighlightColor,
    ) -> Result<bool> {
        if !variant.is_editable() {
            return Err(GeometryError::NotEditable(variant));
        }
        let key = geometry_key(&rect, variant, &color, &self.settings);
        if key == self.key {
            return Ok(false);
        }

        tracing::debug!("Region editor: geometry changed externally, resyncing to {:?}", rect);
        self.rect = rect;
        self.variant = variant;
        self.color = color;
        self.frame = key.frame;
        self.key = key;
        self.interaction = Interaction::Idle;
        Ok(true)
    }

    pub fn variant(&self) -> RegionVariant {
        self.variant
    }

    /// The authoritative rect the editor was last synced to.
    pub fn rect(&self) -> PageRect {
        self.rect
    }

    /// The box as currently shown (page-local), including any live move
    /// or resize.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self.interaction, Interaction::Idle)
    }

    pub fn style(&self) -> RegionStyle {
        let base = if self.scrolled_to {
            theme::region::SCROLLED_TO_COLOR.to_string()
        } else {
            self.color.to_string()
        };
        match self.variant {
            RegionVariant::Underline => RegionStyle {
                fill: base,
                border: None,
            },
            _ => RegionStyle {
                fill: HighlightColor::new(base.as_str()).translucent_fill(),
                border: Some(Border {
                    color: base,
                    width: theme::region::BORDER_WIDTH,
                }),
            },
        }
    }

    /// Handles that can be grabbed for this variant.
    pub fn enabled_handles(&self) -> &'static [ResizeHandle] {
        match self.variant {
            RegionVariant::Underline => &ResizeHandle::HORIZONTAL,
            _ => &ResizeHandle::ALL,
        }
    }

    pub fn handle_enabled(&self, handle: ResizeHandle) -> bool {
        self.enabled_handles().contains(&handle)
    }

    /// Hit-test a page-local point against the enabled handles. Corner
    /// handles are checked first (they take priority at overlaps).
    pub fn hit_test_handle(&self, point: Point, radius: f64) -> Option<ResizeHandle> {
        let radius_sq = radius * radius;
        let (corners, sides): (Vec<ResizeHandle>, Vec<ResizeHandle>) =
            self.enabled_handles().iter().copied().partition(|h| h.is_corner());

        corners.into_iter().chain(sides).find(|handle| {
            (point - handle.position(self.frame)).hypot2() <= radius_sq
        })
    }

    // ===== Move =====

    /// Grab the box body at `point` (page-local).
    pub fn drag_start<D>(&mut self, point: Point, delegate: &mut D)
    where
        D: RegionEditDelegate + ?Sized,
    {
        self.interaction = Interaction::Moving {
            drag: Drag::new(point, point),
            frame_at_grab: self.frame,
        };
        tracing::debug!("Region editor: move started at {:?}", point);
        delegate.on_edit_start();
    }

    pub fn drag_move(&mut self, point: Point) {
        if let Interaction::Moving { drag, frame_at_grab } = &mut self.interaction {
            drag.current = point;
            let moved = *frame_at_grab + drag.delta();
            self.frame = self.keep_inside(moved);
        }
    }

    /// Finish a move. The reported rect has the original size at the new
    /// position, on the same page.
    pub fn drag_stop<D>(&mut self, delegate: &mut D) -> Option<PageRect>
    where
        D: RegionEditDelegate + ?Sized,
    {
        let Interaction::Moving { .. } = self.interaction else {
            return None;
        };
        self.interaction = Interaction::Idle;

        let size = self.key.frame.size();
        let mut rect = PageRect::new(
            self.frame.x0,
            self.frame.y0,
            size.width,
            size.height,
            self.rect.page_number,
        );
        self.clamp_underline(&mut rect);

        tracing::debug!("Region editor: moved to {:?}", rect);
        delegate.on_change(rect);
        Some(rect)
    }

    // ===== Resize =====

    /// Grab `handle` at `point` (page-local). Returns false, and does
    /// nothing, if the handle is disabled for this variant.
    pub fn resize_start<D>(&mut self, handle: ResizeHandle, point: Point, delegate: &mut D) -> bool
    where
        D: RegionEditDelegate + ?Sized,
    {
        if !self.handle_enabled(handle) {
            tracing::debug!("Region editor: {:?} handle disabled for {:?}", handle, self.variant);
            return false;
        }
        self.interaction = Interaction::Resizing {
            handle,
            drag: Drag::new(point, point),
            frame_at_grab: self.frame,
        };
        tracing::debug!("Region editor: resize started with {:?}", handle);
        delegate.on_edit_start();
        true
    }

    pub fn resize_move(&mut self, point: Point) {
        let Interaction::Resizing {
            handle,
            drag,
            frame_at_grab,
        } = &mut self.interaction
        else {
            return;
        };
        drag.current = point;
        let delta = drag.delta();
        let handle = *handle;
        let min = self.settings.min_region_size;
        let Rect {
            mut x0,
            mut y0,
            mut x1,
            mut y1,
        } = *frame_at_grab;

        if handle.moves_left() {
            x0 = (x0 + delta.x).min(x1 - min);
        }
        if handle.moves_right() {
            x1 = (x1 + delta.x).max(x0 + min);
        }
        if handle.moves_top() {
            y0 = (y0 + delta.y).min(y1 - min);
        }
        if handle.moves_bottom() {
            y1 = (y1 + delta.y).max(y0 + min);
        }
        if let Some(bounds) = self.bounds {
            x0 = x0.max(0.0);
            y0 = y0.max(0.0);
            x1 = x1.min(bounds.width);
            y1 = y1.min(bounds.height);
        }

        self.frame = Rect::new(x0, y0, x1, y1);
    }

    /// Finish a resize. The reported rect is the box as drawn; its page is
    /// whichever page is under the box now, falling back to the original.
    pub fn resize_stop<L, D>(&mut self, layout: &L, delegate: &mut D) -> Option<PageRect>
    where
        L: PageLayout + ?Sized,
        D: RegionEditDelegate + ?Sized,
    {
        let Interaction::Resizing { .. } = self.interaction else {
            return None;
        };
        self.interaction = Interaction::Idle;

        let page_number = layout
            .locate_page(PageTarget::Page(self.rect.page_number))
            .and_then(|page| {
                let center = self.frame.center() + page.origin;
                layout.locate_page(PageTarget::Point(center))
            })
            .map_or(self.rect.page_number, |page| page.page_number);

        let mut rect = PageRect::from_rect(self.frame, page_number);
        self.clamp_underline(&mut rect);

        tracing::debug!("Region editor: resized to {:?}", rect);
        delegate.on_change(rect);
        Some(rect)
    }

    /// Drop a move or resize in progress and restore the synced box.
    pub fn cancel(&mut self) {
        self.interaction = Interaction::Idle;
        self.frame = self.key.frame;
    }

    // ===== Helpers =====

    fn clamp_underline(&self, rect: &mut PageRect) {
        if self.variant == RegionVariant::Underline {
            rect.height = self.settings.underline_thickness;
        }
    }

    /// Shift a moved frame back inside the bounds, keeping its size.
    fn keep_inside(&self, frame: Rect) -> Rect {
        let Some(bounds) = self.bounds else {
            return frame;
        };
        let max_x = (bounds.width - frame.width()).max(0.0);
        let max_y = (bounds.height - frame.height()).max(0.0);
        let x = frame.x0.clamp(0.0, max_x);
        let y = frame.y0.clamp(0.0, max_y);
        Rect::from_origin_size(Point::new(x, y), frame.size())
    }
}

/// The box shown for a region: the rect itself, or for an underline the
/// bar along its bottom edge.
fn geometry_key(
    rect: &PageRect,
    variant: RegionVariant,
    color: &HighlightColor,
    settings: &Settings,
) -> GeometryKey {
    let frame = match variant {
        RegionVariant::Underline => {
            let thickness = settings.underline_thickness;
            Rect::new(rect.left, rect.bottom() - thickness, rect.right(), rect.bottom())
        }
        _ => rect.to_rect(),
    };
    GeometryKey {
        page_number: rect.page_number,
        frame,
        variant,
        color: color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::PageViewport;
    use crate::page::StackedLayout;

    #[derive(Default)]
    struct Recorder {
        starts: usize,
        changes: Vec<PageRect>,
    }

    impl RegionEditDelegate for Recorder {
        fn on_edit_start(&mut self) {
            self.starts += 1;
        }

        fn on_change(&mut self, rect: PageRect) {
            self.changes.push(rect);
        }
    }

    fn editor(rect: PageRect, variant: RegionVariant) -> RegionEditor {
        let color = HighlightColor::new("#ff0000");
        RegionEditor::new(rect, variant, color, Settings::default()).unwrap()
    }

    fn area(rect: PageRect) -> RegionEditor {
        editor(rect, RegionVariant::Area)
    }

    fn underline(rect: PageRect) -> RegionEditor {
        editor(rect, RegionVariant::Underline)
    }

    fn bounded_area(rect: PageRect) -> RegionEditor {
        area(rect).with_bounds(Size::new(600.0, 800.0))
    }

    /// Two 600x800 pages stacked with no margin or gap.
    fn layout() -> StackedLayout {
        let mut layout = StackedLayout::new(0.0, 0.0);
        layout.push_page(PageViewport::new(600.0, 800.0), None);
        layout.push_page(PageViewport::new(600.0, 800.0), None);
        layout
    }

    #[test]
    fn text_regions_are_not_editable() {
        let result = RegionEditor::new(
            PageRect::new(0.0, 0.0, 10.0, 10.0, 1),
            RegionVariant::Text,
            HighlightColor::default(),
            Settings::default(),
        );
        assert!(matches!(result, Err(GeometryError::NotEditable(RegionVariant::Text))));
    }

    #[test]
    fn area_style_is_translucent_with_border() {
        let editor = area(PageRect::new(0.0, 0.0, 10.0, 10.0, 1));
        let style = editor.style();

        assert_eq!(style.fill, "rgba(255, 0, 0, 0.3)");
        assert_eq!(
            style.border,
            Some(Border {
                color: "#ff0000".to_string(),
                width: 1.0
            })
        );
        assert_eq!(editor.enabled_handles().len(), 8);
    }

    #[test]
    fn underline_is_a_solid_bar_at_the_bottom() {
        let editor = underline(PageRect::new(10.0, 20.0, 100.0, 30.0, 1));

        assert_eq!(editor.frame(), Rect::new(10.0, 47.0, 110.0, 50.0));
        assert_eq!(editor.style().fill, "#ff0000");
        assert!(editor.style().border.is_none());
        assert_eq!(editor.enabled_handles(), &[ResizeHandle::Left, ResizeHandle::Right]);
    }

    #[test]
    fn scrolled_to_region_uses_theme_color() {
        let mut editor = underline(PageRect::new(10.0, 20.0, 100.0, 30.0, 1));
        editor.set_scrolled_to(true);
        assert_eq!(editor.style().fill, theme::region::SCROLLED_TO_COLOR);
    }

    #[test]
    fn move_keeps_size_and_page() {
        let mut editor = area(PageRect::new(10.0, 20.0, 100.0, 50.0, 1));
        let mut rec = Recorder::default();

        editor.drag_start(Point::new(50.0, 40.0), &mut rec);
        editor.drag_move(Point::new(80.0, 10.0));
        let rect = editor.drag_stop(&mut rec).unwrap();

        assert_eq!(rect, PageRect::new(40.0, -10.0, 100.0, 50.0, 1));
        assert_eq!(rec.starts, 1);
        assert_eq!(rec.changes, vec![rect]);
        assert!(!editor.is_editing());
    }

    #[test]
    fn underline_move_reports_fixed_thickness() {
        let mut editor = underline(PageRect::new(10.0, 20.0, 100.0, 30.0, 1));
        let mut rec = Recorder::default();

        editor.drag_start(Point::new(50.0, 48.0), &mut rec);
        editor.drag_move(Point::new(60.0, 148.0));
        let rect = editor.drag_stop(&mut rec).unwrap();

        assert_eq!(rect, PageRect::new(20.0, 147.0, 100.0, 3.0, 1));
    }

    #[test]
    fn area_resize_from_corner() {
        let mut editor = area(PageRect::new(10.0, 20.0, 100.0, 50.0, 1));
        let layout = layout();
        let mut rec = Recorder::default();

        assert!(editor.resize_start(ResizeHandle::BottomRight, Point::new(110.0, 70.0), &mut rec));
        editor.resize_move(Point::new(150.0, 100.0));
        let rect = editor.resize_stop(&layout, &mut rec).unwrap();

        assert_eq!(rect, PageRect::new(10.0, 20.0, 140.0, 80.0, 1));
        assert_eq!(rec.starts, 1);
    }

    #[test]
    fn resize_past_opposite_edge_stops_at_minimum() {
        let mut editor = area(PageRect::new(10.0, 20.0, 100.0, 50.0, 1));
        let mut rec = Recorder::default();

        editor.resize_start(ResizeHandle::Left, Point::new(10.0, 45.0), &mut rec);
        editor.resize_move(Point::new(500.0, 45.0));

        assert_eq!(editor.frame(), Rect::new(109.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn underline_vertical_handles_are_disabled() {
        let mut editor = underline(PageRect::new(10.0, 20.0, 100.0, 30.0, 1));
        let mut rec = Recorder::default();

        assert!(!editor.resize_start(ResizeHandle::Top, Point::new(60.0, 47.0), &mut rec));
        assert!(!editor.resize_start(ResizeHandle::BottomRight, Point::new(110.0, 50.0), &mut rec));
        assert_eq!(rec.starts, 0);
        assert!(!editor.is_editing());
    }

    #[test]
    fn underline_resize_reports_fixed_thickness() {
        let mut editor = underline(PageRect::new(10.0, 20.0, 100.0, 30.0, 1));
        let layout = layout();
        let mut rec = Recorder::default();

        editor.resize_start(ResizeHandle::Right, Point::new(110.0, 48.5), &mut rec);
        // Vertical motion is ignored by a side handle
        editor.resize_move(Point::new(160.0, 300.0));
        let rect = editor.resize_stop(&layout, &mut rec).unwrap();

        assert_eq!(rect, PageRect::new(10.0, 47.0, 150.0, 3.0, 1));
    }

    #[test]
    fn underline_thickness_follows_settings() {
        let settings = Settings {
            underline_thickness: 5.0,
            ..Default::default()
        };
        let mut editor = RegionEditor::new(
            PageRect::new(0.0, 0.0, 50.0, 20.0, 1),
            RegionVariant::Underline,
            HighlightColor::default(),
            settings,
        )
        .unwrap();

        assert_eq!(editor.frame().height(), 5.0);
        editor.drag_start(Point::ZERO, &mut ());
        editor.drag_move(Point::new(3.0, 3.0));
        assert_eq!(editor.drag_stop(&mut ()).unwrap().height, 5.0);
    }

    #[test]
    fn resize_can_move_region_to_another_page() {
        let mut editor = area(PageRect::new(10.0, 700.0, 100.0, 50.0, 1));
        let layout = layout();
        let mut rec = Recorder::default();

        editor.resize_start(ResizeHandle::Bottom, Point::new(60.0, 750.0), &mut rec);
        editor.resize_move(Point::new(60.0, 1000.0));
        let rect = editor.resize_stop(&layout, &mut rec).unwrap();

        // Centre is now at y = 850, below page 1 which ends at 800
        assert_eq!(rect.page_number, 2);
        assert_eq!(rect.height, 300.0);
    }

    #[test]
    fn resize_off_every_page_keeps_original_page() {
        let mut editor = area(PageRect::new(10.0, 20.0, 100.0, 50.0, 2));
        let mut layout = StackedLayout::new(0.0, 0.0);
        layout.push_page(PageViewport::new(600.0, 800.0), None);
        let mut rec = Recorder::default();

        editor.resize_start(ResizeHandle::Right, Point::new(110.0, 45.0), &mut rec);
        editor.resize_move(Point::new(120.0, 45.0));
        let rect = editor.resize_stop(&layout, &mut rec).unwrap();

        assert_eq!(rect.page_number, 2);
    }

    #[test]
    fn bounds_keep_moves_on_the_page() {
        let mut editor = bounded_area(PageRect::new(10.0, 20.0, 100.0, 50.0, 1));
        let mut rec = Recorder::default();

        editor.drag_start(Point::new(50.0, 40.0), &mut rec);
        editor.drag_move(Point::new(-500.0, 2000.0));
        let rect = editor.drag_stop(&mut rec).unwrap();

        assert_eq!(rect, PageRect::new(0.0, 750.0, 100.0, 50.0, 1));
    }

    #[test]
    fn bounds_limit_resizes() {
        let mut editor = bounded_area(PageRect::new(10.0, 20.0, 100.0, 50.0, 1));
        let mut rec = Recorder::default();

        editor.resize_start(ResizeHandle::TopRight, Point::new(110.0, 20.0), &mut rec);
        editor.resize_move(Point::new(900.0, -100.0));

        assert_eq!(editor.frame(), Rect::new(10.0, 0.0, 600.0, 70.0));
    }

    #[test]
    fn external_change_discards_live_drag() {
        let rect = PageRect::new(10.0, 20.0, 100.0, 50.0, 1);
        let mut editor = area(rect);
        let mut rec = Recorder::default();

        editor.drag_start(Point::new(50.0, 40.0), &mut rec);
        editor.drag_move(Point::new(90.0, 40.0));

        // Same geometry: nothing happens, the drag continues
        assert!(!editor.sync(rect, RegionVariant::Area, HighlightColor::new("#ff0000")).unwrap());
        assert!(editor.is_editing());

        // Zoom changed the authoritative rect
        let zoomed = PageRect::new(20.0, 40.0, 200.0, 100.0, 1);
        assert!(editor.sync(zoomed, RegionVariant::Area, HighlightColor::new("#ff0000")).unwrap());
        assert!(!editor.is_editing());
        assert_eq!(editor.frame(), zoomed.to_rect());
        assert!(editor.drag_stop(&mut rec).is_none());
        assert!(rec.changes.is_empty());
    }

    #[test]
    fn color_or_variant_change_also_resyncs() {
        let rect = PageRect::new(10.0, 20.0, 100.0, 50.0, 1);
        let mut editor = area(rect);

        let green = || HighlightColor::new("#00ff00");
        assert!(editor.sync(rect, RegionVariant::Area, green()).unwrap());
        assert!(editor.sync(rect, RegionVariant::Underline, green()).unwrap());
        assert_eq!(editor.frame(), Rect::new(10.0, 67.0, 110.0, 70.0));
        assert!(editor.sync(rect, RegionVariant::Text, green()).is_err());
    }

    #[test]
    fn cancel_restores_synced_frame() {
        let mut editor = area(PageRect::new(10.0, 20.0, 100.0, 50.0, 1));
        editor.drag_start(Point::new(50.0, 40.0), &mut ());
        editor.drag_move(Point::new(90.0, 90.0));
        editor.cancel();

        assert_eq!(editor.frame(), Rect::new(10.0, 20.0, 110.0, 70.0));
        assert!(!editor.is_editing());
    }

    #[test]
    fn hit_test_prefers_corners_and_skips_disabled_handles() {
        let area = area(PageRect::new(0.0, 0.0, 10.0, 10.0, 1));
        // (1, 4) is within 5 of both TopLeft (0,0) and Left (0,5)
        assert_eq!(area.hit_test_handle(Point::new(1.0, 4.0), 5.0), Some(ResizeHandle::TopLeft));
        assert_eq!(area.hit_test_handle(Point::new(5.0, 5.0), 2.0), None);

        let bar = underline(PageRect::new(0.0, 0.0, 100.0, 30.0, 1));
        let radius = theme::handle::HIT_RADIUS;
        assert_eq!(bar.hit_test_handle(Point::new(0.0, 28.0), radius), Some(ResizeHandle::Left));
        assert_eq!(bar.hit_test_handle(Point::new(50.0, 27.0), radius), None);
    }
}
