// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Area selection: turning a press-drag-release into a page rectangle.
//!
//! The gesture runs `Idle -> Armed -> Dragging -> Locked`. A press on a
//! page arms it; moving past the drag threshold starts the drag; releasing
//! a drag of at least one pixel in each direction locks it and hands the
//! finished selection (viewport rect, scaled rect, snapshot) to the
//! delegate. A locked selection stays on screen until the caller calls
//! [`AreaSelector::reset`] or the next press replaces it.
//!
//! The host forwards move and down events from the page container and up
//! events from the whole window, so a drag released outside the container
//! still finishes. All gesture state lives in one [`AreaSelector`] value,
//! so there is nothing to re-bind when it changes.

use super::mouse::{Drag, MouseEvent};
use crate::coords;
use crate::model::{PageRect, Position, ViewportPosition};
use crate::page::{PageLayout, PageTarget};
use crate::settings::Settings;
use crate::snapshot::Snapshot;
use kurbo::{Point, Rect};
use std::fmt;
use std::rc::Rc;

// ===== Configuration =====

/// Decides per press whether area selection may start
pub type EnablePredicate = Rc<dyn Fn(&MouseEvent) -> bool>;

/// Area selection configuration, re-read on every event
#[derive(Clone)]
pub struct SelectionConfig {
    enable_area_selection: EnablePredicate,
    settings: Settings,
}

impl SelectionConfig {
    /// Area selection always enabled, default settings.
    pub fn new() -> Self {
        Self {
            enable_area_selection: Rc::new(|_| true),
            settings: Settings::default(),
        }
    }

    /// Only start a selection when `predicate` accepts the press event
    /// (for example "alt is held").
    pub fn with_predicate(mut self, predicate: impl Fn(&MouseEvent) -> bool + 'static) -> Self {
        self.enable_area_selection = Rc::new(predicate);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_enabled(&self, event: &MouseEvent) -> bool {
        (self.enable_area_selection)(event)
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SelectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionConfig")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ===== Output =====

/// A finished area selection
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSelection {
    /// Page-local pixel rect; `rects` is always empty
    pub viewport: ViewportPosition,
    /// Persisted form of `viewport`
    pub scaled: Position,
    /// The pixels under the rect at release time
    pub image: Snapshot,
}

/// Receives area selection notifications.
///
/// All methods default to doing nothing.
pub trait SelectionDelegate {
    /// A drag was released with a valid rect. The selection stays locked
    /// until [`AreaSelector::reset`] is called.
    fn on_selection(&mut self, _selection: &AreaSelection, _event: &MouseEvent) {}

    /// The gesture ended without a selection, or a selection was cleared.
    fn on_reset(&mut self) {}

    /// The pointer moved far enough for a press to become a drag.
    fn on_drag_start(&mut self, _event: &MouseEvent) {}

    /// The drawn rect changed; `visible` is false once it is gone.
    fn on_change(&mut self, _visible: bool) {}
}

impl SelectionDelegate for () {}

// ===== Gesture State =====

/// State of the selection gesture
#[derive(Debug, Clone)]
enum GestureState {
    /// No interaction
    Idle,
    /// Pressed on a page, not yet past the drag threshold
    Armed { down: Point, page_number: u32 },
    /// Actively dragging; `drag.start` never changes
    Dragging { drag: Drag, page_number: u32 },
    /// Released with a valid rect, waiting for the caller to reset
    Locked { drag: Drag, selection: AreaSelection },
}

/// Public view of the gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Armed,
    Dragging,
    Locked,
}

// ===== AreaSelector =====

/// The area selection state machine
#[derive(Debug, Clone)]
pub struct AreaSelector {
    config: SelectionConfig,
    gesture: GestureState,
}

impl Default for AreaSelector {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

impl AreaSelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            gesture: GestureState::Idle,
        }
    }

    /// Swap in a new configuration. Takes effect from the next event.
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn phase(&self) -> GesturePhase {
        match self.gesture {
            GestureState::Idle => GesturePhase::Idle,
            GestureState::Armed { .. } => GesturePhase::Armed,
            GestureState::Dragging { .. } => GesturePhase::Dragging,
            GestureState::Locked { .. } => GesturePhase::Locked,
        }
    }

    /// The rect to draw, in container coordinates, while dragging or
    /// locked.
    pub fn selection_rect(&self) -> Option<Rect> {
        match &self.gesture {
            GestureState::Dragging { drag, .. } | GestureState::Locked { drag, .. } => {
                Some(Rect::from_points(drag.start, drag.current))
            }
            _ => None,
        }
    }

    /// The finished selection while locked.
    pub fn locked_selection(&self) -> Option<&AreaSelection> {
        match &self.gesture {
            GestureState::Locked { selection, .. } => Some(selection),
            _ => None,
        }
    }

    /// Handle a button press.
    ///
    /// Any earlier gesture is reset first, then the press arms a new one
    /// if it is a primary press on a page and area selection is enabled.
    pub fn pointer_down<L, D>(&mut self, event: &MouseEvent, layout: &L, delegate: &mut D)
    where
        L: PageLayout + ?Sized,
        D: SelectionDelegate + ?Sized,
    {
        if !event.is_primary() {
            return;
        }

        if !matches!(self.gesture, GestureState::Idle) {
            self.reset(delegate);
        }

        if !self.config.is_enabled(event) {
            return;
        }

        let Some(page) = layout.locate_page(PageTarget::Point(event.pos)) else {
            tracing::debug!("Area selection: press at {:?} is not on a page", event.pos);
            return;
        };

        self.gesture = GestureState::Armed {
            down: event.pos,
            page_number: page.page_number,
        };
        tracing::debug!("Area selection: armed on page {} at {:?}", page.page_number, event.pos);
    }

    /// Handle pointer movement.
    pub fn pointer_move<D>(&mut self, event: &MouseEvent, delegate: &mut D)
    where
        D: SelectionDelegate + ?Sized,
    {
        match &mut self.gesture {
            GestureState::Armed { down, page_number } => {
                let distance_squared = (event.pos - *down).hypot2();
                if distance_squared < self.config.settings.drag_threshold_squared() {
                    return;
                }
                let drag = Drag::new(*down, event.pos);
                let page_number = *page_number;
                self.gesture = GestureState::Dragging { drag, page_number };
                tracing::debug!("Area selection: drag began at {:?}", drag.start);
                delegate.on_drag_start(event);
                delegate.on_change(true);
            }
            GestureState::Dragging { drag, .. } => {
                drag.current = event.pos;
                delegate.on_change(true);
            }
            GestureState::Idle | GestureState::Locked { .. } => {}
        }
    }

    /// Handle a button release, wherever it happened.
    pub fn pointer_up<L, D>(&mut self, event: &MouseEvent, layout: &L, delegate: &mut D)
    where
        L: PageLayout + ?Sized,
        D: SelectionDelegate + ?Sized,
    {
        match self.gesture {
            GestureState::Idle | GestureState::Locked { .. } => {}
            GestureState::Armed { .. } => {
                // Released before the threshold: a click, not a selection
                self.gesture = GestureState::Idle;
                tracing::debug!("Area selection: click, no drag");
                delegate.on_reset();
            }
            GestureState::Dragging { drag, page_number } => {
                self.finish_drag(drag, page_number, event, layout, delegate);
            }
        }
    }

    /// Clear any gesture or locked selection and notify the delegate.
    pub fn reset<D>(&mut self, delegate: &mut D)
    where
        D: SelectionDelegate + ?Sized,
    {
        let was_visible = self.selection_rect().is_some();
        self.gesture = GestureState::Idle;
        tracing::debug!("Area selection: reset");
        delegate.on_reset();
        if was_visible {
            delegate.on_change(false);
        }
    }

    fn finish_drag<L, D>(
        &mut self,
        drag: Drag,
        page_number: u32,
        event: &MouseEvent,
        layout: &L,
        delegate: &mut D,
    ) where
        L: PageLayout + ?Sized,
        D: SelectionDelegate + ?Sized,
    {
        let rect = Rect::from_points(drag.start, drag.current);
        let min_size = self.config.settings.min_selection_size;
        if rect.width() < min_size || rect.height() < min_size {
            tracing::debug!("Area selection: {:?} too small, discarded", rect.size());
            self.reset(delegate);
            return;
        }

        let Some(page) = layout.locate_page(PageTarget::Page(page_number)) else {
            tracing::warn!("Area selection: page {} no longer in layout", page_number);
            self.reset(delegate);
            return;
        };

        let page_rect = PageRect::from_rect(rect - page.origin, page.page_number);
        let viewport = ViewportPosition::from_bounding_rect(page_rect);
        let scaled = match coords::position_to_scaled(&viewport, layout) {
            Ok(scaled) => scaled,
            Err(err) => {
                tracing::warn!("Area selection: cannot scale selection: {}", err);
                self.reset(delegate);
                return;
            }
        };
        let image = match layout.capture_region(&page_rect) {
            Ok(image) if !image.is_empty() => image,
            Ok(_) => {
                tracing::warn!("Area selection: capture of {:?} has no pixels", page_rect);
                self.reset(delegate);
                return;
            }
            Err(err) => {
                tracing::warn!("Area selection: {}", err);
                self.reset(delegate);
                return;
            }
        };

        tracing::debug!("Area selection: locked {:?}", page_rect);
        self.gesture = GestureState::Locked {
            drag,
            selection: AreaSelection {
                viewport,
                scaled,
                image,
            },
        };
        if let GestureState::Locked { selection, .. } = &self.gesture {
            delegate.on_selection(selection, event);
        }
    }
}
