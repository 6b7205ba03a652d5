// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input as delivered by the host.

use kurbo::{Point, Vec2};

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Modifier keys held during the event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A pointer event in container coordinates (scroll offset included)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Point,
    /// Button that changed state; `None` for plain moves
    pub button: Option<MouseButton>,
    pub mods: Modifiers,
}

impl MouseEvent {
    pub fn new(pos: Point, button: Option<MouseButton>) -> Self {
        Self::with_modifiers(pos, button, Modifiers::default())
    }

    pub fn with_modifiers(pos: Point, button: Option<MouseButton>, mods: Modifiers) -> Self {
        Self { pos, button, mods }
    }

    /// True for events of the primary (left) button.
    pub fn is_primary(&self) -> bool {
        self.button == Some(MouseButton::Left)
    }
}

/// An in-progress drag: where it started and where the pointer is now
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub start: Point,
    pub current: Point,
}

impl Drag {
    pub fn new(start: Point, current: Point) -> Self {
        Self { start, current }
    }

    pub fn delta(&self) -> Vec2 {
        self.current - self.start
    }
}
