// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer interaction: drawing new area selections and editing regions

pub mod mouse;
pub mod region_editor;
pub mod selection;

pub use mouse::{Drag, Modifiers, MouseButton, MouseEvent};
pub use region_editor::{Border, RegionEditDelegate, RegionEditor, RegionStyle, ResizeHandle};
pub use selection::{
    AreaSelection, AreaSelector, EnablePredicate, GesturePhase, SelectionConfig, SelectionDelegate,
};
