// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Highlight data model
//!
//! Two coordinate families live here. `ScaledRect` / `Position` are the
//! persisted, resolution-independent form. `PageRect` / `ViewportPosition`
//! are the pixel-exact form for the current render pass and are always
//! derived from the persisted form, never the other way round.

pub mod color;
pub mod highlight;
pub mod highlight_id;
pub mod position;
pub mod rect;

pub use color::HighlightColor;
pub use highlight::{Content, Highlight, HighlightEdit, NewHighlight, RegionVariant};
pub use highlight_id::HighlightId;
pub use position::{Position, ViewportPosition};
pub use rect::{PageRect, ScaledRect};
