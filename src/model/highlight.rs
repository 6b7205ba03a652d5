// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Highlights as owned by the annotation store.

use super::color::HighlightColor;
use super::highlight_id::HighlightId;
use super::position::{Position, ViewportPosition};
use crate::coords::{self, ViewportLookup};
use crate::editing::AreaSelection;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How a region was created and how it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionVariant {
    /// Bound to text lines; one sub-rect per line
    Text,
    /// Free rectangle drawn with area selection
    Area,
    /// Area region drawn as a thin bar along its bottom edge
    Underline,
}

impl RegionVariant {
    /// Area and underline regions can be moved and resized.
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Area | Self::Underline)
    }
}

/// What the highlight captured
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// PNG data URL of the region at capture time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A stored highlight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: HighlightId,
    pub position: Position,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub comment: String,
    /// Creation time, milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(default)]
    pub color: HighlightColor,
    #[serde(rename = "type")]
    pub variant: RegionVariant,
}

impl Highlight {
    /// Project the persisted position onto the current layout.
    ///
    /// Call this on every render pass; the result must not outlive a
    /// zoom, scroll or layout change.
    pub fn viewport_position(
        &self,
        lookup: &(impl ViewportLookup + ?Sized),
    ) -> Result<ViewportPosition> {
        coords::position_to_viewport(&self.position, lookup)
    }

    /// Apply a partial edit, leaving unset fields untouched.
    pub fn apply(&mut self, edit: HighlightEdit) {
        if let Some(position) = edit.position {
            self.position = position;
        }
        if let Some(content) = edit.content {
            self.content = content;
        }
        if let Some(comment) = edit.comment {
            self.comment = comment;
        }
        if let Some(color) = edit.color {
            self.color = color;
        }
        if let Some(variant) = edit.variant {
            self.variant = variant;
        }
    }
}

/// A highlight that has not been given an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewHighlight {
    pub position: Position,
    pub content: Content,
    pub comment: String,
    pub color: HighlightColor,
    pub variant: RegionVariant,
}

impl NewHighlight {
    /// Turn a locked area selection into a highlight.
    ///
    /// The snapshot is encoded as a PNG data URL and stored as the
    /// highlight's image.
    pub fn from_selection(
        selection: &AreaSelection,
        variant: RegionVariant,
        color: HighlightColor,
        comment: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            position: selection.scaled.clone(),
            content: Content {
                text: None,
                image: Some(selection.image.to_png_data_url()?),
            },
            comment: comment.into(),
            color,
            variant,
        })
    }
}

/// A partial update to a highlight
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightEdit {
    pub position: Option<Position>,
    pub content: Option<Content>,
    pub comment: Option<String>,
    pub color: Option<HighlightColor>,
    pub variant: Option<RegionVariant>,
}
