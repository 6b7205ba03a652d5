// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory highlight collection and its link to the region editor.

use crate::coords;
use crate::editing::{AreaSelection, RegionEditDelegate};
use crate::error::{GeometryError, Result};
use crate::model::{
    Content, Highlight, HighlightColor, HighlightEdit, HighlightId, NewHighlight, PageRect,
    Position, RegionVariant,
};
use crate::page::PageLayout;

/// All highlights of one document
#[derive(Debug, Clone, Default)]
pub struct HighlightStore {
    highlights: Vec<Highlight>,
    /// Set while a region is being moved or resized
    edit_in_progress: bool,
}

impl HighlightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a highlight, stamping it with a fresh id and the current time.
    pub fn add(&mut self, highlight: NewHighlight) -> HighlightId {
        let id = HighlightId::next();
        let NewHighlight {
            position,
            content,
            comment,
            color,
            variant,
        } = highlight;

        self.highlights.push(Highlight {
            id,
            position,
            content,
            comment,
            timestamp: chrono::Utc::now().timestamp_millis(),
            color,
            variant,
        });
        tracing::debug!("Added highlight {} ({:?})", id, variant);
        id
    }

    /// Store a locked area selection with a comment.
    pub fn add_from_selection(
        &mut self,
        selection: &AreaSelection,
        variant: RegionVariant,
        color: HighlightColor,
        comment: impl Into<String>,
    ) -> Result<HighlightId> {
        let highlight = NewHighlight::from_selection(selection, variant, color, comment)?;
        Ok(self.add(highlight))
    }

    /// Apply a partial edit to a stored highlight.
    pub fn edit(&mut self, id: HighlightId, edit: HighlightEdit) -> Result<()> {
        let highlight = self.get_mut(id).ok_or(GeometryError::HighlightNotFound(id))?;
        highlight.apply(edit);
        tracing::debug!("Edited highlight {}", id);
        Ok(())
    }

    pub fn get(&self, id: HighlightId) -> Option<&Highlight> {
        self.highlights.iter().find(|h| h.id == id)
    }

    fn get_mut(&mut self, id: HighlightId) -> Option<&mut Highlight> {
        self.highlights.iter_mut().find(|h| h.id == id)
    }

    /// Highlights in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Highlight> {
        self.highlights.iter()
    }

    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }

    /// Highlights newest first, as listed in a sidebar.
    pub fn recent_first(&self) -> Vec<&Highlight> {
        let mut sorted: Vec<&Highlight> = self.highlights.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        sorted
    }

    pub fn edit_in_progress(&self) -> bool {
        self.edit_in_progress
    }

    pub fn set_edit_in_progress(&mut self, edit_in_progress: bool) {
        self.edit_in_progress = edit_in_progress;
    }

    /// Commit a region editor result.
    ///
    /// `rect` is the new page-local viewport rect. It is scaled against its
    /// page's current viewport, the region is captured again, and both
    /// replace the highlight's position and image. Any text content is
    /// kept. The edit-in-progress flag is cleared whether or not this
    /// succeeds.
    pub fn apply_region_change<L>(
        &mut self,
        id: HighlightId,
        rect: PageRect,
        layout: &L,
    ) -> Result<()>
    where
        L: PageLayout + ?Sized,
    {
        self.edit_in_progress = false;

        let text = self
            .get(id)
            .ok_or(GeometryError::HighlightNotFound(id))?
            .content
            .text
            .clone();
        let viewport = layout
            .viewport(rect.page_number)
            .ok_or(GeometryError::UnknownPage(rect.page_number))?;
        let scaled = coords::to_scaled(&rect, viewport.size());
        let image = layout.capture_region(&rect)?.to_png_data_url()?;

        self.edit(
            id,
            HighlightEdit {
                position: Some(Position::from_bounding_rect(scaled)),
                content: Some(Content {
                    text,
                    image: Some(image),
                }),
                ..Default::default()
            },
        )
    }

    /// A region editor delegate that writes changes to highlight `id`.
    pub fn binding<'a, L>(&'a mut self, id: HighlightId, layout: &'a L) -> RegionEditBinding<'a, L>
    where
        L: PageLayout + ?Sized,
    {
        RegionEditBinding {
            store: self,
            layout,
            id,
            error: None,
        }
    }
}

/// Routes region editor notifications to one stored highlight.
///
/// Delegate callbacks cannot fail, so an error while committing a change is
/// kept until the caller collects it with [`take_error`](Self::take_error).
pub struct RegionEditBinding<'a, L: PageLayout + ?Sized> {
    store: &'a mut HighlightStore,
    layout: &'a L,
    id: HighlightId,
    error: Option<GeometryError>,
}

impl<L: PageLayout + ?Sized> RegionEditBinding<'_, L> {
    pub fn take_error(&mut self) -> Option<GeometryError> {
        self.error.take()
    }
}

impl<L: PageLayout + ?Sized> RegionEditDelegate for RegionEditBinding<'_, L> {
    fn on_edit_start(&mut self) {
        self.store.set_edit_in_progress(true);
    }

    fn on_change(&mut self, rect: PageRect) {
        if let Err(err) = self.store.apply_region_change(self.id, rect, self.layout) {
            tracing::warn!("Failed to update highlight {}: {}", self.id, err);
            self.error = Some(err);
        }
    }
}
