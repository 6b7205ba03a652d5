// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for coordinate conversion, region editing and the store.

use crate::model::{HighlightId, RegionVariant};
use thiserror::Error;

/// A scaled rect was stored in the old bounding-box-only shape.
///
/// Such a rect has no `x1`/`y1` corner and cannot be projected onto a
/// viewport. It is never migrated silently; the caller decides whether to
/// drop the highlight, log it, or ask for a migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("scaled rect on page {page_number} uses the old position format (no x1/y1)")]
pub struct LegacyFormatError {
    pub page_number: u32,
}

/// Errors surfaced by the geometry subsystem.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error(transparent)]
    LegacyFormat(#[from] LegacyFormatError),

    /// The page layout has no page with this number.
    #[error("no page {0} in the current layout")]
    UnknownPage(u32),

    /// Only area and underline regions have an interactive editor.
    #[error("{0:?} highlights cannot be edited as regions")]
    NotEditable(RegionVariant),

    #[error("highlight {0} not found")]
    HighlightNotFound(HighlightId),

    /// The renderer could not produce a raster for the requested region.
    #[error("failed to capture page {page_number}: {reason}")]
    Capture { page_number: u32, reason: String },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
