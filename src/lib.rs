// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Pagemark: highlight geometry for paginated documents
//!
//! Highlights are persisted in a zoom-independent "scaled" form and drawn
//! from a "viewport" form recomputed against the current page layout on
//! every render. On top of that sit the area selection gesture that draws
//! new rectangular highlights and the region editor that moves and resizes
//! existing ones.

pub mod coords;
pub mod editing;
pub mod error;
pub mod model;
pub mod page;
pub mod settings;
pub mod snapshot;
pub mod store;
pub mod theme;

pub use coords::{PageViewport, ViewportLookup};
pub use editing::{AreaSelection, AreaSelector, RegionEditor, SelectionConfig};
pub use error::{GeometryError, LegacyFormatError, Result};
pub use model::{
    Highlight, HighlightColor, HighlightId, PageRect, Position, RegionVariant, ScaledRect,
};
pub use page::{PageLayout, PageTarget, StackedLayout};
pub use settings::Settings;
pub use snapshot::Snapshot;
pub use store::HighlightStore;

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, with this crate at `info` unless
/// overridden. Calling this when a subscriber is already installed is an
/// error, which hosts that set up their own logging can ignore.
pub fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pagemark=info".parse()?),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_logging_init_fails_without_panicking() {
        let _ = init_logging();
        assert!(init_logging().is_err());
    }
}
