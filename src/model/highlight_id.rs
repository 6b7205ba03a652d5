// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for highlights.
//!
//! Each `HighlightId` is a monotonically increasing `u64` generated from a
//! global atomic counter. The store hands one out for every highlight it
//! accepts; ids are never reused within a session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightId(u64);

static HIGHLIGHT_COUNTER: AtomicU64 = AtomicU64::new(1);

impl HighlightId {
    /// Create a new unique highlight ID
    pub fn next() -> Self {
        Self(HIGHLIGHT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HighlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
