// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Deferred loading state for embedded frames.
//!
//! Frames trigger a nested page load, so the renderer shows a placeholder
//! until the user reveals one. Once revealed a frame stays resident for the
//! rest of the session: the tracker only ever grows.

use std::collections::HashSet;

/// Identifies one media fragment within one project's media strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaKey {
    pub project_index: usize,
    pub media_index: usize,
}

impl MediaKey {
    pub fn new(project_index: usize, media_index: usize) -> Self {
        Self {
            project_index,
            media_index,
        }
    }
}

/// Monotonic set of revealed media keys.
#[derive(Debug, Default, Clone)]
pub struct LoadTracker {
    loaded: HashSet<MediaKey>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the key has been revealed. Unknown keys are simply not loaded.
    pub fn is_loaded(&self, key: MediaKey) -> bool {
        self.loaded.contains(&key)
    }

    /// Mark the key as revealed. Repeated calls have no further effect.
    pub fn mark_loaded(&mut self, key: MediaKey) {
        if self.loaded.insert(key) {
            log::debug!(
                "Revealed media {} of project {}",
                key.media_index,
                key.project_index
            );
        }
    }

    /// Number of revealed keys.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }
}
