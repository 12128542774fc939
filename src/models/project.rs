// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio data model.
//!
//! Projects are authored once (built in or imported from a file) and never
//! mutated while displayed. Descriptions are runs of typed inline content
//! instead of raw markup; media strip entries stay as markup fragments and
//! are interpreted by [`crate::media::classifier`].

use crate::media::classifier;
use crate::media::tracker::{LoadTracker, MediaKey};
use serde::{Deserialize, Serialize};

/// One run of description content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Inline {
    Text { text: String },
    Link { text: String, href: String },
    Image { src: String, alt: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Inline::Link {
            text: text.into(),
            href: href.into(),
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Inline::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// A single portfolio entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Vec<Inline>,
    /// Media strip fragments, in display order. Empty means no strip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<String>,
}

impl ProjectRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
            description: Vec::new(),
            media: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_description(mut self, description: Vec<Inline>) -> Self {
        self.description = description;
        self
    }

    pub fn with_media<I, S>(mut self, media: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media = media.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }
}

/// What the renderer needs to draw one media strip entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaView<'a> {
    pub is_frame: bool,
    pub src: &'a str,
    pub loaded: bool,
}

/// The ordered project table shown on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub site_name: String,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

impl Portfolio {
    pub fn new(site_name: impl Into<String>, projects: Vec<ProjectRecord>) -> Self {
        Self {
            site_name: site_name.into(),
            projects,
        }
    }

    /// Fragment addressed by `key`, if it exists.
    pub fn fragment(&self, key: MediaKey) -> Option<&str> {
        self.projects
            .get(key.project_index)?
            .media
            .get(key.media_index)
            .map(String::as_str)
    }

    /// Classification, source and load state for one media entry.
    pub fn media_view(&self, key: MediaKey, tracker: &LoadTracker) -> Option<MediaView<'_>> {
        let fragment = self.fragment(key)?;
        Some(MediaView {
            is_frame: classifier::is_embedded_frame(fragment),
            src: classifier::extract_source(fragment),
            loaded: tracker.is_loaded(key),
        })
    }

    /// Keys of every media entry of one project, in order.
    pub fn media_keys(&self, project_index: usize) -> impl Iterator<Item = MediaKey> + '_ {
        let count = self
            .projects
            .get(project_index)
            .map_or(0, |p| p.media.len());
        (0..count).map(move |media_index| MediaKey::new(project_index, media_index))
    }

    /// Total number of embedded frames across all projects.
    pub fn frame_count(&self) -> usize {
        self.projects
            .iter()
            .flat_map(|p| p.media.iter())
            .filter(|f| classifier::is_embedded_frame(f))
            .count()
    }
}
