// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Texture cache for image assets.
//!
//! Wraps the background [`ImageLoader`] and turns finished decodes into
//! egui textures. A source that failed once stays failed for the session.

use crate::io::media::ImageLoader;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Display state of one image source.
pub enum AssetState<'a> {
    Loading,
    Ready(&'a egui::TextureHandle),
    Failed,
}

pub struct AssetCache {
    loader: ImageLoader,
    /// `None` marks a source that could not be decoded.
    textures: HashMap<String, Option<egui::TextureHandle>>,
    /// Sources requested from the loader with no result yet.
    in_flight: HashSet<String>,
}

impl AssetCache {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            loader: ImageLoader::new(asset_dir),
            textures: HashMap::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Upload finished decodes as textures. Returns true if anything arrived.
    pub fn update(&mut self, ctx: &egui::Context) -> bool {
        let finished = self.loader.poll();
        let arrived = !finished.is_empty();

        for (src, result) in finished {
            self.in_flight.remove(&src);
            let slot = match result {
                Ok(image) => {
                    let size = [image.width as usize, image.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
                    Some(ctx.load_texture(src.clone(), color_image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    log::error!("Failed to load image {}: {}", src, e);
                    None
                }
            };
            self.textures.insert(src, slot);
        }

        arrived
    }

    /// Texture for `src`, starting a background load on first use.
    pub fn texture(&mut self, src: &str) -> AssetState<'_> {
        if let Some(slot) = self.textures.get(src) {
            return match slot {
                Some(texture) => AssetState::Ready(texture),
                None => AssetState::Failed,
            };
        }

        if self.loader.request(src) {
            self.in_flight.insert(src.to_string());
        }
        AssetState::Loading
    }

    /// Whether any requested source has not finished yet.
    pub fn pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Drop every texture and request.
    pub fn reset(&mut self) {
        self.loader.reset();
        self.textures.clear();
        self.in_flight.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn settle(cache: &mut AssetCache, ctx: &egui::Context) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while cache.pending() && Instant::now() < deadline {
            cache.update(ctx);
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_failed_source_stops_being_pending() {
        let ctx = egui::Context::default();
        let mut cache = AssetCache::new("/nonexistent/folio/assets");
        assert!(!cache.pending());

        assert!(matches!(cache.texture("missing.png"), AssetState::Loading));
        assert!(matches!(cache.texture("https://remote.test/x.png"), AssetState::Loading));
        assert!(cache.pending());

        settle(&mut cache, &ctx);

        assert!(!cache.pending());
        assert!(matches!(cache.texture("missing.png"), AssetState::Failed));
        assert!(matches!(cache.texture("https://remote.test/x.png"), AssetState::Failed));
        // Failed sources are not requested again
        assert!(!cache.pending());
    }

    #[test]
    fn test_decoded_source_becomes_ready() {
        let dir = std::env::temp_dir().join(format!("folio-{}-assets", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        image::RgbaImage::new(2, 2).save(dir.join("ok.png")).unwrap();

        let ctx = egui::Context::default();
        let mut cache = AssetCache::new(&dir);
        cache.texture("ok.png");
        settle(&mut cache, &ctx);
        std::fs::remove_dir_all(&dir).ok();

        assert!(!cache.pending());
        assert!(matches!(cache.texture("ok.png"), AssetState::Ready(_)));
    }

    #[test]
    fn test_reset_clears_in_flight_sources() {
        let mut cache = AssetCache::new("assets");
        cache.texture("https://remote.test/x.png");
        assert!(cache.pending());

        cache.reset();
        assert!(!cache.pending());
    }
}
