// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image asset loading.
//!
//! This module decodes the local images referenced by media strips and
//! descriptions into RGBA pixels suitable for egui textures. Decoding runs
//! on background threads; remote sources are never fetched.

use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Decoded image data.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an image file into RGBA8 pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Local path for an image source, or `None` for remote sources.
pub fn resolve_source(asset_dir: &Path, src: &str) -> Option<PathBuf> {
    if src.is_empty() || src.contains("://") || src.starts_with("//") {
        return None;
    }
    Some(asset_dir.join(src))
}

/// Outcome of one background load, keyed by the source string.
pub type LoadResult = (String, Result<LoadedImage, String>);

/// Background image decoder. Each source is decoded at most once.
pub struct ImageLoader {
    asset_dir: PathBuf,
    requested: HashSet<String>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl ImageLoader {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        let (sender, receiver) = channel();
        Self {
            asset_dir: asset_dir.into(),
            requested: HashSet::new(),
            sender,
            receiver,
        }
    }

    /// Start decoding `src` unless it was requested before.
    ///
    /// Returns `false` when the source was already requested.
    pub fn request(&mut self, src: &str) -> bool {
        if !self.requested.insert(src.to_string()) {
            return false;
        }

        let key = src.to_string();
        let Some(path) = resolve_source(&self.asset_dir, src) else {
            let _ = self
                .sender
                .send((key, Err(format!("Not a local image: {:?}", src))));
            return true;
        };

        let sender = self.sender.clone();
        std::thread::spawn(move || {
            // A panicking decoder still reports back, so no source stays in flight
            let result = std::panic::catch_unwind(|| load_image(&path))
                .unwrap_or_else(|_| Err(anyhow!("Decoder panicked on {}", path.display())))
                .map_err(|e| format!("{:#}", e));
            if result.is_ok() {
                log::info!("Loaded image: {}", path.display());
            }
            let _ = sender.send((key, result));
        });
        true
    }

    /// Drain every load that finished since the last poll.
    pub fn poll(&self) -> Vec<LoadResult> {
        self.receiver.try_iter().collect()
    }

    /// Forget previous requests, e.g. after switching project tables.
    pub fn reset(&mut self) {
        self.requested.clear();
        // Stale results from running threads are dropped by the new channel
        let (sender, receiver) = channel();
        self.sender = sender;
        self.receiver = receiver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-{}-{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn wait_for(loader: &ImageLoader, count: usize) -> Vec<LoadResult> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut results = Vec::new();
        while results.len() < count && Instant::now() < deadline {
            results.extend(loader.poll());
            std::thread::sleep(Duration::from_millis(5));
        }
        results
    }

    #[test]
    fn test_resolve_source() {
        let dir = Path::new("assets");
        assert_eq!(resolve_source(dir, "a.png"), Some(dir.join("a.png")));
        assert_eq!(resolve_source(dir, "https://x.test/a.png"), None);
        assert_eq!(resolve_source(dir, "//cdn.test/a.png"), None);
        assert_eq!(resolve_source(dir, ""), None);
    }

    #[test]
    fn test_load_image_decodes_rgba() {
        let dir = scratch_dir("decode");
        let path = dir.join("tiny.png");
        image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!((loaded.width, loaded.height), (2, 3));
        assert_eq!(loaded.pixels.len(), 2 * 3 * 4);
        assert_eq!(&loaded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_load_missing_image_fails() {
        assert!(load_image(Path::new("/nonexistent/folio/missing.png")).is_err());
    }

    #[test]
    fn test_loader_requests_once_and_reports_failures() {
        let dir = scratch_dir("loader");
        image::RgbaImage::new(1, 1).save(dir.join("ok.png")).unwrap();

        let mut loader = ImageLoader::new(&dir);
        assert!(loader.request("ok.png"));
        assert!(!loader.request("ok.png"));
        assert!(loader.request("missing.png"));
        assert!(loader.request("https://remote.test/x.png"));

        let mut results = wait_for(&loader, 3);
        std::fs::remove_dir_all(&dir).ok();
        results.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "https://remote.test/x.png");
        assert!(results[0].1.is_err());
        assert_eq!(results[1].0, "missing.png");
        assert!(results[1].1.is_err());
        assert_eq!(results[2].0, "ok.png");
        assert!(results[2].1.is_ok());
    }

    #[test]
    fn test_reset_allows_new_requests() {
        let mut loader = ImageLoader::new("assets");
        loader.request("https://remote.test/x.png");
        loader.reset();
        assert!(loader.poll().is_empty());
        assert!(loader.request("https://remote.test/x.png"));
    }
}
