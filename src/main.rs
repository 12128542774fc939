// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio - portfolio viewer
//!
//! A desktop application that shows a list of project cards, each with a
//! description and a paged strip of images and embedded pages. Embedded
//! pages are only loaded once the user asks for them.

mod app;
mod config;
mod io;
mod media;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::FolioApp;
use config::AppConfig;
use std::path::Path;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load(Path::new(config::CONFIG_FILE))?;
    let portfolio = config.portfolio()?;
    let title = portfolio.site_name.clone();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title(&title),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(FolioApp::new(config, portfolio)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
