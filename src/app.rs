// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the session state (project table, revealed frames,
//! strip scroll positions, image textures) and hands it to the UI
//! components each frame, applying the actions they report.

use crate::config::AppConfig;
use crate::io::serialization;
use crate::media::carousel::Carousels;
use crate::media::tracker::{LoadTracker, MediaKey};
use crate::models::project::Portfolio;
use crate::ui::assets::AssetCache;
use crate::ui::media_strip::StripAction;
use crate::ui::{header, project_card};
use std::path::PathBuf;

/// Main application state.
pub struct FolioApp {
    config: AppConfig,

    /// Project table being displayed
    portfolio: Portfolio,

    /// Frames the user has revealed this session
    tracker: LoadTracker,

    /// Scroll state of each project's media strip
    carousels: Carousels,

    /// Decoded image textures
    assets: AssetCache,

    /// Last error or confirmation shown in the status bar
    status_message: Option<String>,
}

impl FolioApp {
    pub fn new(config: AppConfig, portfolio: Portfolio) -> Self {
        let assets = AssetCache::new(config.asset_dir.clone());
        log::info!(
            "Showing {} projects ({} embedded frames)",
            portfolio.projects.len(),
            portfolio.frame_count()
        );

        Self {
            config,
            portfolio,
            tracker: LoadTracker::new(),
            carousels: Carousels::new(),
            assets,
            status_message: None,
        }
    }

    /// Reveal a frame; it stays loaded for the rest of the session.
    fn reveal(&mut self, key: MediaKey) {
        if self.portfolio.fragment(key).is_some() {
            self.tracker.mark_loaded(key);
        }
    }

    /// Apply an action reported by a project's media strip.
    fn apply(&mut self, project_index: usize, action: StripAction) {
        match action {
            StripAction::Reveal(key) => self.reveal(key),
            StripAction::Page(direction) => {
                self.carousels.page(project_index, direction);
            }
        }
    }

    /// Replace the project table and start a fresh session for it.
    fn set_portfolio(&mut self, mut portfolio: Portfolio) {
        if let Some(name) = &self.config.site_name {
            portfolio.site_name = name.clone();
        }
        self.portfolio = portfolio;
        self.tracker = LoadTracker::new();
        self.carousels.clear();
        self.assets.reset();
    }

    /// Import a project table from a YAML or JSON file.
    fn open_portfolio(&mut self, path: PathBuf) {
        match serialization::import(&path) {
            Ok(portfolio) => {
                self.set_portfolio(portfolio);
                self.status_message = Some(format!("Opened {}", path.display()));
            }
            Err(e) => {
                log::error!("{:#}", e);
                self.status_message = Some(format!("{:#}", e));
            }
        }
    }

    /// Export the current project table.
    fn export_portfolio(&mut self, path: PathBuf) {
        match serialization::export(&self.portfolio, &path) {
            Ok(()) => self.status_message = Some(format!("Exported {}", path.display())),
            Err(e) => {
                log::error!("{:#}", e);
                self.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Projects...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Projects", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_portfolio(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Export Projects", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("projects.yaml")
                                .save_file()
                            {
                                self.export_portfolio(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("projects.json")
                                .save_file()
                            {
                                self.export_portfolio(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "Previews loaded: {}/{}",
                    self.tracker.loaded_count(),
                    self.portfolio.frame_count()
                ));
                if let Some(ref message) = self.status_message {
                    ui.separator();
                    ui.label(message);
                }
            });
        });
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.assets.update(ctx);

        self.menu_bar(ctx);
        self.status_bar(ctx);

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    header::show(ui, &self.portfolio);

                    for project_index in 0..self.portfolio.projects.len() {
                        ui.separator();
                        ui.add_space(8.0);

                        let card_actions = project_card::show(
                            ui,
                            project_index,
                            &self.portfolio,
                            &self.tracker,
                            &mut self.carousels,
                            &mut self.assets,
                        );
                        actions.extend(card_actions.into_iter().map(|a| (project_index, a)));

                        ui.add_space(8.0);
                    }
                });
        });

        for (project_index, action) in actions {
            self.apply(project_index, action);
        }

        // Keep frames coming while strips animate or images decode
        if self.carousels.any_animating() || self.assets.pending() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::carousel::ScrollDirection;
    use crate::models::catalog;

    fn app() -> FolioApp {
        FolioApp::new(AppConfig::default(), catalog::builtin())
    }

    #[test]
    fn test_reveal_marks_existing_media_only() {
        let mut app = app();
        app.reveal(MediaKey::new(2, 0));
        app.reveal(MediaKey::new(2, 0));
        app.reveal(MediaKey::new(99, 0));

        assert!(app.tracker.is_loaded(MediaKey::new(2, 0)));
        assert!(!app.tracker.is_loaded(MediaKey::new(2, 1)));
        assert!(!app.tracker.is_loaded(MediaKey::new(99, 0)));
        assert_eq!(app.tracker.loaded_count(), 1);
    }

    #[test]
    fn test_applies_every_reported_action() {
        let mut app = app();
        app.carousels.strip_mut(1).observe(0.0, 400.0, 1200.0);

        for action in [
            StripAction::Reveal(MediaKey::new(1, 0)),
            StripAction::Reveal(MediaKey::new(1, 2)),
            StripAction::Page(ScrollDirection::Right),
        ] {
            app.apply(1, action);
        }

        assert!(app.tracker.is_loaded(MediaKey::new(1, 0)));
        assert!(app.tracker.is_loaded(MediaKey::new(1, 2)));
        assert!(app.carousels.any_animating());
    }

    #[test]
    fn test_paging_a_project_without_strip_is_noop() {
        let portfolio = Portfolio::new(
            "Mixed",
            vec![crate::models::project::ProjectRecord::new("Text only")],
        );
        let mut app = FolioApp::new(AppConfig::default(), portfolio);

        app.apply(0, StripAction::Page(ScrollDirection::Right));

        assert_eq!(app.carousels.page(0, ScrollDirection::Left), None);
        assert!(!app.carousels.any_animating());
    }

    #[test]
    fn test_new_portfolio_starts_fresh_session() {
        let mut app = app();
        app.reveal(MediaKey::new(0, 0));
        app.carousels.strip_mut(0).observe(0.0, 500.0, 2500.0);

        app.set_portfolio(Portfolio::new("Other", Vec::new()));

        assert_eq!(app.portfolio.site_name, "Other");
        assert_eq!(app.tracker.loaded_count(), 0);
        assert_eq!(app.carousels.page(0, ScrollDirection::Right), None);
    }

    #[test]
    fn test_site_name_override_applies_to_opened_tables() {
        let config = AppConfig {
            site_name: Some("Pinned".to_string()),
            ..AppConfig::default()
        };
        let mut app = FolioApp::new(config, catalog::builtin());
        app.set_portfolio(Portfolio::new("Other", Vec::new()));
        assert_eq!(app.portfolio.site_name, "Pinned");
    }

    #[test]
    fn test_failed_open_keeps_current_table() {
        let mut app = app();
        app.reveal(MediaKey::new(0, 0));
        app.open_portfolio(PathBuf::from("/nonexistent/folio/projects.yaml"));

        assert_eq!(app.portfolio, catalog::builtin());
        assert!(app.tracker.is_loaded(MediaKey::new(0, 0)));
        assert!(app.status_message.is_some());
    }
}
