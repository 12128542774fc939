// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Horizontally paged media strip.
//!
//! Each entry takes exactly one viewport width, so a page request moves one
//! entry at a time. Frames stay as placeholders until the user reveals them.
//! Both kinds of request are reported back as [`StripAction`]s. A revealed
//! frame takes its authored height, and the strip grows to fit it.

use super::assets::{AssetCache, AssetState};
use crate::media::carousel::{ScrollDirection, StripState};
use crate::media::classifier;
use crate::media::tracker::{LoadTracker, MediaKey};
use crate::models::project::{MediaView, Portfolio};

/// Minimum height of the strip viewport.
pub const STRIP_HEIGHT: f32 = 420.0;

const NAV_BUTTON_WIDTH: f32 = 28.0;

/// Result of strip interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripAction {
    Reveal(MediaKey),
    Page(ScrollDirection),
}

/// Height of the live embed region for an entry, if it is a revealed frame.
///
/// Frames without a usable `height` attribute get the minimum strip height.
pub fn embed_height(view: MediaView<'_>, fragment: &str) -> Option<f32> {
    if view.is_frame && view.loaded {
        Some(classifier::frame_height(fragment).unwrap_or(STRIP_HEIGHT))
    } else {
        None
    }
}

/// Height of a project's strip: the tallest revealed embed, at least [`STRIP_HEIGHT`].
pub fn strip_height(portfolio: &Portfolio, project_index: usize, tracker: &LoadTracker) -> f32 {
    portfolio
        .media_keys(project_index)
        .filter_map(|key| {
            let view = portfolio.media_view(key, tracker)?;
            embed_height(view, portfolio.fragment(key)?)
        })
        .fold(STRIP_HEIGHT, f32::max)
}

/// Display the media strip of one project.
pub fn show(
    ui: &mut egui::Ui,
    project_index: usize,
    portfolio: &Portfolio,
    tracker: &LoadTracker,
    strip: &mut StripState,
    assets: &mut AssetCache,
) -> Vec<StripAction> {
    let mut actions = Vec::new();
    let forced_offset = strip.tick(ui.input(|i| i.time));
    let height = strip_height(portfolio, project_index, tracker);

    ui.horizontal(|ui| {
        let nav_size = egui::vec2(NAV_BUTTON_WIDTH, height);
        let can_go_left = strip.settled_offset() > 0.0;
        let can_go_right = strip.settled_offset() < strip.max_offset();

        if nav_button(ui, nav_size, "◀", can_go_left) {
            actions.push(StripAction::Page(ScrollDirection::Left));
        }

        let spacing = ui.spacing().item_spacing.x;
        let viewport_width = (ui.available_width() - NAV_BUTTON_WIDTH - spacing).max(0.0);
        let item_size = egui::vec2(viewport_width, height);

        ui.allocate_ui(item_size, |ui| {
            let mut area = egui::ScrollArea::horizontal()
                .id_source(("media-strip", project_index))
                .max_width(viewport_width)
                .auto_shrink([false, true]);
            if let Some(offset) = forced_offset {
                area = area.horizontal_scroll_offset(offset);
            }

            let output = area.show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    for key in portfolio.media_keys(project_index) {
                        let (Some(view), Some(fragment)) =
                            (portfolio.media_view(key, tracker), portfolio.fragment(key))
                        else {
                            continue;
                        };
                        if show_item(ui, item_size, view, fragment, assets) {
                            actions.push(StripAction::Reveal(key));
                        }
                    }
                });
            });

            strip.observe(
                output.state.offset.x,
                output.inner_rect.width(),
                output.content_size.x,
            );
        });

        if nav_button(ui, nav_size, "▶", can_go_right) {
            actions.push(StripAction::Page(ScrollDirection::Right));
        }
    });

    actions
}

fn nav_button(ui: &mut egui::Ui, size: egui::Vec2, label: &str, enabled: bool) -> bool {
    ui.add_enabled_ui(enabled, |ui| ui.add_sized(size, egui::Button::new(label)))
        .inner
        .clicked()
}

/// Draw one entry. Returns true if the user asked to reveal it.
fn show_item(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    view: MediaView<'_>,
    fragment: &str,
    assets: &mut AssetCache,
) -> bool {
    let mut reveal = false;

    ui.allocate_ui(size, |ui| {
        ui.set_width(size.x);
        ui.set_height(size.y);

        ui.vertical_centered(|ui| {
            if view.src.is_empty() {
                ui.add_space(size.y / 2.0 - 10.0);
                ui.label(egui::RichText::new("No source").weak());
            } else if let Some(height) = embed_height(view, fragment) {
                show_embed(ui, egui::vec2(size.x, height), view.src);
            } else if view.is_frame {
                reveal = show_placeholder(ui, size, view.src);
            } else {
                show_image(ui, size, view.src, fragment, assets);
            }
        });
    });

    reveal
}

/// Live embed region, sized to the frame's authored height.
fn show_embed(ui: &mut egui::Ui, size: egui::Vec2, src: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(size.x - 16.0);
        ui.set_height(size.y - 16.0);
        ui.vertical_centered(|ui| {
            ui.add_space(size.y / 3.0);
            ui.label(egui::RichText::new("Live embed").strong());
            ui.hyperlink_to(src, src);
        });
    });
}

/// Placeholder for a frame that has not been revealed. Returns true on reveal.
fn show_placeholder(ui: &mut egui::Ui, size: egui::Vec2, src: &str) -> bool {
    let mut reveal = false;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(size.x - 16.0);
        ui.set_height(size.y - 16.0);
        ui.vertical_centered(|ui| {
            ui.add_space(size.y / 3.0);
            ui.label(egui::RichText::new("Interactive preview").strong());
            ui.label(egui::RichText::new(src).weak());
            ui.add_space(8.0);
            if ui.button("Load interactive preview").clicked() {
                reveal = true;
            }
        });
    });

    reveal
}

fn show_image(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    src: &str,
    fragment: &str,
    assets: &mut AssetCache,
) {
    match assets.texture(src) {
        AssetState::Ready(texture) => {
            ui.add(
                egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                    .fit_to_exact_size(size)
                    .maintain_aspect_ratio(true),
            );
        }
        AssetState::Loading => {
            ui.add_space(size.y / 2.0 - 10.0);
            ui.spinner();
        }
        AssetState::Failed => {
            let alt = classifier::extract_attribute(fragment, "alt").unwrap_or(src);
            ui.add_space(size.y / 2.0 - 10.0);
            ui.label(egui::RichText::new(alt).italics().weak());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::ProjectRecord;

    fn portfolio() -> Portfolio {
        Portfolio::new(
            "Strip",
            vec![ProjectRecord::new("Demo").with_media([
                "<iframe src=\"https://a.test/\" height=\"1200\"></iframe>",
                "<iframe src=\"https://b.test/\" height=\"600\"></iframe>",
                "<iframe src=\"https://c.test/\"></iframe>",
                "<img src=\"p.png\">",
            ])],
        )
    }

    #[test]
    fn test_embed_height_only_for_revealed_frames() {
        let frame = "<iframe src=\"x\" height=\"1600\"></iframe>";
        let hidden = MediaView { is_frame: true, src: "x", loaded: false };
        let shown = MediaView { is_frame: true, src: "x", loaded: true };
        let image = MediaView { is_frame: false, src: "p.png", loaded: true };

        assert_eq!(embed_height(hidden, frame), None);
        assert_eq!(embed_height(shown, frame), Some(1600.0));
        assert_eq!(embed_height(shown, "<iframe src=\"x\">"), Some(STRIP_HEIGHT));
        assert_eq!(embed_height(image, "<img src=\"p.png\" height=\"900\">"), None);
    }

    #[test]
    fn test_strip_grows_to_tallest_revealed_frame() {
        let portfolio = portfolio();
        let mut tracker = LoadTracker::new();
        assert_eq!(strip_height(&portfolio, 0, &tracker), STRIP_HEIGHT);

        tracker.mark_loaded(MediaKey::new(0, 1));
        assert_eq!(strip_height(&portfolio, 0, &tracker), 600.0);

        tracker.mark_loaded(MediaKey::new(0, 2));
        tracker.mark_loaded(MediaKey::new(0, 0));
        assert_eq!(strip_height(&portfolio, 0, &tracker), 1200.0);

        // Images never change the strip height
        tracker.mark_loaded(MediaKey::new(0, 3));
        assert_eq!(strip_height(&portfolio, 0, &tracker), 1200.0);
        assert_eq!(strip_height(&portfolio, 5, &tracker), STRIP_HEIGHT);
    }
}
