// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project card: title, description and media strip of one project.

use super::assets::{AssetCache, AssetState};
use super::media_strip::{self, StripAction};
use crate::media::carousel::Carousels;
use crate::media::tracker::LoadTracker;
use crate::models::project::{Inline, Portfolio};

/// Display one project card.
pub fn show(
    ui: &mut egui::Ui,
    project_index: usize,
    portfolio: &Portfolio,
    tracker: &LoadTracker,
    carousels: &mut Carousels,
    assets: &mut AssetCache,
) -> Vec<StripAction> {
    let Some(project) = portfolio.projects.get(project_index) else {
        return Vec::new();
    };

    let title = egui::RichText::new(&project.title).size(22.0).strong();
    match &project.link {
        Some(link) => {
            ui.hyperlink_to(title, link);
        }
        None => {
            ui.label(title);
        }
    }
    ui.add_space(6.0);

    show_description(ui, &project.description, assets);

    if !project.has_media() {
        return Vec::new();
    }

    // Only projects with a media strip get a scroll surface
    let strip = carousels.strip_mut(project_index);
    ui.add_space(10.0);
    media_strip::show(ui, project_index, portfolio, tracker, strip, assets)
}

/// Render description runs as wrapped text with links and inline images.
fn show_description(ui: &mut egui::Ui, description: &[Inline], assets: &mut AssetCache) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        let line_height = ui.text_style_height(&egui::TextStyle::Body);

        for run in description {
            match run {
                Inline::Text { text } => {
                    ui.label(text);
                }
                Inline::Link { text, href } => {
                    ui.hyperlink_to(text, href);
                }
                Inline::Image { src, alt } => match assets.texture(src) {
                    AssetState::Ready(texture) => {
                        ui.add(
                            egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                                .fit_to_exact_size(egui::vec2(f32::INFINITY, line_height * 2.0))
                                .maintain_aspect_ratio(true),
                        );
                    }
                    // Alt text stands in until (or unless) the image decodes
                    AssetState::Loading | AssetState::Failed => {
                        ui.label(egui::RichText::new(alt).italics());
                    }
                },
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::carousel::ScrollDirection;
    use crate::models::project::ProjectRecord;

    fn render(portfolio: &Portfolio, carousels: &mut Carousels) -> Vec<StripAction> {
        let tracker = LoadTracker::new();
        let mut assets = AssetCache::new("assets");
        let mut actions = Vec::new();

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                for project_index in 0..portfolio.projects.len() {
                    actions.extend(show(
                        ui,
                        project_index,
                        portfolio,
                        &tracker,
                        carousels,
                        &mut assets,
                    ));
                }
            });
        });
        actions
    }

    #[test]
    fn test_only_projects_with_media_get_a_strip() {
        let portfolio = Portfolio::new(
            "Cards",
            vec![
                ProjectRecord::new("Text only"),
                ProjectRecord::new("With media")
                    .with_media(["<iframe src=\"https://a.test/\"></iframe>"]),
            ],
        );
        let mut carousels = Carousels::new();

        let actions = render(&portfolio, &mut carousels);

        assert!(actions.is_empty());
        assert_eq!(carousels.page(0, ScrollDirection::Right), None);
        assert!(carousels.page(1, ScrollDirection::Right).is_some());
    }

    #[test]
    fn test_media_less_project_never_leaves_an_animation_running() {
        let portfolio = Portfolio::new("Cards", vec![ProjectRecord::new("Text only")]);
        let mut carousels = Carousels::new();

        render(&portfolio, &mut carousels);
        carousels.page(0, ScrollDirection::Left);
        carousels.page(0, ScrollDirection::Right);

        assert!(!carousels.any_animating());
    }

    #[test]
    fn test_out_of_range_project_renders_nothing() {
        let portfolio = Portfolio::new("Cards", Vec::new());
        let mut carousels = Carousels::new();
        let mut assets = AssetCache::new("assets");
        let tracker = LoadTracker::new();

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let actions = show(ui, 3, &portfolio, &tracker, &mut carousels, &mut assets);
                assert!(actions.is_empty());
            });
        });
        assert_eq!(carousels.page(3, ScrollDirection::Right), None);
    }
}
