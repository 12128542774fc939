// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page header.
//!
//! This module shows the site name above the project list.

use crate::models::project::Portfolio;

/// Display the site name and a short summary line.
pub fn show(ui: &mut egui::Ui, portfolio: &Portfolio) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading(
            egui::RichText::new(&portfolio.site_name)
                .size(32.0)
                .strong(),
        );

        let summary = match portfolio.projects.len() {
            1 => "1 project".to_string(),
            n => format!("{} projects", n),
        };
        ui.label(egui::RichText::new(summary).weak());
        ui.add_space(12.0);
    });
}
