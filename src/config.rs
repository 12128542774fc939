// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings are read from an optional `folio.yaml` in the working
//! directory. Every field has a default, so a missing file or a partial one
//! is fine; a file that does not parse is reported as an error.

use crate::io::serialization;
use crate::models::{catalog, project::Portfolio};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the site name of the project table.
    pub site_name: Option<String>,
    /// Directory that relative image sources are resolved against.
    pub asset_dir: PathBuf,
    /// YAML or JSON project table; the built-in table is used when unset.
    pub projects_file: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_name: None,
            asset_dir: PathBuf::from("assets"),
            projects_file: None,
            window_width: 1280.0,
            window_height: 900.0,
        }
    }
}

impl AppConfig {
    /// Load from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No {} found, using default settings", path.display());
            return Ok(Self::default());
        }

        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// The project table to display at startup.
    pub fn portfolio(&self) -> Result<Portfolio> {
        let mut portfolio = match &self.projects_file {
            Some(path) => serialization::import(path)?,
            None => catalog::builtin(),
        };

        if let Some(name) = &self.site_name {
            portfolio.site_name = name.clone();
        }
        Ok(portfolio)
    }
}
