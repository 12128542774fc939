// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio serialization and deserialization.
//!
//! This module handles exporting and importing the project table in YAML
//! and JSON formats, so it can be authored outside the binary.

use crate::models::project::Portfolio;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// On-disk formats for a project table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Export a portfolio to YAML format.
pub fn export_yaml(data: &Portfolio, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a portfolio to JSON format.
pub fn export_json(data: &Portfolio, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a portfolio from YAML format.
pub fn import_yaml(path: &Path) -> Result<Portfolio> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Import a portfolio from JSON format.
pub fn import_json(path: &Path) -> Result<Portfolio> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

/// Export in the format implied by the path's extension.
pub fn export(data: &Portfolio, path: &Path) -> Result<()> {
    let result = match Format::from_path(path)? {
        Format::Yaml => export_yaml(data, path),
        Format::Json => export_json(data, path),
    };
    result.with_context(|| format!("Failed to export {}", path.display()))?;

    log::info!(
        "Exported {} projects to {}",
        data.projects.len(),
        path.display()
    );
    Ok(())
}

/// Import in the format implied by the path's extension.
pub fn import(path: &Path) -> Result<Portfolio> {
    let data = match Format::from_path(path)? {
        Format::Yaml => import_yaml(path),
        Format::Json => import_json(path),
    }
    .with_context(|| format!("Failed to import {}", path.display()))?;

    log::info!(
        "Imported {} projects from {}",
        data.projects.len(),
        path.display()
    );
    Ok(data)
}
