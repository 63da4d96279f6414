// ABOUTME: Food catalog providers for the embedded catalog and JSON files on disk
// ABOUTME: Selected from configuration so callers never hard-code the catalog source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FoodCatalog;
use crate::config::PlannerConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Source of a validated food catalog
pub trait FoodCatalogProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Load and validate the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read, parsed or validated
    fn load(&self) -> AppResult<FoodCatalog>;
}

/// Catalog compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogProvider;

impl FoodCatalogProvider for EmbeddedCatalogProvider {
    fn name(&self) -> &'static str {
        "embedded"
    }

    fn load(&self) -> AppResult<FoodCatalog> {
        FoodCatalog::embedded()
    }
}

/// Catalog read from a JSON array on disk
#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    /// Provider for the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this provider reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FoodCatalogProvider for FileCatalogProvider {
    fn name(&self) -> &'static str {
        "file"
    }

    fn load(&self) -> AppResult<FoodCatalog> {
        let path_text = self.path.display().to_string();
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AppError::new(
                ErrorCode::StorageError,
                format!("Failed to read food catalog {path_text}"),
            )
            .with_resource_id(path_text.clone())
            .with_source(e)
        })?;
        let catalog = FoodCatalog::from_json_str(&raw).map_err(|mut e| {
            e.message = format!("{path_text}: {}", e.message);
            e
        })?;
        info!(path = %path_text, foods = catalog.len(), "Loaded food catalog from file");
        Ok(catalog)
    }
}

/// Provider named by configuration: the catalog file if set, otherwise the embedded catalog
#[must_use]
pub fn provider_from_config(config: &PlannerConfig) -> Box<dyn FoodCatalogProvider> {
    config.catalog_path.as_ref().map_or_else(
        || Box::new(EmbeddedCatalogProvider) as Box<dyn FoodCatalogProvider>,
        |path| Box::new(FileCatalogProvider::new(path.clone())),
    )
}
