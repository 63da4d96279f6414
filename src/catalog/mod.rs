// ABOUTME: Validated food catalog used as reference data by the meal engine and grocery aggregator
// ABOUTME: Rejects duplicate foods and catalogs missing a required category at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Catalog
//!
//! The catalog is immutable after construction. Category views preserve catalog order,
//! which the meal engine's rotation indices depend on.

/// Catalog loading strategies
pub mod provider;

pub use provider::{
    provider_from_config, EmbeddedCatalogProvider, FileCatalogProvider, FoodCatalogProvider,
};

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{FoodCatalogItem, FoodCategory};
use std::collections::HashSet;

/// Catalog shipped with the crate
pub(crate) const EMBEDDED_CATALOG_JSON: &str = include_str!("../../data/food_catalog.json");

/// Ordered, validated collection of foods
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCatalog {
    items: Vec<FoodCatalogItem>,
}

impl FoodCatalog {
    /// Build a catalog from items
    ///
    /// # Errors
    ///
    /// Returns `DUPLICATE_FOOD` when two items share a name (case-insensitive),
    /// `INVALID_INPUT` for negative or non-finite nutrient values and
    /// `CATALOG_INCOMPLETE` when protein, carb, micronutrient or fat foods are missing
    pub fn new(items: Vec<FoodCatalogItem>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            validate_item(item)?;
            if !seen.insert(item.name.to_lowercase()) {
                return Err(AppError::new(
                    ErrorCode::DuplicateFood,
                    format!("Food '{}' appears more than once in the catalog", item.name),
                )
                .with_resource_id(item.name.clone()));
            }
        }

        for category in FoodCategory::REQUIRED {
            if !items.iter().any(|item| item.category == category) {
                return Err(AppError::data_integrity(format!(
                    "Food catalog has no {category} foods"
                ))
                .with_resource_id(category.as_str()));
            }
        }

        Ok(Self { items })
    }

    /// Parse and validate a JSON array of catalog items
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` for malformed JSON, otherwise the errors of [`Self::new`]
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let items: Vec<FoodCatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Catalog shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled catalog is corrupt
    pub fn embedded() -> AppResult<Self> {
        Self::from_json_str(EMBEDDED_CATALOG_JSON)
    }

    /// All foods in catalog order
    #[must_use]
    pub fn items(&self) -> &[FoodCatalogItem] {
        &self.items
    }

    /// Foods of one category in catalog order
    #[must_use]
    pub fn by_category(&self, category: FoodCategory) -> Vec<&FoodCatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Case-insensitive lookup by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FoodCatalogItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Declared package size of a food, if the food exists and declares one
    #[must_use]
    pub fn package_size_g(&self, name: &str) -> Option<u32> {
        self.find(name).and_then(|item| item.package_size_g)
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_item(item: &FoodCatalogItem) -> AppResult<()> {
    if item.name.trim().is_empty() {
        return Err(AppError::invalid_input("Catalog food name must not be empty"));
    }
    for (field, value) in [
        ("kcal", item.kcal),
        ("protein_g", item.protein_g),
        ("carbs_g", item.carbs_g),
        ("fat_g", item.fat_g),
        ("fiber_g", item.fiber_g),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Catalog food '{}' has invalid {field}: {value}",
                item.name
            ))
            .with_resource_id(item.name.clone()));
        }
    }
    if item.package_size_g == Some(0) {
        return Err(AppError::invalid_input(format!(
            "Catalog food '{}' declares a zero package size",
            item.name
        ))
        .with_resource_id(item.name.clone()));
    }
    Ok(())
}
