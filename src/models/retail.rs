// ABOUTME: Retail product record attached to ingredients by an enrichment collaborator
// ABOUTME: Always absent in planner output until a separate lookup pass fills it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Purchasable product matched to a catalog ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailProduct {
    /// Product name as sold
    pub product_name: String,
    /// Brand
    pub brand: String,
    /// Preferred retailer stocking the product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,
    /// Nutriments per 100 g keyed by `protein_g`, `carbs_g`, `fat_g`, `kcal`
    #[serde(default)]
    pub nutriments_per_100g: BTreeMap<String, f64>,
    /// Nutri-Score grade (a-e)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutriscore_grade: Option<String>,
    /// Free-form price text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<String>,
    /// Data source name
    pub source: String,
}
