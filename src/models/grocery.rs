// ABOUTME: Grocery list entry with package rounding
// ABOUTME: Produced by the grocery aggregator from a generated week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::retail::RetailProduct;
use serde::{Deserialize, Serialize};

/// Purchasable quantity of one ingredient for the week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Catalog food name
    pub ingredient: String,
    /// Grams used across the week
    pub total_needed_g: u32,
    /// Grams per package
    pub package_size_g: u32,
    /// Smallest package count covering the need (at least 1)
    pub packages_to_buy: u32,
    /// Grams bought but not used
    pub leftover_g: u32,
    /// Retail product filled in by an enrichment pass after planning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_product: Option<RetailProduct>,
}
