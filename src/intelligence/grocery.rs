// ABOUTME: Grocery aggregation turning a week of meals into package counts per ingredient
// ABOUTME: Sums grams across all meals, rounds up to whole packages and reports leftovers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::FoodCatalog;
use crate::errors::{AppError, AppResult};
use crate::models::{GroceryItem, WeeklyMealPlan};
use std::collections::BTreeMap;
use tracing::debug;

/// Shopping list for a week, sorted by ingredient name
///
/// Package size comes from the catalog, or `default_package_g` for foods that declare none
/// or are not in the catalog. At least one package is bought per ingredient.
///
/// # Errors
///
/// Returns a configuration error when `default_package_g` is zero
pub fn build_grocery_list(
    plan: &WeeklyMealPlan,
    catalog: &FoodCatalog,
    default_package_g: u32,
) -> AppResult<Vec<GroceryItem>> {
    if default_package_g == 0 {
        return Err(AppError::config("default package size must be greater than 0"));
    }
    let mut totals: BTreeMap<&str, u32> = BTreeMap::new();
    for allocation in plan.allocations() {
        *totals.entry(allocation.ingredient.as_str()).or_insert(0) += allocation.grams;
    }

    let items: Vec<GroceryItem> = totals
        .into_iter()
        .map(|(ingredient, needed)| {
            let package = catalog
                .package_size_g(ingredient)
                .unwrap_or(default_package_g);
            let packages = needed.div_ceil(package).max(1);
            GroceryItem {
                ingredient: ingredient.to_owned(),
                total_needed_g: needed,
                package_size_g: package,
                packages_to_buy: packages,
                leftover_g: packages * package - needed,
                retail_product: None,
            }
        })
        .collect();

    debug!(items = items.len(), "Grocery list aggregated");
    Ok(items)
}
