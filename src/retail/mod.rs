// ABOUTME: Retail enrichment seam attaching purchasable products to planned ingredients
// ABOUTME: Bounded-concurrency lookups with per-lookup timeouts; failures leave the slot empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Retail Enrichment
//!
//! The planner never looks up products itself. After a plan is generated, a
//! [`RetailEnricher`] asks a [`RetailProductSource`] for one product per distinct
//! ingredient and writes the answers into the optional `retail_product` slots. A lookup
//! that errors or exceeds its timeout is logged and treated as "no product".

/// Ranking of raw search results
pub mod matching;

pub use matching::{best_product, CandidateNutriments, ProductCandidate};

use crate::config::RetailConfig;
use crate::errors::{AppError, AppResult};
use crate::logging::PlanLogger;
use crate::models::{GenerateMealsResponse, GroceryItem, RetailProduct, WeeklyMealPlan};
use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{info, warn};

/// Product lookup backend (product database, retailer API, fixture)
#[async_trait]
pub trait RetailProductSource: Send + Sync {
    /// Short name recorded as the product source
    fn name(&self) -> &'static str;

    /// Best product for an ingredient in a country, preferring the given retailers
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails; the enricher treats it as no match
    async fn find_product(
        &self,
        ingredient: &str,
        country_code: &str,
        retailers: &[String],
    ) -> AppResult<Option<RetailProduct>>;
}

/// Trim and lowercase retailer names, dropping blanks; falls back to `defaults` when empty
#[must_use]
pub fn normalize_retailers(retailers: &[String], defaults: &[String]) -> Vec<String> {
    let normalized: Vec<String> = retailers
        .iter()
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .collect();
    if normalized.is_empty() {
        defaults.to_vec()
    } else {
        normalized
    }
}

/// Distinct ingredient names across meals and groceries, sorted
#[must_use]
pub fn collect_ingredient_names(
    plan: &WeeklyMealPlan,
    grocery_list: &[GroceryItem],
) -> Vec<String> {
    plan.allocations()
        .map(|allocation| allocation.ingredient.as_str())
        .chain(grocery_list.iter().map(|item| item.ingredient.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Write found products into every matching ingredient and grocery slot
///
/// Ingredients without an entry get `None`, so re-applying a smaller mapping clears stale
/// products.
pub fn apply_retail_products(
    plan: &mut WeeklyMealPlan,
    grocery_list: &mut [GroceryItem],
    products: &BTreeMap<String, RetailProduct>,
) {
    for allocation in plan.allocations_mut() {
        allocation.retail_product = products.get(&allocation.ingredient).cloned();
    }
    for item in grocery_list {
        item.retail_product = products.get(&item.ingredient).cloned();
    }
}

/// Fans out product lookups for a generated plan
#[derive(Clone)]
pub struct RetailEnricher {
    source: Arc<dyn RetailProductSource>,
    max_concurrency: usize,
    lookup_timeout: Duration,
    default_retailers: Vec<String>,
}

impl RetailEnricher {
    /// Enricher over `source` using the concurrency, timeout and default retailers in `config`
    #[must_use]
    pub fn new(source: Arc<dyn RetailProductSource>, config: &RetailConfig) -> Self {
        Self {
            source,
            max_concurrency: config.max_concurrency.max(1),
            lookup_timeout: config.timeout(),
            default_retailers: config.default_retailers.clone(),
        }
    }

    /// Single lookup bounded by the configured timeout
    ///
    /// # Errors
    ///
    /// Returns the source's error, or `EXTERNAL_SERVICE_TIMEOUT` when the source does not
    /// answer in time
    pub async fn lookup_one(
        &self,
        ingredient: &str,
        country_code: &str,
        retailers: &[String],
    ) -> AppResult<Option<RetailProduct>> {
        timeout(
            self.lookup_timeout,
            self.source.find_product(ingredient, country_code, retailers),
        )
        .await
        .map_err(|_| {
            AppError::external_timeout(
                self.source.name(),
                self.lookup_timeout.as_millis() as u64,
            )
            .with_resource_id(ingredient)
        })?
    }

    /// Look up every ingredient; only found products are returned
    pub async fn lookup(
        &self,
        ingredients: Vec<String>,
        country_code: &str,
        retailers: &[String],
    ) -> BTreeMap<String, RetailProduct> {
        let retailers = normalize_retailers(retailers, &self.default_retailers);
        let retailers = retailers.as_slice();

        stream::iter(ingredients)
            .map(|ingredient| async move {
                let started = Instant::now();
                let product = match self.lookup_one(&ingredient, country_code, retailers).await {
                    Ok(product) => product,
                    Err(e) => {
                        warn!(
                            ingredient = %ingredient,
                            source = self.source.name(),
                            code = ?e.code,
                            error = %e,
                            "Retail lookup failed"
                        );
                        None
                    }
                };
                PlanLogger::log_retail_lookup(
                    &ingredient,
                    product.is_some(),
                    started.elapsed().as_millis() as u64,
                );
                (ingredient, product)
            })
            .buffer_unordered(self.max_concurrency)
            .filter_map(|(ingredient, product)| async move { product.map(|p| (ingredient, p)) })
            .collect()
            .await
    }

    /// Enrich a generated plan in place; returns how many ingredients got a product
    pub async fn enrich(
        &self,
        response: &mut GenerateMealsResponse,
        country_code: &str,
        retailers: &[String],
    ) -> usize {
        let names = collect_ingredient_names(&response.meal_plan, &response.grocery_list);
        let requested = names.len();
        let products = self.lookup(names, country_code, retailers).await;
        apply_retail_products(&mut response.meal_plan, &mut response.grocery_list, &products);

        info!(
            source = self.source.name(),
            requested,
            matched = products.len(),
            "Retail enrichment finished"
        );
        products.len()
    }
}
