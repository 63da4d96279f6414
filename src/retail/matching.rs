// ABOUTME: Ranking of raw retail search results into a single product per ingredient
// ABOUTME: Prefers preferred-retailer stock, then better Nutri-Score, then a known price
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Product matching for [`RetailProductSource`](super::RetailProductSource) implementations.
//!
//! The candidate shape follows the Open Food Facts search payload so a source can
//! deserialize search results directly and hand them to [`best_product`].

use crate::models::RetailProduct;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Nutriments per 100 g as reported by the product database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateNutriments {
    /// Protein (g)
    #[serde(default, rename = "proteins_100g")]
    pub proteins: Option<f64>,
    /// Carbohydrates (g)
    #[serde(default, rename = "carbohydrates_100g")]
    pub carbohydrates: Option<f64>,
    /// Fat (g)
    #[serde(default, rename = "fat_100g")]
    pub fat: Option<f64>,
    /// Energy (kcal)
    #[serde(default, rename = "energy-kcal_100g")]
    pub energy_kcal: Option<f64>,
}

/// One raw search result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCandidate {
    /// Product name
    #[serde(default)]
    pub product_name: Option<String>,
    /// Comma-separated brands
    #[serde(default)]
    pub brands: Option<String>,
    /// Free-text store list
    #[serde(default)]
    pub stores: Option<String>,
    /// Normalized store tags
    #[serde(default)]
    pub stores_tags: Vec<String>,
    /// Nutri-Score grade (a-e)
    #[serde(default)]
    pub nutriscore_grade: Option<String>,
    /// Price text
    #[serde(default)]
    pub price: Option<String>,
    /// Nutriments per 100 g
    #[serde(default)]
    pub nutriments: CandidateNutriments,
}

impl ProductCandidate {
    fn stores_text(&self) -> String {
        let stores = self.stores.as_deref().unwrap_or_default();
        format!("{stores} {}", self.stores_tags.join(" ")).to_lowercase()
    }

    fn preferred_retailer<'r>(&self, retailers: &'r [String]) -> Option<&'r str> {
        let stores = self.stores_text();
        retailers
            .iter()
            .find(|retailer| stores.contains(&retailer.to_lowercase()))
            .map(String::as_str)
    }

    fn score(&self, retailers: &[String]) -> (u8, u8, u8) {
        let retailer_hit = u8::from(self.preferred_retailer(retailers).is_some());
        let nutri_rank = match self
            .nutriscore_grade
            .as_deref()
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("a") => 5,
            Some("b") => 4,
            Some("c") => 3,
            Some("d") => 2,
            Some("e") => 1,
            _ => 0,
        };
        let has_price = u8::from(self.price.as_deref().is_some_and(|p| !p.is_empty()));
        (retailer_hit, nutri_rank, has_price)
    }

    /// Convert into the record attached to ingredients
    #[must_use]
    pub fn into_retail_product(self, retailers: &[String], source: &str) -> RetailProduct {
        let retailer = self.preferred_retailer(retailers).map(str::to_owned);
        let nutriments = [
            ("protein_g", self.nutriments.proteins),
            ("carbs_g", self.nutriments.carbohydrates),
            ("fat_g", self.nutriments.fat),
            ("kcal", self.nutriments.energy_kcal),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.unwrap_or(0.0)))
        .collect::<BTreeMap<_, _>>();

        RetailProduct {
            product_name: non_blank(self.product_name)
                .unwrap_or_else(|| "Unknown Product".to_owned()),
            brand: non_blank(self.brands).unwrap_or_else(|| "Unknown Brand".to_owned()),
            retailer,
            nutriments_per_100g: nutriments,
            nutriscore_grade: non_blank(self.nutriscore_grade),
            estimated_price: non_blank(self.price),
            source: source.to_owned(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Highest-ranked candidate; ties keep the first candidate in search order
#[must_use]
pub fn best_product(
    candidates: Vec<ProductCandidate>,
    retailers: &[String],
    source: &str,
) -> Option<RetailProduct> {
    candidates
        .into_iter()
        .min_by_key(|candidate| Reverse(candidate.score(retailers)))
        .map(|candidate| candidate.into_retail_product(retailers, source))
}
