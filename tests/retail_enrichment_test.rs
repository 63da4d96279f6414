// ABOUTME: Integration tests for retail enrichment of generated plans
// ABOUTME: Uses in-memory product sources to check slot filling, failures, timeouts and concurrency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use recomp_planner::config::RetailConfig;
use recomp_planner::errors::{AppError, AppResult, ErrorCode};
use recomp_planner::models::RetailProduct;
use recomp_planner::planner::generate_meals;
use recomp_planner::retail::{
    collect_ingredient_names, normalize_retailers, RetailEnricher, RetailProductSource,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

fn product(ingredient: &str, retailer: &str) -> RetailProduct {
    RetailProduct {
        product_name: format!("{ingredient} (store brand)"),
        brand: "Store".to_owned(),
        retailer: Some(retailer.to_owned()),
        nutriments_per_100g: BTreeMap::new(),
        nutriscore_grade: Some("a".to_owned()),
        estimated_price: None,
        source: "fixture".to_owned(),
    }
}

/// Finds products for a fixed set of ingredients and records the retailers it was asked for
struct FixtureSource {
    known: Vec<&'static str>,
    seen_retailers: Mutex<Vec<Vec<String>>>,
    seen_countries: Mutex<Vec<String>>,
}

impl FixtureSource {
    fn new(known: Vec<&'static str>) -> Self {
        Self {
            known,
            seen_retailers: Mutex::new(Vec::new()),
            seen_countries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RetailProductSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn find_product(
        &self,
        ingredient: &str,
        country_code: &str,
        retailers: &[String],
    ) -> AppResult<Option<RetailProduct>> {
        self.seen_retailers.lock().unwrap().push(retailers.to_vec());
        self.seen_countries.lock().unwrap().push(country_code.to_owned());
        Ok(self
            .known
            .contains(&ingredient)
            .then(|| product(ingredient, &retailers[0])))
    }
}

/// Fails for one ingredient and stalls for another
struct FlakySource;

#[async_trait]
impl RetailProductSource for FlakySource {
    fn name(&self) -> &'static str {
        "flaky"
    }

    async fn find_product(
        &self,
        ingredient: &str,
        _country_code: &str,
        _retailers: &[String],
    ) -> AppResult<Option<RetailProduct>> {
        match ingredient {
            "Oats" => Err(AppError::external_service("flaky", "upstream returned 503")),
            "Tuna" => {
                sleep(Duration::from_secs(5)).await;
                Ok(Some(product(ingredient, "aldi")))
            }
            _ => Ok(Some(product(ingredient, "aldi"))),
        }
    }
}

/// Tracks the highest number of lookups in flight at once
struct CountingSource {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

#[async_trait]
impl RetailProductSource for CountingSource {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn find_product(
        &self,
        _ingredient: &str,
        _country_code: &str,
        _retailers: &[String],
    ) -> AppResult<Option<RetailProduct>> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        sleep(Duration::from_millis(20)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(None)
    }
}

fn retail_config(max_concurrency: usize, timeout_ms: u64) -> RetailConfig {
    RetailConfig {
        enabled: true,
        max_concurrency,
        timeout_ms,
        ..RetailConfig::default()
    }
}

#[tokio::test]
async fn test_enrich_fills_matching_slots() {
    common::init_test_logging();
    let plan = common::sample_plan();
    let mut response = generate_meals(&plan, &common::catalog(), 500).unwrap();

    let source = Arc::new(FixtureSource::new(vec!["Oats", "Black Coffee"]));
    let enricher = RetailEnricher::new(source.clone(), &retail_config(3, 1000));
    let matched = enricher
        .enrich(&mut response, plan.country_code(), plan.preferred_retailers())
        .await;
    assert_eq!(matched, 2);

    for allocation in response.meal_plan.allocations() {
        let expected = ["Oats", "Black Coffee"].contains(&allocation.ingredient.as_str());
        assert_eq!(allocation.retail_product.is_some(), expected, "{}", allocation.ingredient);
    }
    let oats = response
        .grocery_list
        .iter()
        .find(|item| item.ingredient == "Oats")
        .unwrap();
    assert_eq!(oats.retail_product.as_ref().unwrap().retailer.as_deref(), Some("aldi"));

    // One lookup per distinct ingredient
    let names = collect_ingredient_names(&response.meal_plan, &response.grocery_list);
    assert_eq!(source.seen_countries.lock().unwrap().len(), names.len());
    assert!(source.seen_countries.lock().unwrap().iter().all(|c| c == "DE"));
}

#[tokio::test]
async fn test_blank_retailers_fall_back_to_defaults() {
    let source = Arc::new(FixtureSource::new(vec!["Oats"]));
    let enricher = RetailEnricher::new(source.clone(), &retail_config(1, 1000));
    let retailers = vec!["  ".to_owned(), String::new()];
    let found = enricher
        .lookup(vec!["Oats".to_owned()], "GB", &retailers)
        .await;

    assert_eq!(found.len(), 1);
    assert_eq!(
        source.seen_retailers.lock().unwrap()[0],
        ["aldi", "lidl", "tesco"]
    );
}

#[tokio::test]
async fn test_failures_and_timeouts_leave_slots_empty() {
    common::init_test_logging();
    let enricher = RetailEnricher::new(Arc::new(FlakySource), &retail_config(4, 100));
    let found = enricher
        .lookup(
            vec!["Oats".to_owned(), "Tuna".to_owned(), "Apple".to_owned()],
            "DE",
            &[],
        )
        .await;

    assert_eq!(found.keys().map(String::as_str).collect::<Vec<_>>(), ["Apple"]);
}

#[tokio::test]
async fn test_slow_lookup_reports_timeout_code() {
    let enricher = RetailEnricher::new(Arc::new(FlakySource), &retail_config(1, 50));

    let err = enricher.lookup_one("Tuna", "DE", &[]).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceTimeout);
    assert_eq!(err.context.resource_id.as_deref(), Some("Tuna"));
    assert_eq!(err.context.details["timeout_ms"], 50);

    let err = enricher.lookup_one("Oats", "DE", &[]).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_lookups_respect_concurrency_limit() {
    let source = Arc::new(CountingSource {
        in_flight: AtomicUsize::new(0),
        peak: AtomicUsize::new(0),
    });
    let enricher = RetailEnricher::new(source.clone(), &retail_config(2, 1000));
    let ingredients = (0..10).map(|i| format!("food-{i}")).collect();
    let found = enricher.lookup(ingredients, "DE", &[]).await;

    assert!(found.is_empty());
    let peak = source.peak.load(Ordering::SeqCst);
    assert!((1..=2).contains(&peak), "peak concurrency {peak}");
}

#[test]
fn test_normalize_retailers() {
    let defaults = vec!["aldi".to_owned()];
    assert_eq!(
        normalize_retailers(&[" Lidl ".to_owned(), "TESCO".to_owned()], &defaults),
        ["lidl", "tesco"]
    );
    assert_eq!(normalize_retailers(&[], &defaults), ["aldi"]);
}
