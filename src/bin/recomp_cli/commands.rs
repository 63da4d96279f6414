// ABOUTME: Subcommand handlers for the recomp CLI
// ABOUTME: Load inputs, call the planner and write pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recomp_planner::{
    catalog::{provider_from_config, FileCatalogProvider, FoodCatalog, FoodCatalogProvider},
    config::PlannerConfig,
    errors::{AppError, AppResult, ErrorCode},
    models::{PlanInput, WeeklyCheckinRequest},
    planner,
};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn read_plan_input(path: &Path) -> AppResult<PlanInput> {
    let path_text = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("Failed to read plan input {path_text}"),
        )
        .with_resource_id(path_text.clone())
        .with_source(e)
    })?;
    // Validation failures surface as serde errors; keep their message for the user
    serde_json::from_str(&raw)
        .map_err(|e| AppError::invalid_input(format!("{path_text}: {e}")).with_resource_id(path_text))
}

fn load_catalog(config: &PlannerConfig, path: Option<PathBuf>) -> AppResult<FoodCatalog> {
    let provider: Box<dyn FoodCatalogProvider> = match path {
        Some(path) => Box::new(FileCatalogProvider::new(path)),
        None => provider_from_config(config),
    };
    info!(provider = provider.name(), "Loading food catalog");
    provider.load()
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn warn_if_retail_requested(config: &PlannerConfig) {
    if config.retail.enabled {
        warn!("Retail enrichment is enabled but the CLI has no product source; skipping");
    }
}

pub fn plan(input: &Path) -> AppResult<()> {
    let plan = read_plan_input(input)?;
    print_json(&planner::calculate_plan(&plan))
}

pub fn meals(config: &PlannerConfig, input: &Path, catalog: Option<PathBuf>) -> AppResult<()> {
    let plan = read_plan_input(input)?;
    let catalog = load_catalog(config, catalog)?;
    warn_if_retail_requested(config);
    let response = planner::generate_meals(&plan, &catalog, config.default_package_g)?;
    print_json(&response)
}

pub fn grocery(config: &PlannerConfig, input: &Path, catalog: Option<PathBuf>) -> AppResult<()> {
    let plan = read_plan_input(input)?;
    let catalog = load_catalog(config, catalog)?;
    warn_if_retail_requested(config);
    let response = planner::generate_meals(&plan, &catalog, config.default_package_g)?;
    print_json(&response.grocery_list)
}

pub fn projection(input: &Path) -> AppResult<()> {
    let plan = read_plan_input(input)?;
    print_json(&planner::projection_for(&plan))
}

pub fn checkin(
    previous_weight_kg: f64,
    current_weight_kg: f64,
    previous_calorie_target: i64,
    waist_cm: Option<f64>,
) -> AppResult<()> {
    let request = WeeklyCheckinRequest {
        previous_weight_kg,
        current_weight_kg,
        previous_calorie_target,
        waist_cm,
    };
    print_json(&planner::weekly_checkin(&request)?)
}
