// ABOUTME: Recomp CLI - command-line front end for the body-recomposition planner
// ABOUTME: Reads plan inputs from JSON files and prints plans, meals, groceries and check-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Calorie and macro targets with a weight projection
//! recomp-cli plan --input profile.json
//!
//! # A full week of meals plus the grocery list
//! recomp-cli meals --input profile.json
//!
//! # Same, using a custom food catalog
//! recomp-cli meals --input profile.json --catalog foods.json
//!
//! # Grocery list only
//! recomp-cli grocery --input profile.json
//!
//! # Weekly weight targets and monthly milestones
//! recomp-cli projection --input profile.json
//!
//! # Weekly check-in adjustment
//! recomp-cli checkin --previous-weight 80.0 --current-weight 79.4 --previous-target 2200
//! ```
//!
//! Exits with status 2 when the input fails validation and 1 on any other error.

mod commands;

use clap::{Parser, Subcommand};
use recomp_planner::constants::service_names;
use recomp_planner::{config::PlannerConfig, errors::AppResult, logging::LoggingConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "recomp-cli",
    about = "Body-recomposition nutrition planner",
    long_about = "Computes calorie and macro targets, weekly meal plans, grocery lists, weight projections and weekly check-in adjustments."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Body composition, calorie targets, macro targets and projection
    Plan {
        /// Plan input JSON file
        #[arg(long)]
        input: PathBuf,
    },

    /// Weekly meal plan with grocery list
    Meals {
        /// Plan input JSON file
        #[arg(long)]
        input: PathBuf,

        /// Food catalog JSON file (defaults to `RECOMP_CATALOG_PATH` or the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Grocery list for the generated week
    Grocery {
        /// Plan input JSON file
        #[arg(long)]
        input: PathBuf,

        /// Food catalog JSON file (defaults to `RECOMP_CATALOG_PATH` or the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Weekly weight targets and monthly milestones
    Projection {
        /// Plan input JSON file
        #[arg(long)]
        input: PathBuf,
    },

    /// Calorie adjustment from a week-over-week weigh-in
    Checkin {
        /// Weight at the previous check-in (kg)
        #[arg(long)]
        previous_weight: f64,

        /// Weight now (kg)
        #[arg(long)]
        current_weight: f64,

        /// Calorie target followed during the week (kcal)
        #[arg(long)]
        previous_target: i64,

        /// Waist measurement (cm)
        #[arg(long)]
        waist: Option<f64>,
    },
}

fn run(cli: Cli, config: &PlannerConfig) -> AppResult<()> {
    match cli.command {
        Command::Plan { input } => commands::plan(&input),
        Command::Meals { input, catalog } => commands::meals(config, &input, catalog),
        Command::Grocery { input, catalog } => commands::grocery(config, &input, catalog),
        Command::Projection { input } => commands::projection(&input),
        Command::Checkin {
            previous_weight,
            current_weight,
            previous_target,
            waist,
        } => commands::checkin(previous_weight, current_weight, previous_target, waist),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match PlannerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut logging = LoggingConfig::from_config(&config);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: {e}");
    }
    info!(
        service = service_names::RECOMP_CLI,
        environment = %config.environment,
        catalog = ?config.catalog_path,
        retail_enabled = config.retail.enabled,
        "Planner configuration loaded"
    );

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.code.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
