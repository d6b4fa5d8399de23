//! impact-report: command-line front end for the impact effects calculator.
//!
//! Usage:
//!   impact-report presets
//!   impact-report run --preset continental-crisis
//!   impact-report run --diameter 250 --speed 18 --composition iron --location tokyo --save
//!   impact-report history list --tag iron
//!   impact-report history compare <id> <id>

mod cli;
mod config;
mod error;
mod logging;
mod render;
mod resolve;

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use serde::Serialize;

use impactor_sim::compute_impact_effects;
use impactor_sim::locations::locations;
use impactor_sim::scenario::scenarios;
use impactor_store::{DirStore, RunDetails, RunHistory, RunQuery, RunSummary};

use crate::cli::{CliArgs, Command, HistoryCommand, RunArgs};
use crate::config::{config_path, default_config_dir, Config, ConfigOrigin, OutputFormat};
use crate::error::AppError;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let (mut config, origin) = match Config::load_or_create(&config_dir) {
        Ok((config, origin)) => (config, Ok(origin)),
        Err(e) => (Config::default(), Err(e)),
    };
    config.apply_cli_overrides(&args);
    logging::init_logging(&config.debug.log_level);

    let path = config_path(&config_dir);
    match origin {
        Ok(ConfigOrigin::File) => tracing::info!(path = %path.display(), "loaded config"),
        Ok(ConfigOrigin::CreatedDefault) => {
            tracing::info!(path = %path.display(), "created default config")
        }
        Err(e) => tracing::warn!(error = %e, "using default config"),
    }

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<(), AppError> {
    let format = config.output.format;
    match command {
        Command::Presets => {
            let presets = scenarios();
            match format {
                OutputFormat::Text => print!("{}", render::render_presets(&presets)),
                OutputFormat::Json => print_json(&presets)?,
            }
        }
        Command::Locations => {
            let all = locations();
            match format {
                OutputFormat::Text => {
                    for loc in &all {
                        println!("{:<20} {:>9.4} {:>10.4}", loc.name, loc.latitude, loc.longitude);
                    }
                }
                OutputFormat::Json => print_json(&all)?,
            }
        }
        Command::Run(run_args) => cmd_run(&run_args, config)?,
        Command::History(history_cmd) => cmd_history(history_cmd, config)?,
    }
    Ok(())
}

fn cmd_run(args: &RunArgs, config: &Config) -> Result<(), AppError> {
    let resolved = resolve::resolve_run(args)?;
    tracing::info!(
        name = %resolved.name,
        composition = %resolved.composition,
        diameter = resolved.parameters.diameter_meters,
        speed = resolved.parameters.speed_km_per_sec,
        "calculating impact"
    );
    let report = compute_impact_effects(&resolved.parameters)?;

    match config.output.format {
        OutputFormat::Text => print!(
            "{}",
            render::render_report(&resolved.name, &resolved.parameters, &report)
        ),
        OutputFormat::Json => print_json(&report)?,
    }

    if args.save {
        let tags = if args.tags.is_empty() {
            vec![resolved.composition.name().to_string()]
        } else {
            args.tags.clone()
        };
        let details = RunDetails {
            name: resolved.name,
            description: args.description.clone(),
            tags,
        };
        let saved =
            open_history(config).record_with(details, resolved.parameters, report, now_secs())?;
        eprintln!("Saved as {}", saved.id);
    }
    Ok(())
}

fn cmd_history(command: HistoryCommand, config: &Config) -> Result<(), AppError> {
    let mut history = open_history(config);
    let format = config.output.format;
    match command {
        HistoryCommand::List { limit, tag } => {
            let runs = history.query(&RunQuery { limit, tag })?;
            let summaries: Vec<RunSummary> = runs.iter().map(RunSummary::from).collect();
            match format {
                OutputFormat::Text => print!("{}", render::render_summaries(&summaries)),
                OutputFormat::Json => print_json(&summaries)?,
            }
        }
        HistoryCommand::Show { id } => {
            let run = history.get(&id)?.ok_or(AppError::RunNotFound(id))?;
            match format {
                OutputFormat::Text => print!("{}", render::render_saved_run(&run)),
                OutputFormat::Json => print_json(&run)?,
            }
        }
        HistoryCommand::Update(update) => {
            let changes = update.changes();
            if changes.is_empty() {
                return Err(AppError::NoChanges);
            }
            let run = history.update(&update.id, changes, now_secs())?;
            match format {
                OutputFormat::Text => eprintln!("Updated {}", run.id),
                OutputFormat::Json => print_json(&run)?,
            }
        }
        HistoryCommand::Compare { ids } => {
            let comparison = history.compare(&ids)?;
            match format {
                OutputFormat::Text => print!("{}", render::render_comparison(&comparison)),
                OutputFormat::Json => print_json(&comparison)?,
            }
        }
        HistoryCommand::Stats => {
            let stats = history.statistics()?;
            match format {
                OutputFormat::Text => print!("{}", render::render_statistics(&stats)),
                OutputFormat::Json => print_json(&stats)?,
            }
        }
        HistoryCommand::Delete { id } => {
            if !history.delete(&id)? {
                return Err(AppError::RunNotFound(id));
            }
            eprintln!("Deleted {id}");
        }
        HistoryCommand::Clear => {
            history.clear()?;
            eprintln!("History cleared");
        }
    }
    Ok(())
}

fn open_history(config: &Config) -> RunHistory<DirStore> {
    let dir = config.history_dir();
    tracing::debug!(dir = %dir.display(), "opening history");
    RunHistory::new(DirStore::new(dir)).with_max_entries(config.history.max_entries)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
