//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use impactor_store::RunUpdate;

use crate::config::{Config, OutputFormat};

/// Asteroid impact effects calculator.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "impact-report", about = "Estimate the effects of an asteroid impact")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Directory holding saved runs.
    #[arg(long, global = true)]
    pub history_dir: Option<PathBuf>,

    /// Saved runs kept before the oldest are dropped.
    #[arg(long, global = true)]
    pub max_history: Option<usize>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the preset scenarios.
    Presets,
    /// List the named impact locations.
    Locations,
    /// Calculate the effects of an impact.
    Run(RunArgs),
    /// Inspect or manage saved runs.
    #[command(subcommand)]
    History(HistoryCommand),
}

/// Impact parameters. Values given alongside `--preset` override the preset.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Preset scenario (see `presets`).
    #[arg(long)]
    pub preset: Option<String>,

    /// Impactor diameter in meters (10 to 2000).
    #[arg(long)]
    pub diameter: Option<f64>,

    /// Impact speed in km/s (5 to 50).
    #[arg(long)]
    pub speed: Option<f64>,

    /// Impact angle in degrees from horizontal (15 to 90).
    #[arg(long)]
    pub angle: Option<f64>,

    /// Composition: rocky, iron, stony or icy.
    #[arg(long)]
    pub composition: Option<String>,

    /// Impact site (see `locations`).
    #[arg(long)]
    pub location: Option<String>,

    /// Record the run in the history.
    #[arg(long)]
    pub save: bool,

    /// Name for the saved run.
    #[arg(long)]
    pub name: Option<String>,

    /// Description for the saved run.
    #[arg(long)]
    pub description: Option<String>,

    /// Tag for the saved run (repeatable). Defaults to the composition.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List saved runs, newest first.
    List {
        /// Show at most this many runs.
        #[arg(long)]
        limit: Option<usize>,
        /// Only runs with this tag.
        #[arg(long)]
        tag: Option<String>,
    },
    /// Print a saved run's report.
    Show { id: String },
    /// Rename a saved run or change its description or tags.
    Update(UpdateArgs),
    /// Compare 2 to 5 saved runs side by side.
    Compare {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Totals, averages and most used locations.
    Stats,
    /// Delete a saved run.
    Delete { id: String },
    /// Delete every saved run.
    Clear,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    /// New description; an empty string removes it.
    #[arg(long)]
    pub description: Option<String>,

    /// Replace the tags (repeatable).
    #[arg(long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<String>,

    /// Remove every tag.
    #[arg(long)]
    pub clear_tags: bool,
}

impl UpdateArgs {
    pub fn changes(&self) -> RunUpdate {
        let tags = if self.clear_tags {
            Some(Vec::new())
        } else if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.clone())
        };
        RunUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            tags,
        }
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref dir) = args.history_dir {
            self.history.dir = Some(dir.clone());
        }
        if let Some(max) = args.max_history {
            self.history.max_entries = max;
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
    }
}
