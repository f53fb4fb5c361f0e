//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tasbeeh_core::{Category, Target};

use crate::commands::add::AddArgs;
use crate::commands::count::CountArgs;

/// Digital tasbeeh.
///
/// Counts repetitions of selected dhikr toward their targets and keeps a
/// running total for the day.
#[derive(Debug, Parser)]
#[command(name = "tasbeeh", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show today's total and current settings.
    Status,

    /// List selectable dhikr.
    Presets {
        /// Show morning or evening azkar (including custom ones) instead of the presets.
        #[arg(long)]
        category: Option<Category>,
    },

    /// Add a custom morning or evening dhikr.
    Add(AddArgs),

    /// Set the default repetition target.
    Target {
        /// New target (a positive integer, e.g. 33, 100, 1000).
        value: Target,
    },

    /// Start a counting session with the selected dhikr.
    Count(CountArgs),
}
