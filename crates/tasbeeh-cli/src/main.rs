use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tasbeeh_cli::commands::{add, count, presets, status, target};
use tasbeeh_cli::{Cli, Commands, Config};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config_path: Option<&Path>) -> Result<(tasbeeh_db::Database, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let db = tasbeeh_db::Database::open(&config.database_path)
        .with_context(|| format!("failed to open {}", config.database_path.display()))?;
    Ok((db, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Status) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            status::run(&mut stdout, &db, config.clock()?, &config.database_path)?;
        }
        Some(Commands::Presets { category }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            presets::run(&mut stdout, &db, *category)?;
        }
        Some(Commands::Add(args)) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            add::run(&mut stdout, &db, args)?;
        }
        Some(Commands::Target { value }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            target::run(&mut stdout, &db, *value)?;
        }
        Some(Commands::Count(args)) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            count::run(io::stdin().lock(), &mut stdout, &db, config.clock()?, args)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
