use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use quickcal::calendar::{EventStore, LocalCalendar};
use quickcal::cli::args::{Cli, Commands};
use quickcal::cli::commands;
use quickcal::config::{Config, Paths};
use quickcal::storage::Database;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(cli.verbosity_filter().unwrap_or(config.logging.level.as_str()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_store(config: &Config) -> Result<EventStore<LocalCalendar>> {
    let paths = Paths::new()?;
    let path = config.database_path(&paths);
    let db = Database::open_at(&path)
        .with_context(|| format!("cannot open calendar at {}", path.display()))?;
    Ok(EventStore::new(LocalCalendar::new(db)))
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("cannot load configuration")?;
    config.general.color.apply();
    init_logging(&cli, &config);

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match &cli.command {
        Commands::Parse(args) => commands::parse(args, format)?,
        Commands::Add(args) => commands::add(&open_store(&config)?, args, format)?,
        Commands::Agenda(args) => commands::agenda(&open_store(&config)?, args, format)?,
        Commands::Completions { shell, install } => commands::completions(*shell, *install)?,
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
