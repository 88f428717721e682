// src/main.rs
//
// Command-line front end: one subcommand per view of the MBTI dataset.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::country::CountryCmd;
use commands::preview::PreviewCmd;
use commands::top::TopCmd;
use commands::Context;
use mbtiframes::format::OutputFormat;
use mbtiframes::AppConfig;

const DEFAULT_CONFIG_PATH: &str = "mbtiframes.toml";

/// Explore MBTI type proportions per country.
#[derive(Parser, Debug)]
#[command(name = "mbtiframes", version, about = "Explore MBTI type proportions per country")]
struct Cli {
    /// Path to a TOML configuration file (default: ./mbtiframes.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// CSV file to read, overriding `data_path` from the configuration.
    #[arg(long, global = true)]
    data: Option<String>,

    /// Output format: table or json.
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the first rows of the raw table.
    Preview(PreviewCmd),

    /// Countries with the highest share of one MBTI type.
    Top(TopCmd),

    /// The ranked MBTI distribution of one country.
    Country(CountryCmd),

    /// Average MBTI distribution per continent.
    Continents,

    /// List the MBTI type columns in the dataset.
    Types,

    /// List the countries in the dataset.
    Countries,

    /// Report data-quality warnings for the dataset.
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // An explicitly named config must load; the default one may be absent.
    let (mut config, missing_default) = match &cli.config {
        Some(path) => (AppConfig::load(path)?, false),
        None => match AppConfig::load_optional(DEFAULT_CONFIG_PATH)? {
            Some(cfg) => (cfg, false),
            None => (AppConfig::default(), true),
        },
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    if missing_default {
        tracing::warn!("Could not load config from {}: not found. Using defaults.", DEFAULT_CONFIG_PATH);
    }

    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }

    let ctx = Context::new(config, cli.format)?;

    match &cli.command {
        Commands::Preview(cmd) => commands::preview::run(&ctx, cmd)?,
        Commands::Top(cmd) => commands::top::run(&ctx, cmd)?,
        Commands::Country(cmd) => commands::country::run(&ctx, cmd)?,
        Commands::Continents => commands::continents::run(&ctx)?,
        Commands::Types => commands::listing::types(&ctx)?,
        Commands::Countries => commands::listing::countries(&ctx)?,
        Commands::Check => commands::check::run(&ctx)?,
    }

    Ok(())
}
