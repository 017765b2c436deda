use std::path::PathBuf;

use clap::{Parser, Subcommand};
use genorisk_cli::commands;
use genorisk_cli::input::load_config;
use genorisk_engine::config::CONFIG_ENV;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "genorisk", version, about = "Polygenic risk scoring from genotype observations")]
struct Cli {
    /// Engine config (reference distributions, pathways, domains).
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a catalog and print its summary.
    Catalog {
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Score a single trait.
    Score {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        observations: PathBuf,
        #[arg(long = "trait")]
        trait_id: String,
    },
    /// Score every trait in the configured domains and aggregate.
    Report {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        observations: PathBuf,
    },
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    // `catalog` takes no config, so a broken config file must not block it.
    match cli.command {
        Command::Catalog { catalog } => print_json(&commands::catalog_summary(&catalog)?),
        Command::Score {
            catalog,
            observations,
            trait_id,
        } => {
            let config = load_config(cli.config.as_deref())?;
            print_json(&commands::score(config, &catalog, &observations, &trait_id)?)
        }
        Command::Report {
            catalog,
            observations,
        } => {
            let config = load_config(cli.config.as_deref())?;
            print_json(&commands::report(config, &catalog, &observations)?)
        }
    }
}
