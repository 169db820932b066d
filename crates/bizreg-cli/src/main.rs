//! `bizreg` - look up business entities in the state corporate registry.

use anyhow::{Context, Result};
use bizreg_core::AppConfig;
use bizreg_extract::{DetailRecordExtractor, SearchResultExtractor};
use bizreg_lookup::RegistryClient;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "bizreg", version, about = "Business entity registry lookups")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search entities by name
    Search { query: String },
    /// Fetch one entity's detail page
    Detail { url: String },
    /// Search, then fetch every result's detail page
    Lookup { query: String },
    /// Extract summaries from a saved search-results table
    ParseSearch { file: PathBuf },
    /// Extract a record from a saved detail page
    ParseDetail { file: PathBuf },
}

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bizreg=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => {
            let mut config = AppConfig::load_from(path)?;
            config.apply_env_overrides(|key| std::env::var(key).ok());
            config
        }
        None => AppConfig::load_with_env()?,
    };
    config.validate()?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_markup(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    info!(
        "Starting bizreg v{} for {}",
        env!("CARGO_PKG_VERSION"),
        config.registry.jurisdiction
    );

    match cli.command {
        Command::Search { query } => {
            let client = RegistryClient::from_config(&config)?;
            print_json(&client.search(&query).await)
        }
        Command::Detail { url } => {
            let client = RegistryClient::from_config(&config)?;
            print_json(&client.fetch_details(&url).await)
        }
        Command::Lookup { query } => {
            let client = RegistryClient::from_config(&config)?;
            print_json(&client.search_with_details(&query).await)
        }
        Command::ParseSearch { file } => {
            let extractor = SearchResultExtractor::new(
                config.jurisdiction()?,
                config.registry.detail_base_url.clone(),
            );
            print_json(&extractor.extract(&read_markup(&file)?))
        }
        Command::ParseDetail { file } => {
            let extractor = DetailRecordExtractor::new(config.jurisdiction()?);
            print_json(&extractor.extract(&read_markup(&file)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["bizreg", "search", "ocean state"]);
        assert!(matches!(cli.command, Command::Search { ref query } if query == "ocean state"));

        let cli = Cli::parse_from(["bizreg", "--config", "/tmp/b.toml", "parse-detail", "page.html"]);
        assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/b.toml")));
        assert!(matches!(cli.command, Command::ParseDetail { .. }));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let err = load_config(Some(Path::new("/nonexistent/bizreg/config.toml")))
            .expect_err("missing explicit config");
        assert!(err.to_string().contains("config file not found"));
    }
}
