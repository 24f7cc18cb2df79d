mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use cropadvisor::{Config, FieldAttributes, RecommendationEngine};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Recommend {
            field,
            rule_based,
            pretty,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let engine = build_engine(&config)?;
            let field = read_field(&field)?;

            let set = if rule_based {
                engine.rule_based_recommendations(&field)
            } else {
                engine.recommend(&field)
            };
            tracing::debug!(mode = %set.mode, count = set.len(), "Recommendations ready");

            let output = if pretty {
                serde_json::to_string_pretty(&set)?
            } else {
                serde_json::to_string(&set)?
            };
            println!("{}", output);
        }
        Commands::Crops => {
            let config = Config::load(cli.config.as_deref())?;
            let engine = build_engine(&config)?;
            let reference = engine.reference();

            println!(
                "{:<12} {:>12} {:>14} {:>12} {:>8}",
                "crop", "yield t/ha", "price/ton", "cost/ha", "water"
            );
            for (crop, entry) in reference.economics.iter() {
                println!(
                    "{:<12} {:>12.2} {:>14.2} {:>12.2} {:>8}",
                    crop,
                    entry.base_yield_t_per_ha,
                    entry.price_per_ton,
                    entry.cost_per_ha,
                    if reference.is_water_efficient(crop) {
                        "yes"
                    } else {
                        "-"
                    }
                );
            }
            let default = reference.economics.default_entry();
            println!(
                "{:<12} {:>12.2} {:>14.2} {:>12.2}",
                "(other)", default.base_yield_t_per_ha, default.price_per_ton, default.cost_per_ha
            );
        }
        Commands::Init { force } => {
            let path = match cli.config {
                Some(p) => p,
                None => Config::default_config_path()?,
            };
            if path.exists() && !force {
                bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().write(&path)?;
            println!("Configuration saved to {}", path.display());
        }
    }

    Ok(())
}

/// The classifier is supplied by the embedding service; the CLI always
/// starts without one.
fn build_engine(config: &Config) -> Result<RecommendationEngine> {
    let reference = config
        .reference_data()
        .context("Invalid reference data in configuration")?;
    let engine = RecommendationEngine::new(Arc::new(reference));
    let status = engine.status();
    tracing::info!(
        classifier_loaded = status.classifier_loaded,
        known_crops = status.known_crops,
        "Recommendation engine ready"
    );
    Ok(engine)
}

fn read_field(path: &Path) -> Result<FieldAttributes> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read field attributes from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    FieldAttributes::from_json(&content).context("Invalid field attributes JSON")
}
