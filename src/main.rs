use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use printcost::catalog::{default_catalog, load_catalog, MaterialCatalog};
use printcost::config::load_config_or_default;
use printcost::estimator::{
    quote, recommend_material, JobParameters, QualityTier, Requirements, DEFAULT_MARKUP_PERCENT,
};

#[derive(Parser, Debug)]
#[command(name = "printcost", version, about = "Price and plan 3D print jobs")]
struct Cli {
    /// Cost config TOML (defaults to the user config dir, then built-in rates)
    #[arg(long, global = true, env = "PRINTCOST_CONFIG")]
    config: Option<PathBuf>,

    /// Material catalog, .json or .toml (defaults to the built-in catalog)
    #[arg(long, global = true, env = "PRINTCOST_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a job
    Quote {
        /// Object mass in grams
        #[arg(long)]
        mass: f64,

        /// Material id from the catalog (e.g. "pla")
        #[arg(long)]
        material: String,

        /// Print time in hours; estimated when omitted
        #[arg(long)]
        hours: Option<f64>,

        /// draft, standard, high or ultra
        #[arg(long, default_value = "standard")]
        quality: String,

        /// Markup over loaded cost, in percent
        #[arg(long, default_value_t = DEFAULT_MARKUP_PERCENT)]
        markup: f64,
    },

    /// Estimate print time
    Time {
        /// Object mass in grams
        #[arg(long)]
        mass: f64,

        /// Material id from the catalog
        #[arg(long)]
        material: Option<String>,

        /// draft, standard, high or ultra
        #[arg(long, default_value = "standard")]
        quality: String,
    },

    /// Recommend a material for the given requirements (scores 0-10)
    Recommend {
        /// Minimum strength score
        #[arg(long)]
        strength: Option<f64>,
        /// Minimum flexibility score
        #[arg(long)]
        flexibility: Option<f64>,
        /// Minimum heat-resistance score
        #[arg(long)]
        heat_resistance: Option<f64>,
        /// Minimum durability score
        #[arg(long)]
        durability: Option<f64>,
        /// Maximum price per kg
        #[arg(long)]
        budget: Option<f64>,
    },

    /// List catalog materials
    Materials,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn resolve_catalog(path: Option<&PathBuf>) -> Result<MaterialCatalog> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(default_catalog()),
    }
}

fn main() -> Result<()> {
    printcost::init_tracing();

    let cli = Cli::parse();
    let catalog = resolve_catalog(cli.catalog.as_ref())?;

    match cli.command {
        Command::Quote {
            mass,
            material,
            hours,
            quality,
            markup,
        } => {
            let config = load_config_or_default(cli.config.as_deref())?;
            let job = JobParameters {
                mass_grams: mass,
                duration_hours: hours,
                quality: QualityTier::parse(&quality),
                markup_percent: markup,
            };
            let quote = quote(&job, &material, &catalog, &config)?;
            info!(
                "{} g of {}: price {} (cost {})",
                mass, quote.material_name, quote.cost.final_price, quote.cost.total_cost
            );
            print_json(&quote)
        }
        Command::Time {
            mass,
            material,
            quality,
        } => {
            let estimate =
                catalog.estimate_duration(mass, material.as_deref(), QualityTier::parse(&quality));
            info!("Estimated print time: {}", estimate);
            print_json(&estimate)
        }
        Command::Recommend {
            strength,
            flexibility,
            heat_resistance,
            durability,
            budget,
        } => {
            let requirements = Requirements {
                strength,
                flexibility,
                heat_resistance,
                durability,
                budget,
            };
            print_json(&recommend_material(&requirements, &catalog)?)
        }
        Command::Materials => print_json(&catalog.materials()),
    }
}
