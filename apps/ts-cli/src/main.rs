use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use ts_catalog::CatalogResult;
use ts_quantity::{Temperature, TemperatureDelta};
use ts_registry::{celsius, kelvin, lookup_scale, registered_scales};

#[derive(Parser)]
#[command(name = "ts-cli")]
#[command(about = "ThermoScale CLI - Temperature scale conversion tool", long_about = None)]
struct Cli {
    /// Catalog file with extra scales and promotion rules (YAML)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an absolute temperature between scales
    Convert {
        /// Numeric value in the source scale
        value: f64,
        /// Source scale name (case-insensitive)
        from: String,
        /// Target scale name (case-insensitive)
        to: String,
    },
    /// Convert a temperature difference between scales
    Delta {
        /// Numeric difference in the source scale
        value: f64,
        /// Source scale name (case-insensitive)
        from: String,
        /// Target scale name (case-insensitive)
        to: String,
    },
    /// List registered scales and their coefficients
    Scales,
    /// Walk through a mixed-scale arithmetic example
    Demo,
}

fn main() -> CatalogResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Some(path) = &cli.catalog {
        install_catalog(path)?;
    }

    match cli.command {
        Commands::Convert { value, from, to } => cmd_convert(value, &from, &to),
        Commands::Delta { value, from, to } => cmd_delta(value, &from, &to),
        Commands::Scales => cmd_scales(),
        Commands::Demo => cmd_demo(),
    }
}

fn install_catalog(path: &Path) -> CatalogResult<()> {
    debug!("Loading scale catalog from {}", path.display());
    let catalog = ts_catalog::load_yaml(path)?;
    let handles = ts_catalog::install(&catalog)?;
    println!(
        "✓ Installed {} scale(s) from {}",
        handles.len(),
        path.display()
    );
    Ok(())
}

fn cmd_convert(value: f64, from: &str, to: &str) -> CatalogResult<()> {
    let source = lookup_scale(from)?;
    let t = Temperature::new(&source, value)?;
    println!("{} = {}", t, t.in_named(to)?);
    Ok(())
}

fn cmd_delta(value: f64, from: &str, to: &str) -> CatalogResult<()> {
    let source = lookup_scale(from)?;
    let d = TemperatureDelta::new(&source, value)?;
    println!("{} = {}", d, d.in_named(to)?);
    Ok(())
}

fn cmd_scales() -> CatalogResult<()> {
    println!("Registered scales:");
    for handle in registered_scales() {
        println!(
            "  {:<12} {:<4} surface = {} * kelvin + {}",
            handle.name(),
            handle.symbol(),
            handle.slope(),
            handle.intercept()
        );
    }
    Ok(())
}

fn cmd_demo() -> CatalogResult<()> {
    let start = Temperature::new(&celsius(), 5.0)?;
    let step = TemperatureDelta::from_kelvin(&kelvin(), 2.0)?;
    println!("{:?} + {:?}", start, step);

    // (Kelvin, Celsius) promotes to Kelvin out of the box
    let warmed = (start + step)?;
    println!("  = {}", warmed);

    let in_rankine = warmed.in_named("rankine")?;
    println!("  = {}", in_rankine);

    Ok(())
}
