use clap::Parser;
use log::{LevelFilter, info};

use rayleigh_lidar::batch::BatchProcessor;
use rayleigh_lidar::config::Config;

use std::path::PathBuf;

/// Molecular (Rayleigh) backscatter and transmission for lidar calibration
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON configuration file
    #[arg(default_value = "./data/config/rayleigh.json")]
    config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Activate a logger writing to stdout. `RUST_LOG` still takes precedence for
/// individual modules.
fn setup_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    builder.filter_level(match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    builder.parse_default_env();
    builder.init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(args.verbose);

    info!("Loading configuration from {}", args.config.display());
    let config = Config::from_file(&args.config)?;

    let processor = BatchProcessor::new(config);
    let processed = processor.process()?;

    let first = processed.first().ok_or("No sounding could be processed")?;
    info!(
        "{} sounding(s) processed; first: {} (transmission {:.6}, depolarization {:.7}, cross-section {:.4e} m^2)",
        processed.len(),
        first.source.display(),
        first.report.profile.transmission,
        first.report.profile.depolarization_ratio,
        first.report.profile.cross_section
    );

    Ok(())
}
