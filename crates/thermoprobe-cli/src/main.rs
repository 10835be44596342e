//! Thermoprobe
//!
//! Time-bounded CPU temperature sampling sessions with summary reports.

mod config;
mod report;
mod select;
mod session;
mod stats;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use thermoprobe_hw::{SystemSensors, TemperatureSource};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use session::SessionSettings;

#[derive(Parser)]
#[command(name = "thermoprobe")]
#[command(about = "Bounded CPU temperature sampling sessions")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a sampling session and print the report
    Run {
        /// Monitoring duration in minutes
        #[arg(long)]
        duration: Option<u64>,

        /// Sampling interval in seconds
        #[arg(long)]
        interval: Option<u64>,

        /// Save the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the temperature sensors visible on this system
    Sensors {
        /// Include non-CPU components
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive("info".parse()?)
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path).with_context(|| {
                format!("Failed to load configuration from: {}", path.display())
            })?;
            info!("Loaded configuration from: {}", path.display());
            config
        }
        None => Config::default(),
    };

    match cli.command {
        Commands::Run {
            duration,
            interval,
            output,
        } => handle_run(&config, duration, interval, output).await,
        Commands::Sensors { all } => handle_sensors(all),
    }
}

async fn handle_run(
    config: &Config,
    duration: Option<u64>,
    interval: Option<u64>,
    output: Option<PathBuf>,
) -> Result<()> {
    let duration_minutes = duration.unwrap_or(config.session.duration_minutes);
    let interval_seconds = interval.unwrap_or(config.session.interval_seconds);

    if interval_seconds == 0 {
        bail!("Sampling interval must be at least 1 second");
    }

    let settings = SessionSettings {
        duration: Duration::from_secs(duration_minutes.saturating_mul(60)),
        interval: Duration::from_secs(interval_seconds),
    };
    if settings.total_ticks() == 0 {
        bail!("Monitoring duration must cover at least one sampling interval");
    }

    let mut source =
        SystemSensors::open().context("Failed to open the hardware sensor interface")?;
    source.refresh();

    let sensors = source.cpu_sensors();
    info!("Discovered {} CPU temperature sensor(s)", sensors.len());
    for sensor in &sensors {
        match sensor.temperature {
            Some(t) => info!("  {}: {:.2} °C", sensor.label, t),
            None => info!("  {}: no reading", sensor.label),
        }
    }

    let Some(chosen) = select::select_sensor(&sensors) else {
        drop(source);
        bail!("No suitable temperature sensor found");
    };
    let label = chosen.label.clone();
    info!(
        "Monitoring '{}' for {} minute(s) at {} second intervals",
        label, duration_minutes, interval_seconds
    );

    let samples = session::run(&mut source, &label, &settings).await;
    drop(source);

    let Some(summary) = stats::summarize(&samples) else {
        warn!("No valid samples were recorded; skipping statistics and report");
        return Ok(());
    };

    let rendered = report::render_summary(&summary);
    print!("{rendered}");

    if let Some(path) = output {
        let payload = format!("{}\n{}", rendered, report::render_raw(&samples));
        match std::fs::write(&path, payload) {
            Ok(()) => println!("Report saved to: {}", path.display()),
            Err(e) => error!("Failed to save report to {}: {}", path.display(), e),
        }
    }

    Ok(())
}

fn handle_sensors(all: bool) -> Result<()> {
    let mut source =
        SystemSensors::open().context("Failed to open the hardware sensor interface")?;
    source.refresh();

    let (heading, sensors) = if all {
        ("All temperature components:", source.all_sensors())
    } else {
        ("CPU temperature sensors:", source.cpu_sensors())
    };

    println!("{heading}");
    if sensors.is_empty() {
        println!("  (none found)");
    } else {
        for sensor in &sensors {
            match sensor.temperature {
                Some(t) => println!("  {}: {:.2} °C", sensor.label, t),
                None => println!("  {}: no reading", sensor.label),
            }
        }
    }

    Ok(())
}
