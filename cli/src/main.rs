//! Bed Flow Simulator CLI
//!
//! Runs a sweep of (ward beds, ICU beds) configurations and prints how
//! surgeries and blocked patients accumulate over the horizon.
//!
//! # Example
//!
//! ```bash
//! # Classic comparison: ICU of 10 beds against wards of 7, 8, 10 and 12
//! bed-flow --seed 42
//!
//! # Custom scenarios over six months, as CSV for plotting
//! bed-flow -s 6:8 -s 9:8 --days 180 --format csv > curves.csv
//!
//! # Sweep described in a JSON file
//! bed-flow --config sweep.json --format json
//! ```

mod report;

use bed_flow_core_rs::sweep::{run_sweep, run_sweep_sequential, BedConfig, SweepConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Output format for the sweep report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Totals plus weekly cumulative curves
    Table,
    /// Full report as JSON
    Json,
    /// One row per scenario and day
    Csv,
}

/// Bed Flow Simulator
///
/// Simulates an ICU feeding a general ward under fixed bed capacity and
/// compares surgeries performed with patients blocked in the ICU.
#[derive(Parser, Debug)]
#[command(name = "bed-flow")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON sweep configuration; command-line flags override its fields
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Scenario as WARD:ICU bed counts (repeatable)
    #[arg(short = 's', long = "scenario", value_parser = parse_bed_config)]
    scenarios: Vec<BedConfig>,

    /// Days to simulate per scenario
    #[arg(short = 'd', long)]
    days: Option<usize>,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Shortest stay in days, applied to both rooms
    #[arg(long)]
    stay_min: Option<u32>,

    /// Longest stay in days, applied to both rooms
    #[arg(long)]
    stay_max: Option<u32>,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Run scenarios one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn,bed_flow_core_rs=info,bed_flow=info")]
    log_level: String,
}

fn parse_bed_config(value: &str) -> Result<BedConfig, String> {
    let (ward, icu) = value
        .split_once(':')
        .ok_or_else(|| format!("expected WARD:ICU, got '{}'", value))?;
    let ward_beds = ward
        .trim()
        .parse()
        .map_err(|e| format!("invalid ward bed count '{}': {}", ward, e))?;
    let icu_beds = icu
        .trim()
        .parse()
        .map_err(|e| format!("invalid ICU bed count '{}': {}", icu, e))?;
    Ok(BedConfig::new(ward_beds, icu_beds))
}

fn build_config(args: &Args) -> Result<SweepConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            SweepConfig::from_json(&text).map_err(|e| e.to_string())?
        }
        None => SweepConfig::default(),
    };

    if !args.scenarios.is_empty() {
        config.scenarios = args.scenarios.clone();
    }
    if let Some(days) = args.days {
        config.horizon_days = days;
    }
    for range in [&mut config.stay_ranges.icu, &mut config.stay_ranges.ward] {
        if let Some(min) = args.stay_min {
            range.min = min;
        }
        if let Some(max) = args.stay_max {
            range.max = max;
        }
    }
    if let Some(seed) = args.seed {
        config.rng_seed = Some(seed);
    }
    if config.rng_seed.is_none() {
        config.rng_seed = Some(rand::random());
    }

    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        scenarios = config.scenarios.len(),
        horizon_days = config.horizon_days,
        seed = config.rng_seed,
        "Starting bed-flow sweep"
    );

    let result = if args.sequential {
        run_sweep_sequential(&config)
    } else {
        run_sweep(&config)
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            error!("simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let rendered = match args.format {
        OutputFormat::Table => report::render_table(&report).map_err(|e| e.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&report).map_err(|e| e.to_string()),
        OutputFormat::Csv => report::render_csv(&report).map_err(|e| e.to_string()),
    };

    match rendered {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("cannot render report: {}", e);
            ExitCode::FAILURE
        }
    }
}
