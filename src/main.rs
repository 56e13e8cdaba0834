use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use body_scan_results::models::{Config, ScanStep};
use body_scan_results::ui;

#[derive(Parser)]
#[command(name = "body-scan-results")]
#[command(about = "Review captured body measurements in the terminal")]
struct Args {
    /// JSON scan snapshot to display instead of the demo measurements
    #[arg(short = 'f', long)]
    scan_file: Option<PathBuf>,

    /// Show confidence scores and grades when the screen opens
    #[arg(short = 'c', long)]
    show_confidences: bool,

    /// Calibration scale factor to display
    #[arg(short = 's', long)]
    scale_factor: Option<f64>,

    /// Step to open on: welcome or results
    #[arg(long)]
    start_step: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.scan_file.is_some() {
        config.scan_results_path = args.scan_file;
    }
    if args.show_confidences {
        config.show_confidences = true;
    }
    if args.scale_factor.is_some() {
        config.scale_factor = args.scale_factor;
    }
    if let Some(raw) = args.start_step.as_deref() {
        config.start_step = match raw.parse::<ScanStep>() {
            Ok(step) => step,
            Err(e) => {
                eprintln!("❌ Configuration Error: {}", e);
                std::process::exit(1);
            }
        };
    }

    // Keep logs quiet and off stdout so they do not tear the TUI
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(config.log_filter.as_str())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    info!("Starting results screen with {:?}", config);

    if let Err(e) = ui::run_app(&config) {
        error!("TUI exited with error: {}", e);
        eprintln!("❌ TUI Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
