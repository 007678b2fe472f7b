//! Command implementation for the dinosaur dataset analyzer CLI
//!
//! Sets up logging, runs the pipeline for the requested file and hands the
//! outcome to the report emitter.

use crate::Error;
use crate::app::models::AnalysisOutcome;
use crate::app::services::report::ReportEmitter;
use crate::cli::args::Args;
use crate::constants::LOG_TARGET;
use crate::pipeline::analyze_file;
use anyhow::Context;
use std::time::Instant;
use tracing::{debug, info};

/// Run the analysis for the parsed arguments and emit the report
///
/// Core failures (invalid lengths, no usable records) are emitted as a
/// failure report and returned as an outcome; problems with the file or the
/// arguments are returned as errors.
pub fn run(args: &Args) -> anyhow::Result<AnalysisOutcome> {
    let start_time = Instant::now();
    debug!("Arguments: {:?}", args);

    let config = args.to_config();

    let result = analyze_file(&args.csv_file_path, &config);
    let outcome = match AnalysisOutcome::from_result(result) {
        Ok(outcome) => outcome,
        Err(error @ Error::Configuration { .. }) => {
            return Err(anyhow::Error::new(error).context("Invalid arguments"));
        }
        Err(error) => {
            return Err(anyhow::Error::new(error).context(format!(
                "Couldn't process {}; check the formatting of the CSV file",
                args.csv_file_path.display()
            )));
        }
    };

    ReportEmitter::new(args.output_format)
        .with_details(args.show_details())
        .emit(&outcome)
        .context("Failed to write report")?;

    info!(
        "Finished in {:.1}ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );
    Ok(outcome)
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
