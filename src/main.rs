//! mdconvert - batch Markdown to HTML converter
//!
//! CLI entry point. Startup is staged:
//!
//! 1. Parse the command line (positionals stay optional so the resolver
//!    owns the exit-code contract)
//! 2. Load the settings file, overlay `MDCONVERT_*` environment variables,
//!    then overlay CLI flags
//! 3. Initialize logging (stderr console, optional rotating file layer)
//! 4. Resolve the run plan - setup failures exit with codes 1-4 before any
//!    file is touched
//! 5. Run the batch and exit with its status (0, or 5 once any file failed)

use clap::Parser;
use mdconvert::batch::BatchRunner;
use mdconvert::cli::Cli;
use mdconvert::services::MarkdownRenderer;
use mdconvert::{config, logging, APP_NAME, VERSION};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut settings = match config::load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };
    settings.apply_process_env();
    cli.apply_to(&mut settings);

    // The guard must outlive the run to keep the file appender flushing.
    let _log_guard = match logging::setup_logging(settings.log_dir.as_deref(), settings.debug) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let plan = match config::resolve(cli.destination, cli.inputs, &settings) {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    let summary = BatchRunner::new(&plan, MarkdownRenderer::new()).run();

    tracing::info!(
        "Batch finished: {} converted, {} failed, {} of {} attempted",
        summary.converted(),
        summary.failed(),
        summary.attempted(),
        summary.total
    );

    ExitCode::from(summary.status)
}
