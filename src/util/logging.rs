use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter directives for the given verbosity.
pub fn filter_directives(verbose: bool) -> &'static str {
    if verbose {
        "drumkit=debug,warn"
    } else {
        "drumkit=info,warn"
    }
}

/// Console output goes to stderr so stdout stays free for program output.
fn console_writer() -> fn() -> io::Stderr {
    io::stderr
}

/// Initialize the logging system with tracing.
///
/// If `log_dir` is provided, logs are also written to a daily rolling file in
/// that directory; keep the returned guard alive until exit so buffered lines
/// are flushed. The `verbose` flag controls whether debug logs are shown.
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::new(filter_directives(verbose));
    let registry = tracing_subscriber::registry().with(filter);

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "drumkit.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        registry
            .with(fmt::layer().with_target(true).with_writer(console_writer()))
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .try_init()
            .context("Logging already initialized")?;
        Ok(Some(guard))
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(console_writer()))
            .try_init()
            .context("Logging already initialized")?;
        Ok(None)
    }
}
