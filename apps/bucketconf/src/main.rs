//! bucketconf - pick an S3 bucket and write its access configuration.
//!
//! Scans every known AWS region for buckets, asks which region, bucket and
//! output format to use, fetches the bucket's location and ACL, and writes
//! `.env` or `config.json` into the current directory.
//!
//! # Usage
//!
//! ```text
//! AWS_PROFILE=dev bucketconf
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SCAN_CONCURRENCY` | `4` | Regions queried at the same time |
//! | `S3_FORCE_PATH_STYLE` | `false` | Path-style addressing for S3-compatible servers |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |
//!
//! Credentials, region defaults and endpoint overrides are read by the AWS
//! SDK from its usual sources.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use bucketconf_core::{
    AwsBucketProvider, ConfigGenerator, GeneratorConfig, TerminalPrompter, known_regions,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Version reported in the startup log line.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pick the event filter: a `RUST_LOG` directive set wins over the configured level.
fn log_filter(rust_log: Option<&str>, log_level: &str) -> Result<EnvFilter> {
    let directives = rust_log.unwrap_or(log_level);
    EnvFilter::try_new(directives).with_context(|| format!("invalid log filter: {directives}"))
}

/// Install the stderr subscriber so events never mix with the stdout confirmation.
fn init_tracing(log_level: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(rust_log.as_deref(), log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Resolve the fixed output directory to an absolute path for reporting.
fn output_dir() -> Result<PathBuf> {
    std::env::current_dir().context("cannot determine the working directory")
}

/// Write the single operator-facing line for a failed run.
fn report_failure(out: &mut impl Write, err: &anyhow::Error) -> std::io::Result<()> {
    writeln!(out, "Error: {err}")
}

async fn run(config: GeneratorConfig) -> Result<PathBuf> {
    let provider = Arc::new(AwsBucketProvider::from_env(&config).await);
    let generator = ConfigGenerator::new(provider, &config);
    let mut prompter = TerminalPrompter::stdio();

    let path = generator.run(&known_regions(), &mut prompter).await?;
    Ok(path)
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut config = GeneratorConfig::from_env();

    if let Err(e) = init_tracing(&config.log_level) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    config.output_dir = match output_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        scan_concurrency = config.scan_concurrency,
        output_dir = %config.output_dir.display(),
        version = VERSION,
        "starting bucketconf",
    );

    match run(config).await {
        Ok(path) => {
            println!("Configuration file generated at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "run failed");
            let _ = report_failure(&mut std::io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}
