//! Generator configuration.
//!
//! Provides [`GeneratorConfig`]. Values are loaded from environment variables;
//! the output directory is deliberately not among them and can only be set
//! through the builder.

use std::path::PathBuf;

use serde::Serialize;
use typed_builder::TypedBuilder;

/// Default number of regions queried at the same time.
pub const DEFAULT_SCAN_CONCURRENCY: usize = 4;

/// Configuration for a generator run.
///
/// # Examples
///
/// ```
/// use bucketconf_core::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.scan_concurrency, 4);
/// assert_eq!(config.log_level, "warn");
/// ```
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("warn"))]
    pub log_level: String,

    /// Upper bound on concurrent per-region bucket listings.
    #[builder(default = DEFAULT_SCAN_CONCURRENCY)]
    pub scan_concurrency: usize,

    /// Whether the S3 client uses path-style addressing.
    #[builder(default = false)]
    pub force_path_style: bool,

    /// Directory the artifact is written into.
    #[builder(default = PathBuf::from("."))]
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("warn"),
            scan_concurrency: DEFAULT_SCAN_CONCURRENCY,
            force_path_style: false,
            output_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LOG_LEVEL` | `warn` |
    /// | `SCAN_CONCURRENCY` | `4` |
    /// | `S3_FORCE_PATH_STYLE` | `false` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Ok(v) = std::env::var("SCAN_CONCURRENCY") {
            if let Some(n) = parse_concurrency(&v) {
                config.scan_concurrency = n;
            }
        }
        if let Ok(v) = std::env::var("S3_FORCE_PATH_STYLE") {
            config.force_path_style = parse_bool(&v);
        }

        config
    }
}

/// Parse a positive concurrency limit; zero and garbage are rejected.
fn parse_concurrency(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
