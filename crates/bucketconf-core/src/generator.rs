//! End-to-end pipeline: scan, select, fetch, emit.
//!
//! Each stage completes before the next one starts. The artifact is only
//! touched by the final stage, so any earlier failure leaves the output
//! directory unchanged.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::GeneratorConfig;
use crate::emitter::ConfigEmitter;
use crate::error::{GeneratorError, GeneratorResult};
use crate::fetcher::MetadataFetcher;
use crate::prompt::Prompter;
use crate::provider::BucketProvider;
use crate::scanner::RegionScanner;
use crate::selector::InteractiveSelector;
use crate::types::RegionId;

/// Runs the discovery-to-artifact pipeline.
///
/// # Examples
///
/// ```no_run
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// use std::sync::Arc;
///
/// use bucketconf_core::{AwsBucketProvider, ConfigGenerator, GeneratorConfig, TerminalPrompter};
///
/// let config = GeneratorConfig::from_env();
/// let provider = Arc::new(AwsBucketProvider::from_env(&config).await);
/// let generator = ConfigGenerator::new(provider, &config);
/// let path = generator
///     .run(&bucketconf_core::known_regions(), &mut TerminalPrompter::stdio())
///     .await?;
/// println!("Configuration file generated at {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigGenerator {
    scanner: RegionScanner,
    fetcher: MetadataFetcher,
    emitter: ConfigEmitter,
}

impl ConfigGenerator {
    /// Wire the stages around one provider.
    #[must_use]
    pub fn new(provider: Arc<dyn BucketProvider>, config: &GeneratorConfig) -> Self {
        Self {
            scanner: RegionScanner::new(Arc::clone(&provider), config.scan_concurrency),
            fetcher: MetadataFetcher::new(provider),
            emitter: ConfigEmitter::new(config.output_dir.clone()),
        }
    }

    /// Run the pipeline over `regions`, asking the operator through `prompter`.
    ///
    /// Returns the path of the written artifact.
    pub async fn run<P: Prompter>(
        &self,
        regions: &[RegionId],
        prompter: &mut P,
    ) -> GeneratorResult<PathBuf> {
        let inventory = self.scanner.scan(regions).await;

        let selection = InteractiveSelector::new(prompter).select(&inventory)?;

        let metadata = self
            .fetcher
            .fetch(&selection.bucket_name, &selection.region)
            .await
            .map_err(|source| GeneratorError::Fetch {
                bucket: selection.bucket_name.clone(),
                source,
            })?;

        let path = self.emitter.emit(&metadata, &selection).await?;
        info!(
            bucket = %selection.bucket_name,
            region = %selection.region,
            path = %path.display(),
            "configuration generated"
        );
        Ok(path)
    }
}
