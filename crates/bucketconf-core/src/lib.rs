//! Discover S3 buckets across regions and turn one of them into a config file.
//!
//! # Architecture
//!
//! ```text
//! RegionScanner      list buckets per region (bounded fan-out)
//!        |
//!        v
//! InteractiveSelector region, then bucket + format
//!        |
//!        v
//! MetadataFetcher    location constraint + ACL grants
//!        |
//!        v
//! ConfigEmitter      .env or config.json
//! ```
//!
//! [`ConfigGenerator`] wires the stages together. The provider and the
//! operator are reached through the [`BucketProvider`] and [`Prompter`]
//! traits.

pub mod aws;
pub mod config;
pub mod emitter;
pub mod error;
pub mod fetcher;
pub mod generator;
pub mod prompt;
pub mod provider;
pub mod regions;
pub mod scanner;
pub mod selector;
#[cfg(test)]
mod testing;
pub mod types;

pub use aws::AwsBucketProvider;
pub use config::GeneratorConfig;
pub use emitter::ConfigEmitter;
pub use error::{EmitError, GeneratorError, GeneratorResult, PromptError, ProviderError, SelectError};
pub use fetcher::MetadataFetcher;
pub use generator::ConfigGenerator;
pub use prompt::{Prompter, Question, TerminalPrompter};
pub use provider::BucketProvider;
pub use regions::{KNOWN_REGIONS, known_regions};
pub use scanner::RegionScanner;
pub use selector::InteractiveSelector;
pub use types::{AccessGrant, BucketMetadata, OutputFormat, RegionId, RegionInventory, Selection};
