//! Error types for every pipeline stage.
//!
//! Listing failures ([`ProviderError::ListBuckets`]) are absorbed by the
//! scanner. Every other error aborts the run before the artifact is written.

use std::path::PathBuf;

use crate::types::RegionId;

/// Failure reported by a [`crate::provider::BucketProvider`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Listing buckets in a region failed.
    #[error("failed to list buckets in {region}: {message}")]
    ListBuckets {
        /// Region that was queried.
        region: RegionId,
        /// Provider error message.
        message: String,
    },

    /// Reading the bucket location failed.
    #[error("failed to get location of bucket {bucket} in {region}: {message}")]
    GetBucketLocation {
        /// Bucket that was queried.
        bucket: String,
        /// Region that was queried.
        region: RegionId,
        /// Provider error message.
        message: String,
    },

    /// Reading the bucket ACL failed.
    #[error("failed to get ACL of bucket {bucket} in {region}: {message}")]
    GetBucketAcl {
        /// Bucket that was queried.
        bucket: String,
        /// Region that was queried.
        region: RegionId,
        /// Provider error message.
        message: String,
    },
}

/// Failure of the prompt primitive.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The operator closed the input stream.
    #[error("prompt interrupted by operator")]
    Interrupted,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of the interactive selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// No region holds any bucket, so nothing can be selected.
    #[error("no buckets found in any region")]
    NoBuckets,

    /// The operator aborted the selection.
    #[error("selection interrupted by operator")]
    Interrupted,

    /// The prompter answered with a choice that was never offered.
    #[error("prompter returned choice {index} of {len} for {question:?}")]
    InvalidAnswer {
        /// Question text.
        question: String,
        /// Returned index.
        index: usize,
        /// Number of offered choices.
        len: usize,
    },

    /// The prompt primitive failed.
    #[error(transparent)]
    Prompt(PromptError),
}

impl From<PromptError> for SelectError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Interrupted => Self::Interrupted,
            other @ PromptError::Io(_) => Self::Prompt(other),
        }
    }
}

/// Failure while writing the artifact.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// Grants could not be encoded as JSON.
    #[error("failed to encode configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The artifact could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Fatal error of a generator run.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Interactive selection failed.
    #[error(transparent)]
    Select(#[from] SelectError),

    /// Fetching metadata of the selected bucket failed.
    #[error("failed to fetch metadata for bucket {bucket}: {source}")]
    Fetch {
        /// Selected bucket.
        bucket: String,
        /// Provider failure.
        source: ProviderError,
    },

    /// Writing the artifact failed.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Convenience result type for generator runs.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
