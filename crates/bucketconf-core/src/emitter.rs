//! Configuration artifact rendering and writing.
//!
//! The artifact lands at a fixed name inside the output directory (`.env` or
//! `config.json`) and replaces any previous file in a single write.
//!
//! # Formats
//!
//! ```text
//! BUCKET_NAME=<bucket>
//! REGION=<region>
//! ACL=<grants as single-line JSON>
//! ```
//!
//! ```text
//! {
//!   "bucketName": "<bucket>",
//!   "region": "<region>",
//!   "acl": [ ... ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::EmitError;
use crate::types::{AccessGrant, BucketMetadata, OutputFormat, Selection};

/// JSON artifact layout; field order is the output key order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonArtifact<'a> {
    bucket_name: &'a str,
    region: &'a str,
    acl: &'a [AccessGrant],
}

/// Writes the configuration artifact.
#[derive(Debug, Clone)]
pub struct ConfigEmitter {
    output_dir: PathBuf,
}

impl ConfigEmitter {
    /// Create an emitter writing into `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the artifact for `format`.
    #[must_use]
    pub fn path_for(&self, format: OutputFormat) -> PathBuf {
        self.output_dir.join(format.file_name())
    }

    /// Render the artifact contents.
    pub fn render(metadata: &BucketMetadata, selection: &Selection) -> Result<String, EmitError> {
        match selection.format {
            OutputFormat::Env => Ok(format!(
                "BUCKET_NAME={}\nREGION={}\nACL={}",
                selection.bucket_name,
                selection.region,
                serde_json::to_string(&metadata.grants)?
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonArtifact {
                bucket_name: &selection.bucket_name,
                region: selection.region.as_str(),
                acl: &metadata.grants,
            })?),
        }
    }

    /// Render and write the artifact, returning its path.
    pub async fn emit(
        &self,
        metadata: &BucketMetadata,
        selection: &Selection,
    ) -> Result<PathBuf, EmitError> {
        let contents = Self::render(metadata, selection)?;
        let path = self.path_for(selection.format);
        write_artifact(&path, contents).await?;

        info!(path = %path.display(), format = %selection.format, "configuration written");
        Ok(path)
    }
}

async fn write_artifact(path: &Path, contents: String) -> Result<(), EmitError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| EmitError::Write {
            path: path.to_owned(),
            source,
        })
}
