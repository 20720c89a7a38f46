//! Data model shared by the pipeline stages.

use std::fmt;

/// AWS region identifier (e.g. `eu-west-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionId(String);

impl RegionId {
    /// Create a new region identifier.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Buckets visible in one region, in the order the provider returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInventory {
    region: RegionId,
    bucket_names: Vec<String>,
}

impl RegionInventory {
    /// Create an inventory for `region` holding `bucket_names`.
    #[must_use]
    pub fn new(region: RegionId, bucket_names: Vec<String>) -> Self {
        Self {
            region,
            bucket_names,
        }
    }

    /// Create an inventory with no buckets.
    #[must_use]
    pub fn empty(region: RegionId) -> Self {
        Self::new(region, Vec::new())
    }

    /// The region this inventory describes.
    #[must_use]
    pub fn region(&self) -> &RegionId {
        &self.region
    }

    /// Bucket names in provider order.
    #[must_use]
    pub fn bucket_names(&self) -> &[String] {
        &self.bucket_names
    }

    /// Number of buckets in the region.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bucket_names.len()
    }

    /// Whether the region has no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bucket_names.is_empty()
    }

    /// Label shown to the operator when choosing a region.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({} Buckets)", self.region, self.count())
    }
}

/// Output artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `KEY=VALUE` lines written to `.env`.
    Env,
    /// Pretty-printed JSON written to `config.json`.
    Json,
}

impl OutputFormat {
    /// All formats, in the order they are offered to the operator.
    pub const ALL: [Self; 2] = [Self::Env, Self::Json];

    /// The label offered to the operator.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Env => ".env",
            Self::Json => "json",
        }
    }

    /// File name of the artifact written for this format.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Env => ".env",
            Self::Json => "config.json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The operator's choices for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen region.
    pub region: RegionId,
    /// Chosen bucket, always one of the region's bucket names.
    pub bucket_name: String,
    /// Chosen artifact format.
    pub format: OutputFormat,
}

/// An ACL grant exactly as the provider described it.
pub type AccessGrant = serde_json::Value;

/// Access metadata of the selected bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketMetadata {
    /// Location constraint record, passed through untouched.
    pub location_constraint: serde_json::Value,
    /// ACL grants in provider order.
    pub grants: Vec<AccessGrant>,
}
