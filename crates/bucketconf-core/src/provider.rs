//! Provider capability consumed by the pipeline.
//!
//! The region is passed explicitly on every call; implementations must not
//! keep a "current region" between calls.
//!
//! # Object safety
//!
//! The trait uses `#[async_trait]` so the scanner and fetcher can share one
//! `Arc<dyn BucketProvider>`.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{AccessGrant, RegionId};

/// Bucket listing and metadata capability of an object-storage provider.
#[async_trait]
pub trait BucketProvider: Send + Sync + std::fmt::Debug {
    /// Names of the buckets visible when querying `region`.
    async fn list_buckets(&self, region: &RegionId) -> Result<Vec<String>, ProviderError>;

    /// Location constraint record of `bucket`.
    async fn get_bucket_location(
        &self,
        bucket: &str,
        region: &RegionId,
    ) -> Result<serde_json::Value, ProviderError>;

    /// ACL grants of `bucket`.
    async fn get_bucket_acl(
        &self,
        bucket: &str,
        region: &RegionId,
    ) -> Result<Vec<AccessGrant>, ProviderError>;
}
