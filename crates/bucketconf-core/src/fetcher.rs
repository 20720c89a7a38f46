//! Access metadata retrieval for the selected bucket.

use std::sync::Arc;

use tracing::debug;

use crate::error::ProviderError;
use crate::provider::BucketProvider;
use crate::types::{BucketMetadata, RegionId};

/// Fetches the location constraint and ACL of one bucket.
#[derive(Debug, Clone)]
pub struct MetadataFetcher {
    provider: Arc<dyn BucketProvider>,
}

impl MetadataFetcher {
    /// Create a fetcher over `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn BucketProvider>) -> Self {
        Self { provider }
    }

    /// Issue both queries concurrently; either failure fails the fetch.
    pub async fn fetch(
        &self,
        bucket: &str,
        region: &RegionId,
    ) -> Result<BucketMetadata, ProviderError> {
        let (location_constraint, grants) = tokio::try_join!(
            self.provider.get_bucket_location(bucket, region),
            self.provider.get_bucket_acl(bucket, region),
        )?;

        debug!(bucket, region = %region, grants = grants.len(), "bucket metadata fetched");
        Ok(BucketMetadata {
            location_constraint,
            grants,
        })
    }
}
