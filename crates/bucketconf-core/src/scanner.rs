//! Region-wide bucket discovery.
//!
//! [`RegionScanner::scan`] queries every region with a bounded fan-out and
//! reassembles the answers in input order. A region whose query fails is
//! reported as having no buckets; the failure never reaches the caller.

use std::sync::Arc;

use futures::StreamExt;
use futures::stream;
use tracing::{debug, info};

use crate::provider::BucketProvider;
use crate::types::{RegionId, RegionInventory};

/// Lists buckets across regions.
#[derive(Debug, Clone)]
pub struct RegionScanner {
    provider: Arc<dyn BucketProvider>,
    concurrency: usize,
}

impl RegionScanner {
    /// Create a scanner running at most `concurrency` queries at once.
    ///
    /// A concurrency of zero is treated as one.
    #[must_use]
    pub fn new(provider: Arc<dyn BucketProvider>, concurrency: usize) -> Self {
        Self {
            provider,
            concurrency: concurrency.max(1),
        }
    }

    /// Build one inventory per region, in the order of `regions`.
    pub async fn scan(&self, regions: &[RegionId]) -> Vec<RegionInventory> {
        let mut slots: Vec<RegionInventory> =
            regions.iter().cloned().map(RegionInventory::empty).collect();

        let mut results = stream::iter(regions.iter().enumerate())
            .map(|(index, region)| async move {
                (index, self.scan_region(region).await)
            })
            .buffer_unordered(self.concurrency);

        while let Some((index, bucket_names)) = results.next().await {
            slots[index] = RegionInventory::new(regions[index].clone(), bucket_names);
        }

        let total: usize = slots.iter().map(RegionInventory::count).sum();
        info!(regions = slots.len(), buckets = total, "region scan completed");
        slots
    }

    async fn scan_region(&self, region: &RegionId) -> Vec<String> {
        match self.provider.list_buckets(region).await {
            Ok(names) => names,
            Err(e) => {
                debug!(region = %region, error = %e, "treating region as empty");
                Vec::new()
            }
        }
    }
}
