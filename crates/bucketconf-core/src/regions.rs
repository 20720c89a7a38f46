//! Static set of regions scanned on every run.

use crate::types::RegionId;

/// Regions queried for buckets, in the order they are presented.
pub const KNOWN_REGIONS: [&str; 20] = [
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-east-1",
    "ap-south-1",
    "ap-northeast-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-northeast-1",
    "ca-central-1",
    "eu-central-1",
    "eu-west-1",
    "eu-west-2",
    "eu-south-1",
    "eu-west-3",
    "eu-north-1",
    "me-south-1",
    "sa-east-1",
];

/// [`KNOWN_REGIONS`] as owned identifiers.
#[must_use]
pub fn known_regions() -> Vec<RegionId> {
    KNOWN_REGIONS.iter().copied().map(RegionId::from).collect()
}
