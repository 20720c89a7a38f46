//! Integration tests for bucketconf against an S3-compatible server.
//!
//! These tests require a running server at `localhost:4566` (override with
//! `S3_ENDPOINT_URL`). They are marked `#[ignore]` so they don't run during
//! normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p bucketconf-integration -- --ignored
//! ```

use std::sync::Once;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use bucketconf_core::AwsBucketProvider;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Server used when `S3_ENDPOINT_URL` is unset or blank.
const DEFAULT_ENDPOINT: &str = "http://localhost:4566";

/// Endpoint of the S3-compatible server, without a trailing slash.
fn server_endpoint() -> String {
    std::env::var("S3_ENDPOINT_URL")
        .ok()
        .map(|url| url.trim().trim_end_matches('/').to_owned())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned())
}

/// Load an SDK configuration pointing at the local server.
pub async fn sdk_config() -> SdkConfig {
    init_tracing();

    let creds = Credentials::new("test", "test", None, None, "integration-test");

    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(creds)
        .endpoint_url(server_endpoint())
        .load()
        .await
}

/// Provider under test, using path-style addressing.
pub async fn provider() -> AwsBucketProvider {
    AwsBucketProvider::new(sdk_config().await).with_force_path_style(true)
}

/// Raw S3 client for fixture setup and cleanup.
pub async fn s3_client() -> aws_sdk_s3::Client {
    let config = aws_sdk_s3::config::Builder::from(&sdk_config().await)
        .force_path_style(true)
        .build();
    aws_sdk_s3::Client::from_conf(config)
}

/// Bucket name that is unique per call and valid for S3 (lowercase, at most 63 bytes).
#[must_use]
pub fn unique_bucket_name(label: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    let mut name = format!("bucketconf-{}-{}", label.to_ascii_lowercase(), &id[..12]);
    name.truncate(63);
    name
}

/// Create a bucket and return its name. Caller is responsible for cleanup.
pub async fn create_test_bucket(client: &aws_sdk_s3::Client, prefix: &str) -> String {
    let name = unique_bucket_name(prefix);
    client
        .create_bucket()
        .bucket(&name)
        .send()
        .await
        .unwrap_or_else(|e| panic!("failed to create bucket {name}: {e}"));
    name
}

/// Delete a bucket, ignoring errors (it may already be gone).
pub async fn cleanup_bucket(client: &aws_sdk_s3::Client, bucket: &str) {
    let _ = client.delete_bucket().bucket(bucket).send().await;
}

mod test_provider;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_generate_distinct_valid_bucket_names() {
        let a = unique_bucket_name("Listing");
        let b = unique_bucket_name("Listing");
        assert_ne!(a, b);
        assert!(a.starts_with("bucketconf-listing-"));
        assert!(a.len() <= 63);
        assert!(a.bytes().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == b'-'));
    }
}
