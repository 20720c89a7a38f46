//! [`BucketProvider`] backed by the AWS SDK for S3.
//!
//! Every call builds a client for the requested region from one shared,
//! immutable [`SdkConfig`]. Credentials and endpoint overrides come from the
//! standard AWS environment (`AWS_PROFILE`, `AWS_ENDPOINT_URL`, ...).

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::get_bucket_location::GetBucketLocationOutput;
use aws_sdk_s3::types::{Grant, Grantee};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::ProviderError;
use crate::provider::BucketProvider;
use crate::types::{AccessGrant, RegionId};

/// S3 bucket provider using the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsBucketProvider {
    sdk_config: SdkConfig,
    force_path_style: bool,
}

impl AwsBucketProvider {
    /// Create a provider from an already loaded SDK configuration.
    #[must_use]
    pub fn new(sdk_config: SdkConfig) -> Self {
        Self {
            sdk_config,
            force_path_style: false,
        }
    }

    /// Load the SDK configuration from the environment.
    pub async fn from_env(config: &GeneratorConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::new(sdk_config).with_force_path_style(config.force_path_style)
    }

    /// Use path-style addressing (needed by most S3-compatible servers).
    #[must_use]
    pub fn with_force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Build a client scoped to `region`.
    fn client(&self, region: &RegionId) -> Client {
        let s3_config = aws_sdk_s3::config::Builder::from(&self.sdk_config)
            .region(Region::new(region.as_str().to_owned()))
            .force_path_style(self.force_path_style)
            .build();
        Client::from_conf(s3_config)
    }
}

#[async_trait]
impl BucketProvider for AwsBucketProvider {
    async fn list_buckets(&self, region: &RegionId) -> Result<Vec<String>, ProviderError> {
        let output = self
            .client(region)
            .list_buckets()
            .bucket_region(region.as_str())
            .send()
            .await
            .map_err(|e| ProviderError::ListBuckets {
                region: region.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let names: Vec<String> = output
            .buckets()
            .iter()
            .filter_map(|b| b.name())
            .map(ToOwned::to_owned)
            .collect();

        debug!(region = %region, count = names.len(), "list_buckets completed");
        Ok(names)
    }

    async fn get_bucket_location(
        &self,
        bucket: &str,
        region: &RegionId,
    ) -> Result<Value, ProviderError> {
        let output = self
            .client(region)
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| ProviderError::GetBucketLocation {
                bucket: bucket.to_owned(),
                region: region.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(location_to_json(&output))
    }

    async fn get_bucket_acl(
        &self,
        bucket: &str,
        region: &RegionId,
    ) -> Result<Vec<AccessGrant>, ProviderError> {
        let output = self
            .client(region)
            .get_bucket_acl()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| ProviderError::GetBucketAcl {
                bucket: bucket.to_owned(),
                region: region.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(output.grants().iter().map(grant_to_json).collect())
    }
}

/// Render the location response in the provider's wire field names.
///
/// `us-east-1` buckets carry no constraint and render as `{}`.
fn location_to_json(output: &GetBucketLocationOutput) -> Value {
    let mut record = Map::new();
    if let Some(constraint) = output.location_constraint() {
        record.insert(
            "LocationConstraint".to_owned(),
            Value::String(constraint.as_str().to_owned()),
        );
    }
    Value::Object(record)
}

/// Render one grant in the provider's wire field names, omitting absent fields.
fn grant_to_json(grant: &Grant) -> AccessGrant {
    let mut record = Map::new();
    if let Some(grantee) = grant.grantee() {
        record.insert("Grantee".to_owned(), grantee_to_json(grantee));
    }
    if let Some(permission) = grant.permission() {
        record.insert(
            "Permission".to_owned(),
            Value::String(permission.as_str().to_owned()),
        );
    }
    Value::Object(record)
}

fn grantee_to_json(grantee: &Grantee) -> Value {
    let mut record = Map::new();
    let mut put = |key: &str, value: Option<&str>| {
        if let Some(v) = value {
            record.insert(key.to_owned(), Value::String(v.to_owned()));
        }
    };
    put("DisplayName", grantee.display_name());
    put("EmailAddress", grantee.email_address());
    put("ID", grantee.id());
    put("Type", Some(grantee.r#type().as_str()));
    put("URI", grantee.uri());
    Value::Object(record)
}
