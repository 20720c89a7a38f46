//! AWS provider integration tests.

#[cfg(test)]
mod tests {
    use bucketconf_core::{BucketProvider, ProviderError, RegionId};

    use crate::{cleanup_bucket, create_test_bucket, provider, s3_client, unique_bucket_name};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_list_created_bucket() {
        let client = s3_client().await;
        let bucket = create_test_bucket(&client, "list").await;

        let names = provider()
            .await
            .list_buckets(&RegionId::new("us-east-1"))
            .await
            .expect("list_buckets");
        assert!(names.contains(&bucket), "should contain {bucket}");

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_get_location_and_acl() {
        let client = s3_client().await;
        let bucket = create_test_bucket(&client, "meta").await;
        let region = RegionId::new("us-east-1");
        let provider = provider().await;

        let location = provider
            .get_bucket_location(&bucket, &region)
            .await
            .expect("get_bucket_location");
        assert!(location.is_object());

        let grants = provider
            .get_bucket_acl(&bucket, &region)
            .await
            .expect("get_bucket_acl");
        assert!(!grants.is_empty(), "owner grant expected");
        assert!(grants.iter().all(|g| g.get("Permission").is_some()));

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_fail_acl_for_missing_bucket() {
        let name = unique_bucket_name("ghost");

        let result = provider()
            .await
            .get_bucket_acl(&name, &RegionId::new("us-east-1"))
            .await;

        assert!(matches!(result, Err(ProviderError::GetBucketAcl { .. })));
    }
}
