//! S3-backed storage for the manifest and policy documents.

use crate::aws::{AwsError, AwsResult};
use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;

/// Read-only view of the deployment bucket.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Fetch an object and decode it as UTF-8 text.
    async fn fetch_object(&self, bucket: &str, key: &str) -> AwsResult<String>;
}

pub struct S3PolicyStore {
    client: S3Client,
}

impl S3PolicyStore {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PolicyStore for S3PolicyStore {
    async fn fetch_object(&self, bucket: &str, key: &str) -> AwsResult<String> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AwsError::StorageError(format!("failed to fetch 's3://{bucket}/{key}': {e}"))
            })?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| {
                AwsError::StorageError(format!("failed to read 's3://{bucket}/{key}': {e}"))
            })?
            .into_bytes();

        String::from_utf8(bytes.to_vec()).map_err(|e| {
            AwsError::StorageError(format!("'s3://{bucket}/{key}' is not valid UTF-8: {e}"))
        })
    }
}
