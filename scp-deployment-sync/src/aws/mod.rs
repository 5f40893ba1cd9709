//! AWS SDK integration: Organizations client wrapper, S3 policy store, role assumption.

pub(crate) mod org_client;
pub(crate) mod policy_store;
pub(crate) mod sts;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("Organizations client error: {0}")]
    OrganizationsError(String),
    #[error("object store error: {0}")]
    StorageError(String),
    #[error("STS error: {0}")]
    StsError(String),
}

pub type AwsResult<T> = Result<T, AwsError>;
