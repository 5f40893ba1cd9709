//! Run-level error type for the synchronization engine.

use crate::aws::AwsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("manifest error: {0}")]
    Manifest(String),
    #[error("policy '{0}' does not exist in the organization")]
    PolicyNotFound(String),
    #[error(transparent)]
    Aws(#[from] AwsError),
}

pub type SyncResult<T> = Result<T, SyncError>;
