//! Handler-level error type.

use scp_deployment_sync::SyncError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("event error: {0}")]
    Event(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("unsupported pipeline action '{0}'")]
    UnknownAction(String),
    #[error("CodePipeline error: {0}")]
    Pipeline(String),
    #[error(transparent)]
    Sync(#[from] SyncError),
}

pub type HandlerResult<T> = Result<T, HandlerError>;
