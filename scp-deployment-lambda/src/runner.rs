//! Execution seam between the handler and the synchronization engine.

use crate::error::HandlerResult;
use async_trait::async_trait;
use scp_deployment_sync::{
    assume_org_role, AwsOrganizationsClient, RunSummary, S3PolicyStore, ScpSyncService, SyncError,
    SyncMode,
};

/// Runs one synchronization pass. The production implementation assumes the
/// Organizations role first; tests swap in a stub.
#[async_trait]
pub trait ModeRunner: Send + Sync {
    async fn run(&self, mode: SyncMode, bucket: &str) -> HandlerResult<RunSummary>;
}

/// Production runner: per-run role assumption, then the real engine.
pub struct AssumedRoleRunner {
    org_role: String,
    s3: aws_sdk_s3::Client,
    sts: aws_sdk_sts::Client,
}

impl AssumedRoleRunner {
    pub fn new(org_role: String, s3: aws_sdk_s3::Client, sts: aws_sdk_sts::Client) -> Self {
        Self { org_role, s3, sts }
    }
}

#[async_trait]
impl ModeRunner for AssumedRoleRunner {
    async fn run(&self, mode: SyncMode, bucket: &str) -> HandlerResult<RunSummary> {
        let org = assume_org_role(&self.sts, &self.org_role, mode.session_name())
            .await
            .map_err(SyncError::from)?;

        let service = ScpSyncService::new(
            Box::new(S3PolicyStore::new(self.s3.clone())),
            Box::new(AwsOrganizationsClient::new(org)),
        );
        Ok(service.run(mode, bucket).await?)
    }
}
