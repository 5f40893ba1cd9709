//! Attach pass: bind every declared SCP to its organizational unit.

use crate::commands::service::{PolicyRegistry, ScpSyncService};
use crate::error::{SyncError, SyncResult};
use crate::manifest::OuEntry;
use crate::naming::policy_name;
use crate::types::{AttachOutcome, RunSummary};
use log::info;

impl ScpSyncService {
    /// Attach one declared policy to its OU. The policy must already exist
    /// in the registry; duplicate attachments and constraint violations are
    /// logged and skipped.
    pub(crate) async fn attach(
        &self,
        bucket: &str,
        ou: &OuEntry,
        file_name: &str,
        registry: &PolicyRegistry,
        summary: &mut RunSummary,
    ) -> SyncResult<()> {
        let name = policy_name(file_name, &ou.dir_name);

        // The manifest must not reference files that were never uploaded,
        // even though the attach call itself only needs the policy id.
        self.store.fetch_object(bucket, &ou.policy_key(file_name)).await?;

        let policy_id = registry
            .get(&name)
            .ok_or_else(|| SyncError::PolicyNotFound(name.clone()))?;

        match self.org.attach_policy(policy_id, &ou.id).await? {
            AttachOutcome::Attached => {
                info!("Attached policy '{name}' to '{}'", ou.id);
                summary.attached += 1;
            }
            AttachOutcome::DuplicateAttachment => {
                info!("Policy '{name}' is already attached to '{}', skipping", ou.id);
                summary.skipped += 1;
            }
            AttachOutcome::ConstraintViolation => {
                info!("Policy '{name}' cannot be attached to '{}', skipping", ou.id);
                summary.skipped += 1;
            }
        }
        Ok(())
    }
}
