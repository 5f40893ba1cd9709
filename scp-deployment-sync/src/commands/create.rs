//! Create/update pass: converge the organization's SCPs to the manifest.

use crate::commands::service::{PolicyRegistry, ScpSyncService};
use crate::error::SyncResult;
use crate::manifest::OuEntry;
use crate::naming::{policy_description, policy_name};
use crate::types::RunSummary;
use log::info;

impl ScpSyncService {
    /// Update the named policy in place when it already exists, otherwise
    /// create it and record the new id so later iterations of this run see it.
    pub(crate) async fn create_or_update(
        &self,
        bucket: &str,
        ou: &OuEntry,
        file_name: &str,
        registry: &mut PolicyRegistry,
        summary: &mut RunSummary,
    ) -> SyncResult<()> {
        let name = policy_name(file_name, &ou.dir_name);
        let description = policy_description(file_name, &ou.dir_name);
        let content = self.store.fetch_object(bucket, &ou.policy_key(file_name)).await?;

        if let Some(policy_id) = registry.get(&name) {
            info!("Updating policy '{name}' ({policy_id})");
            self.org.update_policy(policy_id, &name, &description, &content).await?;
            summary.updated += 1;
        } else {
            info!("Creating policy '{name}'");
            let policy_id = self.org.create_policy(&name, &description, &content).await?;
            registry.insert(name, policy_id);
            summary.created += 1;
        }
        Ok(())
    }
}
