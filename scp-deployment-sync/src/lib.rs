//! This crate provides the core engine for pipeline-driven SCP deployment:
//! - manifest parsing and policy-name derivation
//! - the registry of existing SERVICE_CONTROL_POLICY policies (paginated listing)
//! - the create/update and attach passes over the manifest
//!

mod aws;
pub mod commands;
mod error;
mod manifest;
mod naming;
mod types;

// Re-exports for a small, focused public API
pub use aws::org_client::{AwsOrganizationsClient, OrganizationsApi};
pub use aws::policy_store::{PolicyStore, S3PolicyStore};
pub use aws::sts::assume_org_role;
pub use aws::AwsError;
pub use commands::ScpSyncService;
pub use error::{SyncError, SyncResult};
pub use manifest::{Manifest, OuEntry, MANIFEST_KEY};
pub use naming::{policy_description, policy_name, title_case};
pub use types::{AttachOutcome, PolicyListing, PolicyPage, RunSummary, SyncMode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_name_for_manifest_entry() {
        assert_eq!(policy_name("deny-root.json", "security"), "Deny-Root-Security");
        assert_eq!(
            policy_description("deny-root.json", "security"),
            "Deny-Root SCP for Security"
        );
    }
}
