//! Synchronization service
//!
//! Holds the client seams and the registry logic shared by the create and
//! attach passes. The service is constructed once per run; the pipeline
//! invokes one run per job, so credentials and registry state never outlive
//! a single invocation.

use crate::aws::org_client::OrganizationsApi;
use crate::aws::policy_store::PolicyStore;
use crate::error::SyncResult;
use crate::manifest::{Manifest, MANIFEST_KEY};
use crate::types::{RunSummary, SyncMode};
use log::{debug, info};
use std::collections::HashMap;

/// Name-to-id map of every SERVICE_CONTROL_POLICY in the organization,
/// fetched once per run and kept current as policies are created.
pub(crate) type PolicyRegistry = HashMap<String, String>;

pub struct ScpSyncService {
    pub(crate) store: Box<dyn PolicyStore>,
    pub(crate) org: Box<dyn OrganizationsApi>,
}

impl ScpSyncService {
    pub fn new(store: Box<dyn PolicyStore>, org: Box<dyn OrganizationsApi>) -> Self {
        Self { store, org }
    }

    /// Run one full pass over the manifest in the given mode.
    ///
    /// OU entries and their policy files are processed strictly in manifest
    /// order. Already-applied changes are not rolled back when a later step
    /// fails; the run reports the failure and stops.
    pub async fn run(&self, mode: SyncMode, bucket: &str) -> SyncResult<RunSummary> {
        info!("Bucket name: {bucket}");

        let manifest = self.load_manifest(bucket).await?;
        let mut registry = self.load_registry().await?;
        debug!("Loaded {} existing policies", registry.len());

        let mut summary = RunSummary::default();
        for ou in &manifest.ou_ids {
            for file_name in &ou.scps {
                match mode {
                    SyncMode::Create => {
                        self.create_or_update(bucket, ou, file_name, &mut registry, &mut summary)
                            .await?;
                    }
                    SyncMode::Attach => {
                        self.attach(bucket, ou, file_name, &registry, &mut summary).await?;
                    }
                }
            }
        }

        info!("Run complete: {summary:?}");
        Ok(summary)
    }

    async fn load_manifest(&self, bucket: &str) -> SyncResult<Manifest> {
        let body = self.store.fetch_object(bucket, MANIFEST_KEY).await?;
        Manifest::parse(&body)
    }

    /// Aggregate every page of the SERVICE_CONTROL_POLICY listing.
    pub(crate) async fn load_registry(&self) -> SyncResult<PolicyRegistry> {
        let mut registry = PolicyRegistry::new();
        let mut next_token = None;
        loop {
            let page = self.org.list_policies_page(next_token).await?;
            for listing in page.policies {
                registry.insert(listing.name, listing.id);
            }
            match page.next_token {
                Some(token) => {
                    debug!("Next policy listing token: {token}");
                    next_token = Some(token);
                }
                None => break,
            }
        }
        Ok(registry)
    }
}
