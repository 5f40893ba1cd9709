//! Manifest describing which SCPs belong to which organizational units.

use crate::error::{SyncError, SyncResult};
use serde::Deserialize;

/// Fixed key of the manifest inside the deployment bucket.
pub const MANIFEST_KEY: &str = "scp/metadata.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(rename = "ou-ids")]
    pub ou_ids: Vec<OuEntry>,
}

/// One organizational unit and the policy files declared for it.
#[derive(Debug, Clone, Deserialize)]
pub struct OuEntry {
    pub id: String,
    pub dir_name: String,
    pub scps: Vec<String>,
}

impl Manifest {
    pub fn parse(body: &str) -> SyncResult<Self> {
        serde_json::from_str(body)
            .map_err(|e| SyncError::Manifest(format!("malformed manifest at '{MANIFEST_KEY}': {e}")))
    }
}

impl OuEntry {
    /// Object key of one of this OU's policy files.
    pub fn policy_key(&self, file_name: &str) -> String {
        format!("scp/{}/{}", self.dir_name, file_name)
    }
}
