//! AWS Organizations client wrapper for SCP operations.

use crate::aws::{AwsError, AwsResult};
use crate::types::{AttachOutcome, PolicyListing, PolicyPage};
use async_trait::async_trait;
use aws_sdk_organizations::types::PolicyType;
use aws_sdk_organizations::Client as OrgClient;

/// The slice of the Organizations API the engine needs. Implemented by the
/// real SDK client below and by in-memory fakes in tests.
#[async_trait]
pub trait OrganizationsApi: Send + Sync {
    /// One page of the SERVICE_CONTROL_POLICY listing.
    async fn list_policies_page(&self, next_token: Option<String>) -> AwsResult<PolicyPage>;

    /// Create an SCP and return its policy id.
    async fn create_policy(&self, name: &str, description: &str, content: &str)
        -> AwsResult<String>;

    /// Replace name, description and content of an existing policy.
    async fn update_policy(
        &self,
        policy_id: &str,
        name: &str,
        description: &str,
        content: &str,
    ) -> AwsResult<()>;

    /// Attach a policy to a target. Duplicate-attachment and
    /// constraint-violation rejections are classified, not raised.
    async fn attach_policy(&self, policy_id: &str, target_id: &str) -> AwsResult<AttachOutcome>;
}

pub struct AwsOrganizationsClient {
    client: OrgClient,
}

impl AwsOrganizationsClient {
    pub fn new(client: OrgClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrganizationsApi for AwsOrganizationsClient {
    async fn list_policies_page(&self, next_token: Option<String>) -> AwsResult<PolicyPage> {
        let response = self
            .client
            .list_policies()
            .filter(PolicyType::ServiceControlPolicy)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| AwsError::OrganizationsError(format!("failed to list policies: {e}")))?;

        let policies = response
            .policies
            .unwrap_or_default()
            .into_iter()
            .filter_map(|summary| match (summary.id, summary.name) {
                (Some(id), Some(name)) => Some(PolicyListing { id, name }),
                _ => None,
            })
            .collect();

        Ok(PolicyPage {
            policies,
            next_token: response.next_token,
        })
    }

    async fn create_policy(
        &self,
        name: &str,
        description: &str,
        content: &str,
    ) -> AwsResult<String> {
        let response = self
            .client
            .create_policy()
            .name(name)
            .description(description)
            .content(content)
            .r#type(PolicyType::ServiceControlPolicy)
            .send()
            .await
            .map_err(|e| {
                AwsError::OrganizationsError(format!("failed to create policy '{name}': {e}"))
            })?;

        response
            .policy
            .and_then(|policy| policy.policy_summary)
            .and_then(|summary| summary.id)
            .ok_or_else(|| {
                AwsError::OrganizationsError(format!(
                    "CreatePolicy response for '{name}' is missing a policy id"
                ))
            })
    }

    async fn update_policy(
        &self,
        policy_id: &str,
        name: &str,
        description: &str,
        content: &str,
    ) -> AwsResult<()> {
        self.client
            .update_policy()
            .policy_id(policy_id)
            .name(name)
            .description(description)
            .content(content)
            .send()
            .await
            .map_err(|e| {
                AwsError::OrganizationsError(format!(
                    "failed to update policy '{name}' ({policy_id}): {e}"
                ))
            })?;
        Ok(())
    }

    async fn attach_policy(&self, policy_id: &str, target_id: &str) -> AwsResult<AttachOutcome> {
        match self
            .client
            .attach_policy()
            .policy_id(policy_id)
            .target_id(target_id)
            .send()
            .await
        {
            Ok(_) => Ok(AttachOutcome::Attached),
            Err(err) => match err.as_service_error() {
                Some(service_err) if service_err.is_duplicate_policy_attachment_exception() => {
                    Ok(AttachOutcome::DuplicateAttachment)
                }
                Some(service_err) if service_err.is_constraint_violation_exception() => {
                    Ok(AttachOutcome::ConstraintViolation)
                }
                _ => Err(AwsError::OrganizationsError(format!(
                    "failed to attach policy '{policy_id}' to '{target_id}': {err}"
                ))),
            },
        }
    }
}
