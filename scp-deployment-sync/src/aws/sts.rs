//! Role assumption for cross-account Organizations access.

use crate::aws::{AwsError, AwsResult};
use aws_sdk_organizations::Client as OrgClient;
use aws_sdk_sts::Client as StsClient;

/// Assume the Organizations management role and return a client scoped to the
/// temporary credentials. The credentials live only as long as the run that
/// requested them.
pub async fn assume_org_role(
    client: &StsClient,
    role_arn: &str,
    session_name: &str,
) -> AwsResult<OrgClient> {
    let response = client
        .assume_role()
        .role_arn(role_arn)
        .role_session_name(session_name)
        .send()
        .await
        .map_err(|e| AwsError::StsError(format!("failed to assume role '{role_arn}': {e}")))?;

    let credentials = response.credentials.ok_or_else(|| {
        AwsError::StsError(format!("AssumeRole response for '{role_arn}' is missing credentials"))
    })?;

    let provider = aws_sdk_organizations::config::Credentials::new(
        credentials.access_key_id,
        credentials.secret_access_key,
        Some(credentials.session_token),
        None,
        "ScpDeploymentAssumedRole",
    );

    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .credentials_provider(provider)
        .load()
        .await;

    Ok(OrgClient::new(&config))
}
