//! CodePipeline job metadata and result reporting.

use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use aws_sdk_codepipeline::types::{FailureDetails, FailureType};
use aws_sdk_codepipeline::Client as CodePipelineClient;

/// The slice of the CodePipeline API the handler needs. Tests substitute a
/// recording fake to check the exactly-once reporting contract.
#[async_trait]
pub trait PipelineJobApi: Send + Sync {
    /// Action name configured for this job in the pipeline definition.
    async fn action_name(&self, job_id: &str) -> HandlerResult<String>;

    async fn report_success(&self, job_id: &str) -> HandlerResult<()>;

    async fn report_failure(&self, job_id: &str, message: &str) -> HandlerResult<()>;
}

pub struct AwsCodePipeline {
    client: CodePipelineClient,
}

impl AwsCodePipeline {
    pub fn new(client: CodePipelineClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PipelineJobApi for AwsCodePipeline {
    async fn action_name(&self, job_id: &str) -> HandlerResult<String> {
        let response = self
            .client
            .get_job_details()
            .job_id(job_id)
            .send()
            .await
            .map_err(|e| {
                HandlerError::Pipeline(format!("failed to get details for job '{job_id}': {e}"))
            })?;

        response
            .job_details
            .and_then(|details| details.data)
            .and_then(|data| data.pipeline_context)
            .and_then(|context| context.action)
            .and_then(|action| action.name)
            .ok_or_else(|| {
                HandlerError::Pipeline(format!("job '{job_id}' has no pipeline action name"))
            })
    }

    async fn report_success(&self, job_id: &str) -> HandlerResult<()> {
        self.client
            .put_job_success_result()
            .job_id(job_id)
            .send()
            .await
            .map_err(|e| {
                HandlerError::Pipeline(format!("failed to report success for job '{job_id}': {e}"))
            })?;
        Ok(())
    }

    async fn report_failure(&self, job_id: &str, message: &str) -> HandlerResult<()> {
        let details = FailureDetails::builder()
            .r#type(FailureType::JobFailed)
            .message(message)
            .build()
            .map_err(|e| HandlerError::Pipeline(format!("invalid failure details: {e}")))?;

        self.client
            .put_job_failure_result()
            .job_id(job_id)
            .failure_details(details)
            .send()
            .await
            .map_err(|e| {
                HandlerError::Pipeline(format!("failed to report failure for job '{job_id}': {e}"))
            })?;
        Ok(())
    }
}
