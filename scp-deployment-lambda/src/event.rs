//! CodePipeline job event model.

use crate::error::{HandlerError, HandlerResult};
use serde::Deserialize;
use serde_json::Value;

/// The fields of a CodePipeline custom-action event the handler needs.
#[derive(Debug, Clone)]
pub struct PipelineJobEvent {
    id: String,
    user_parameters: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserParameters {
    #[serde(rename = "BucketName")]
    bucket_name: String,
}

impl PipelineJobEvent {
    /// Extract the job id and the user-parameter blob from the raw event.
    /// The id is mandatory: without it no job result can be reported at all.
    pub fn parse(event: &Value) -> HandlerResult<Self> {
        let id = event
            .pointer("/CodePipeline.job/id")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                HandlerError::Event("event is missing 'CodePipeline.job'.id".to_string())
            })?
            .to_string();

        let user_parameters = event
            .pointer("/CodePipeline.job/data/actionConfiguration/configuration/UserParameters")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { id, user_parameters })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Bucket name from the JSON-encoded `UserParameters` blob.
    pub fn bucket_name(&self) -> HandlerResult<String> {
        let blob = self
            .user_parameters
            .as_deref()
            .ok_or_else(|| HandlerError::Event("event carries no UserParameters".to_string()))?;
        let params: UserParameters = serde_json::from_str(blob)
            .map_err(|e| HandlerError::Event(format!("malformed UserParameters: {e}")))?;
        Ok(params.bucket_name)
    }
}
