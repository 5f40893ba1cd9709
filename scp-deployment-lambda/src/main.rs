//! Lambda entry point for the SCP deployment pipeline actions.

use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::info;
use scp_deployment_lambda::config::{init_logging, HandlerConfig};
use scp_deployment_lambda::handler::{process_job, JobOutcome};
use scp_deployment_lambda::pipeline::AwsCodePipeline;
use scp_deployment_lambda::runner::AssumedRoleRunner;
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = HandlerConfig::from_env()?;
    init_logging(config.debug);

    let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let pipeline = AwsCodePipeline::new(aws_sdk_codepipeline::Client::new(&aws_config));
    let runner = AssumedRoleRunner::new(
        config.org_role.clone(),
        aws_sdk_s3::Client::new(&aws_config),
        aws_sdk_sts::Client::new(&aws_config),
    );

    let pipeline_ref = &pipeline;
    let runner_ref = &runner;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        info!("Received event: {}", event.payload);
        let outcome = process_job(&event.payload, pipeline_ref, runner_ref).await?;
        let status = match outcome {
            JobOutcome::Succeeded(_) => "SUCCESS",
            JobOutcome::Failed(_) => "FAILED",
        };
        Ok::<Value, Error>(json!({ "Status": status }))
    }))
    .await
}
