//! Job orchestration: resolve the pipeline action, run the matching pass,
//! and report the result back to CodePipeline exactly once.

use crate::error::{HandlerError, HandlerResult};
use crate::event::PipelineJobEvent;
use crate::pipeline::PipelineJobApi;
use crate::runner::ModeRunner;
use log::{error, info};
use scp_deployment_sync::{RunSummary, SyncMode};
use serde_json::Value;

pub const CREATE_ACTION: &str = "createSCPs";
pub const ATTACH_ACTION: &str = "attachSCPs";

/// Terminal state of one invocation, after reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Succeeded(RunSummary),
    Failed(String),
}

/// Process one job event.
///
/// Everything past job-id extraction is fallible and funnels into a single
/// failure report; success and failure reporting are mutually exclusive and
/// exactly one of them fires per invocation. Without a job id there is
/// nothing to report against, so that error surfaces to the runtime instead.
pub async fn process_job(
    event: &Value,
    pipeline: &dyn PipelineJobApi,
    runner: &dyn ModeRunner,
) -> HandlerResult<JobOutcome> {
    let job = PipelineJobEvent::parse(event)?;

    match run_job(&job, pipeline, runner).await {
        Ok(summary) => {
            info!("Job '{}' succeeded: {summary:?}", job.id());
            pipeline.report_success(job.id()).await?;
            Ok(JobOutcome::Succeeded(summary))
        }
        Err(err) => {
            error!("Job '{}' failed: {err}", job.id());
            pipeline.report_failure(job.id(), &err.to_string()).await?;
            Ok(JobOutcome::Failed(err.to_string()))
        }
    }
}

async fn run_job(
    job: &PipelineJobEvent,
    pipeline: &dyn PipelineJobApi,
    runner: &dyn ModeRunner,
) -> HandlerResult<RunSummary> {
    let action = pipeline.action_name(job.id()).await?;
    info!("Action name: {action}");

    let mode = mode_for_action(&action)?;
    let bucket = job.bucket_name()?;
    runner.run(mode, &bucket).await
}

fn mode_for_action(action: &str) -> HandlerResult<SyncMode> {
    match action {
        CREATE_ACTION => Ok(SyncMode::Create),
        ATTACH_ACTION => Ok(SyncMode::Attach),
        other => Err(HandlerError::UnknownAction(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingPipeline {
        action: String,
        successes: Mutex<Vec<String>>,
        failures: Mutex<Vec<(String, String)>>,
    }

    impl RecordingPipeline {
        fn new(action: &str) -> Self {
            Self {
                action: action.to_string(),
                successes: Mutex::new(Vec::new()),
                failures: Mutex::new(Vec::new()),
            }
        }

        fn successes(&self) -> Vec<String> {
            self.successes.lock().expect("poisoned mutex").clone()
        }

        fn failures(&self) -> Vec<(String, String)> {
            self.failures.lock().expect("poisoned mutex").clone()
        }
    }

    #[async_trait]
    impl PipelineJobApi for RecordingPipeline {
        async fn action_name(&self, _job_id: &str) -> HandlerResult<String> {
            Ok(self.action.clone())
        }

        async fn report_success(&self, job_id: &str) -> HandlerResult<()> {
            self.successes
                .lock()
                .expect("poisoned mutex")
                .push(job_id.to_string());
            Ok(())
        }

        async fn report_failure(&self, job_id: &str, message: &str) -> HandlerResult<()> {
            self.failures
                .lock()
                .expect("poisoned mutex")
                .push((job_id.to_string(), message.to_string()));
            Ok(())
        }
    }

    struct StubRunner {
        fail: bool,
        ran: Mutex<Vec<(SyncMode, String)>>,
    }

    impl StubRunner {
        fn new(fail: bool) -> Self {
            Self { fail, ran: Mutex::new(Vec::new()) }
        }

        fn ran(&self) -> Vec<(SyncMode, String)> {
            self.ran.lock().expect("poisoned mutex").clone()
        }
    }

    #[async_trait]
    impl ModeRunner for StubRunner {
        async fn run(&self, mode: SyncMode, bucket: &str) -> HandlerResult<RunSummary> {
            self.ran
                .lock()
                .expect("poisoned mutex")
                .push((mode, bucket.to_string()));
            if self.fail {
                return Err(scp_deployment_sync::SyncError::Manifest("boom".to_string()).into());
            }
            Ok(RunSummary::default())
        }
    }

    fn sample_event() -> Value {
        json!({
            "CodePipeline.job": {
                "id": "job-1",
                "data": {
                    "actionConfiguration": {
                        "configuration": {
                            "UserParameters": "{\"BucketName\":\"scp-bucket\"}"
                        }
                    }
                }
            }
        })
    }

    #[tokio::test]
    async fn test_success_reports_exactly_once() {
        let pipeline = RecordingPipeline::new(CREATE_ACTION);
        let runner = StubRunner::new(false);

        let outcome = process_job(&sample_event(), &pipeline, &runner)
            .await
            .expect("handler should not error");

        assert!(matches!(outcome, JobOutcome::Succeeded(_)));
        assert_eq!(pipeline.successes(), vec!["job-1".to_string()]);
        assert!(pipeline.failures().is_empty());
        assert_eq!(runner.ran(), vec![(SyncMode::Create, "scp-bucket".to_string())]);
    }

    #[tokio::test]
    async fn test_attach_action_selects_attach_mode() {
        let pipeline = RecordingPipeline::new(ATTACH_ACTION);
        let runner = StubRunner::new(false);

        process_job(&sample_event(), &pipeline, &runner)
            .await
            .expect("handler should not error");

        assert_eq!(runner.ran(), vec![(SyncMode::Attach, "scp-bucket".to_string())]);
    }

    #[tokio::test]
    async fn test_run_failure_reports_exactly_once() {
        let pipeline = RecordingPipeline::new(CREATE_ACTION);
        let runner = StubRunner::new(true);

        let outcome = process_job(&sample_event(), &pipeline, &runner)
            .await
            .expect("handler should not error");

        match outcome {
            JobOutcome::Failed(message) => assert!(message.contains("boom")),
            JobOutcome::Succeeded(_) => panic!("run should have failed"),
        }
        assert!(pipeline.successes().is_empty());
        assert_eq!(pipeline.failures().len(), 1);
        assert_eq!(pipeline.failures()[0].0, "job-1");
    }

    #[tokio::test]
    async fn test_unknown_action_fails_without_running() {
        let pipeline = RecordingPipeline::new("deploySCPs");
        let runner = StubRunner::new(false);

        let outcome = process_job(&sample_event(), &pipeline, &runner)
            .await
            .expect("handler should not error");

        match outcome {
            JobOutcome::Failed(message) => {
                assert!(message.contains("unsupported pipeline action"));
            }
            JobOutcome::Succeeded(_) => panic!("unknown action should fail"),
        }
        assert!(runner.ran().is_empty());
        assert_eq!(pipeline.failures().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_user_parameters_reports_failure() {
        let raw = json!({
            "CodePipeline.job": {
                "id": "job-1",
                "data": {
                    "actionConfiguration": {
                        "configuration": { "UserParameters": "not json" }
                    }
                }
            }
        });
        let pipeline = RecordingPipeline::new(CREATE_ACTION);
        let runner = StubRunner::new(false);

        let outcome = process_job(&raw, &pipeline, &runner)
            .await
            .expect("handler should not error");

        match outcome {
            JobOutcome::Failed(message) => assert!(message.contains("UserParameters")),
            JobOutcome::Succeeded(_) => panic!("malformed parameters should fail"),
        }
        assert!(pipeline.successes().is_empty());
        assert_eq!(pipeline.failures().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_job_id_is_a_handler_error() {
        let pipeline = RecordingPipeline::new(CREATE_ACTION);
        let runner = StubRunner::new(false);

        let err = process_job(&json!({}), &pipeline, &runner)
            .await
            .expect_err("no job id means nothing to report against");

        assert!(matches!(err, HandlerError::Event(_)));
        assert!(pipeline.successes().is_empty());
        assert!(pipeline.failures().is_empty());
    }
}
