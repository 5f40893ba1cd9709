//! IAM policy simulator wrapper.

use crate::error::{SimulationError, SimulationResult};
use async_trait::async_trait;
use aws_sdk_iam::types::PolicyEvaluationDecisionType;
use aws_sdk_iam::Client as IamClient;
use log::debug;

/// Raw result of simulating a single action for a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOutcome {
    pub decision: EvalDecision,
    pub allowed_by_organizations: bool,
}

/// Coarse evaluation decision as reported by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalDecision {
    Allowed,
    ExplicitDeny,
    ImplicitDeny,
}

/// Seam over SimulatePrincipalPolicy; tests substitute canned outcomes.
#[async_trait]
pub trait PolicySimulator: Send + Sync {
    async fn simulate(
        &self,
        policy_source_arn: &str,
        action_name: &str,
    ) -> SimulationResult<SimulationOutcome>;
}

pub struct AwsPolicySimulator {
    client: IamClient,
}

impl AwsPolicySimulator {
    pub fn new(client: IamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PolicySimulator for AwsPolicySimulator {
    async fn simulate(
        &self,
        policy_source_arn: &str,
        action_name: &str,
    ) -> SimulationResult<SimulationOutcome> {
        debug!("Simulating '{action_name}' for '{policy_source_arn}'");

        let response = self
            .client
            .simulate_principal_policy()
            .policy_source_arn(policy_source_arn)
            .action_names(action_name)
            .send()
            .await
            .map_err(|e| {
                SimulationError::Simulation(format!(
                    "'{action_name}' for '{policy_source_arn}': {e}"
                ))
            })?;

        let result = response
            .evaluation_results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(SimulationError::EmptyEvaluation)?;

        let decision = match result.eval_decision {
            PolicyEvaluationDecisionType::Allowed => EvalDecision::Allowed,
            PolicyEvaluationDecisionType::ExplicitDeny => EvalDecision::ExplicitDeny,
            PolicyEvaluationDecisionType::ImplicitDeny => EvalDecision::ImplicitDeny,
            other => {
                return Err(SimulationError::Simulation(format!(
                    "unrecognized evaluation decision '{}'",
                    other.as_str()
                )))
            }
        };

        // Absent when no organizations boundary applies to the principal.
        let allowed_by_organizations = result
            .organizations_decision_detail
            .map_or(false, |detail| detail.allowed_by_organizations);

        Ok(SimulationOutcome { decision, allowed_by_organizations })
    }
}
