//! Decision normalization and outcome assertions.

use crate::error::{SimulationError, SimulationResult};
use crate::simulator::{EvalDecision, PolicySimulator};
use log::info;
use std::fmt;
use std::str::FromStr;

/// Normalized decision: both deny variants collapse to `Denied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied,
}

impl Decision {
    pub const fn from_eval(decision: EvalDecision) -> Self {
        match decision {
            EvalDecision::Allowed => Self::Allowed,
            EvalDecision::ExplicitDeny | EvalDecision::ImplicitDeny => Self::Denied,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allowed" => Ok(Self::Allowed),
            "denied" => Ok(Self::Denied),
            other => Err(SimulationError::InvalidExpectedOutcome(other.to_string())),
        }
    }
}

/// One scenario: a principal, an action, and the outcome we expect.
#[derive(Debug, Clone)]
pub struct SimulationCheck {
    pub policy_source_arn: String,
    pub action_name: String,
    pub expected: Decision,
}

/// Run the scenario and assert the outcome.
///
/// The normalized decision must match the expectation, and the organizations
/// flag must agree with the decision: allowed implies the organization
/// permits the action, denied implies it does not.
pub async fn verify(
    simulator: &dyn PolicySimulator,
    check: &SimulationCheck,
) -> SimulationResult<()> {
    let outcome = simulator
        .simulate(&check.policy_source_arn, &check.action_name)
        .await?;
    let actual = Decision::from_eval(outcome.decision);

    info!(
        "Eval decision: {actual}; organizations allowed: {}; expected: {}",
        outcome.allowed_by_organizations, check.expected
    );

    if actual != check.expected {
        return Err(SimulationError::UnexpectedOutcome { expected: check.expected, actual });
    }

    let organization_should_allow = actual == Decision::Allowed;
    if outcome.allowed_by_organizations != organization_should_allow {
        return Err(SimulationError::OrganizationsBoundary {
            decision: actual,
            allowed_by_organizations: outcome.allowed_by_organizations,
        });
    }

    Ok(())
}
