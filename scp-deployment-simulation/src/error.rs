//! Harness error type.

use crate::check::Decision;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("unable to simulate the policy: {0}")]
    Simulation(String),
    #[error("simulation returned no evaluation results")]
    EmptyEvaluation,
    #[error("expected outcome must be 'allowed' or 'denied', got '{0}'")]
    InvalidExpectedOutcome(String),
    #[error("expected '{expected}' but the simulation decided '{actual}'")]
    UnexpectedOutcome { expected: Decision, actual: Decision },
    #[error("decision '{decision}' is inconsistent with AllowedByOrganizations={allowed_by_organizations}")]
    OrganizationsBoundary {
        decision: Decision,
        allowed_by_organizations: bool,
    },
}

pub type SimulationResult<T> = Result<T, SimulationError>;
