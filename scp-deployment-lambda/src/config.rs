//! Environment configuration for the handler.

use crate::error::{HandlerError, HandlerResult};
use std::env;

pub const ORG_ROLE_VAR: &str = "ORG_ROLE";
pub const DEBUG_MODE_VAR: &str = "DEBUG_MODE";

/// Settings read from the function's environment at startup.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Role assumed in the management account for all Organizations calls.
    pub org_role: String,
    /// Verbose logging unless `DEBUG_MODE` is set to something other than
    /// `"true"`.
    pub debug: bool,
}

impl HandlerConfig {
    pub fn from_env() -> HandlerResult<Self> {
        let org_role = env::var(ORG_ROLE_VAR)
            .map_err(|_| HandlerError::Config(format!("{ORG_ROLE_VAR} must be set")))?;
        let debug = env::var(DEBUG_MODE_VAR).map_or(true, |value| value == "true");
        Ok(Self { org_role, debug })
    }
}

/// Initialize the log facade. `RUST_LOG` still overrides the default level.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
