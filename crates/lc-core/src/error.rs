//! Errors shared by the `lc-*` crates.

use thiserror::Error;

use crate::AgentId;

/// Lookup failures on core identifiers.  Sub-crates wrap this in their own
/// error enums.
#[derive(Debug, Error)]
pub enum LcError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}
