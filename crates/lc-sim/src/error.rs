use lc_behavior::BehaviorError;
use lc_core::{AgentId, LcError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {0} registered twice")]
    DuplicateAgent(AgentId),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Core(#[from] LcError),
}

pub type SimResult<T> = Result<T, SimError>;
