use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min:   f32,
        max:   f32,
    },

    #[error("{field} must be positive, got {value}")]
    NonPositive {
        field: &'static str,
        value: f32,
    },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
