//! Error types for workout construction and metric computation.

use thiserror::Error;

use crate::models::WorkoutType;

/// Errors raised while building a workout from sensor data or deriving its metrics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("{workout_type} expects {expected} values, got {actual}")]
    Arity {
        workout_type: WorkoutType,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown workout type code: {0:?}")]
    UnknownTypeCode(String),

    #[error("Division by zero: {quantity} is zero")]
    DivisionByZero { quantity: &'static str },

    #[error("Result out of range: {quantity} is not finite")]
    NonFinite { quantity: &'static str },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Result alias for calculator operations
pub type Result<T> = std::result::Result<T, WorkoutError>;
