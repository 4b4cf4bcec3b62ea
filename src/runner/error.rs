//! Error types for exercise selection

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    /// Identifier did not match any registered exercise
    #[error("Unknown exercise '{0}' (expected Q1 to Q10)")]
    UnknownExercise(String),
}
