use serde::{Deserialize, Serialize};
use std::str::FromStr;

const VALIDATION_PREFIX: &str = "Invalid input: ";
const TRANSPORT_PREFIX: &str = "Submission failed: ";
const APPLICATION_PREFIX: &str = "Server rejected the submission: ";
const INTERNAL_PREFIX: &str = "Internal error: ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Network failure, timeout, bad status or a body we could not interpret.
    #[error("Submission failed: {0}")]
    Transport(String),

    /// The endpoint answered with `success: false`.
    #[error("Server rejected the submission: {0}")]
    Application(String),

    /// Server-side wiring problem, e.g. missing shared state.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix(VALIDATION_PREFIX) {
            Ok(AppError::Validation(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix(TRANSPORT_PREFIX) {
            Ok(AppError::Transport(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix(APPLICATION_PREFIX) {
            Ok(AppError::Application(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix(INTERNAL_PREFIX) {
            Ok(AppError::Internal(rest.to_string()))
        } else {
            Ok(AppError::Transport(s.to_string()))
        }
    }
}

impl AppError {
    /// Text shown in the result banner. Always carries the underlying description.
    pub fn banner_text(&self) -> String {
        self.to_string()
    }
}
