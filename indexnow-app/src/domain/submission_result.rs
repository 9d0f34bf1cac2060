use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultKind {
    Success,
    Error,
}

/// Banner shown once an attempt finishes. Hidden again when the next attempt starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub kind: ResultKind,
    pub text: String,
}

impl SubmissionResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Error,
            text: text.into(),
        }
    }
}
