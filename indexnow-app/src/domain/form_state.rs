use super::{ResultKind, SubmissionResult, ValidationErrors};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    VerificationKey,
    UrlList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Completed(ResultKind),
}

/// Everything the submission form holds between events.
///
/// `is_submitting` is only true while exactly one request is outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub verification_key: String,
    pub url_list_text: String,
    pub is_submitting: bool,
    pub errors: ValidationErrors,
    pub result: Option<SubmissionResult>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verification_key(mut self, key: impl Into<String>) -> Self {
        self.verification_key = key.into();
        self
    }

    pub fn with_url_list_text(mut self, text: impl Into<String>) -> Self {
        self.url_list_text = text.into();
        self
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.is_submitting {
            return SubmissionPhase::Submitting;
        }
        match &self.result {
            Some(result) => SubmissionPhase::Completed(result.kind),
            None => SubmissionPhase::Idle,
        }
    }

    /// `Completed` still accepts a new submit; only an in-flight request blocks it.
    pub fn accepts_submissions(&self) -> bool {
        !self.is_submitting
    }
}
