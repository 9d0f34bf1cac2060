use super::payload_builder::PayloadBuilder;
use super::validator::{split_url_list, FormValidator};
use crate::domain::{Field, FormState, RequestPayload, SubmissionResult, SubmitResponse, ValidationErrors};
use indexnow_errors::AppError;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const SUBMIT_SUCCESS: &str = "Links submitted successfully.";
pub const UNKNOWN_REJECTION: &str = "no reason given";

/// Anything that can deliver a payload to the IndexNow endpoint.
pub trait IndexNowApi {
    fn submit(
        &self,
        payload: &RequestPayload,
    ) -> impl Future<Output = Result<SubmitResponse, AppError>> + Send;
}

impl<T> IndexNowApi for Arc<T>
where
    T: IndexNowApi + Send + Sync,
{
    fn submit(
        &self,
        payload: &RequestPayload,
    ) -> impl Future<Output = Result<SubmitResponse, AppError>> + Send {
        (**self).submit(payload)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    KeyChanged(String),
    UrlListChanged(String),
    Focused(Field),
    Submit,
    Completed(Result<SubmitResponse, AppError>),
}

/// Work the caller has to perform after an update.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Send(RequestPayload),
}

impl FormState {
    pub fn update(&mut self, msg: FormMsg) -> Effect {
        match msg {
            FormMsg::KeyChanged(value) => {
                self.verification_key = value;
                Effect::None
            }
            FormMsg::UrlListChanged(value) => {
                self.url_list_text = value;
                Effect::None
            }
            FormMsg::Focused(field) => {
                self.errors.clear(field);
                Effect::None
            }
            FormMsg::Submit => self.begin_submit(),
            FormMsg::Completed(outcome) => {
                self.finish_submit(outcome);
                Effect::None
            }
        }
    }

    fn begin_submit(&mut self) -> Effect {
        if self.is_submitting {
            tracing::debug!("Ignoring submit while a request is in flight");
            return Effect::None;
        }

        self.result = None;
        self.errors = FormValidator::validate(&self.verification_key, &self.url_list_text);
        if !self.errors.is_valid() {
            return Effect::None;
        }

        let urls = split_url_list(&self.url_list_text);
        let payload = PayloadBuilder::build(&self.verification_key, urls);
        self.is_submitting = true;
        Effect::Send(payload)
    }

    fn finish_submit(&mut self, outcome: Result<SubmitResponse, AppError>) {
        if !self.is_submitting {
            tracing::debug!("Dropping completion with no request in flight");
            return;
        }
        self.is_submitting = false;

        match outcome {
            Ok(response) if response.success => {
                self.verification_key.clear();
                self.url_list_text.clear();
                self.errors = ValidationErrors::default();
                self.result = Some(SubmissionResult::success(SUBMIT_SUCCESS));
            }
            Ok(response) => {
                let reason = response
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| UNKNOWN_REJECTION.to_string());
                self.result = Some(SubmissionResult::error(
                    AppError::Application(reason).banner_text(),
                ));
            }
            Err(err) => {
                self.errors = ValidationErrors::default();
                self.result = Some(SubmissionResult::error(err.banner_text()));
            }
        }
    }
}

/// Drives one form instance against a real client.
///
/// The state lock is never held across the network call, so a second
/// `submit` issued while the first is awaiting sees `is_submitting` and
/// returns without touching the client.
pub struct SubmissionController<C> {
    client: C,
    state: Mutex<FormState>,
}

impl<C: IndexNowApi> SubmissionController<C> {
    pub fn new(client: C) -> Self {
        Self::with_state(client, FormState::default())
    }

    pub fn with_state(client: C, state: FormState) -> Self {
        Self {
            client,
            state: Mutex::new(state),
        }
    }

    pub fn dispatch(&self, msg: FormMsg) -> Effect {
        self.lock().update(msg)
    }

    pub fn snapshot(&self) -> FormState {
        self.lock().clone()
    }

    pub async fn submit(&self) -> FormState {
        if let Effect::Send(payload) = self.dispatch(FormMsg::Submit) {
            tracing::info!(
                "Submitting {} link(s) for host {}",
                payload.url_list.len(),
                payload.host
            );

            let outcome = self.client.submit(&payload).await;
            match &outcome {
                Ok(response) if response.success => tracing::info!("Submission accepted"),
                Ok(response) => tracing::warn!("Submission rejected: {:?}", response.message),
                Err(e) => tracing::error!("Submission failed: {}", e),
            }

            let _ = self.dispatch(FormMsg::Completed(outcome));
        }

        self.snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
