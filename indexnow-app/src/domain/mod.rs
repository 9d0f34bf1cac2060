mod form_state;
mod request_payload;
mod submission_result;
mod submit_response;
mod validation_errors;

pub use form_state::{Field, FormState, SubmissionPhase};
pub use request_payload::RequestPayload;
pub use submission_result::{ResultKind, SubmissionResult};
pub use submit_response::SubmitResponse;
pub use validation_errors::ValidationErrors;
