mod payload_builder;
mod submission_controller;
mod validator;

pub use payload_builder::PayloadBuilder;
pub use submission_controller::{
    Effect, FormMsg, IndexNowApi, SubmissionController, SUBMIT_SUCCESS, UNKNOWN_REJECTION,
};
pub use validator::{split_url_list, FormValidator, KEY_REQUIRED, URL_LIST_MALFORMED, URL_LIST_REQUIRED};
