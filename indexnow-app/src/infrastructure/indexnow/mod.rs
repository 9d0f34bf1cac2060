mod client;
mod types;

pub use client::{IndexNowClient, DEFAULT_ENDPOINT};
pub use types::parse_reply;
