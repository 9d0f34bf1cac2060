use crate::infrastructure::indexnow::{IndexNowClient, DEFAULT_ENDPOINT};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub indexnow: Arc<IndexNowClient>,
}

impl AppContext {
    pub fn new(endpoint: String) -> Self {
        Self {
            indexnow: Arc::new(IndexNowClient::new(endpoint)),
        }
    }

    pub fn from_env() -> Self {
        let endpoint = std::env::var("INDEXNOW_ENDPOINT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        tracing::info!("Forwarding submissions to {}", endpoint);
        Self::new(endpoint)
    }
}
