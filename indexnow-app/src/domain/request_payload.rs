use serde::{Deserialize, Serialize};

/// Body POSTed to the IndexNow proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub host: String,
    pub key: String,
    #[serde(rename = "urlList")]
    pub url_list: Vec<String>,
}

impl RequestPayload {
    pub fn new(host: String, key: String, url_list: Vec<String>) -> Self {
        Self {
            host,
            key,
            url_list,
        }
    }
}
