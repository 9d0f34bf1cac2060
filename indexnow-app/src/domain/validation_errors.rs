use super::Field;
use serde::{Deserialize, Serialize};

/// Per-field error text. An empty string means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub key_error: String,
    pub url_list_error: String,
}

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.key_error.is_empty() && self.url_list_error.is_empty()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::VerificationKey => &self.key_error,
            Field::UrlList => &self.url_list_error,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::VerificationKey => self.key_error.clear(),
            Field::UrlList => self.url_list_error.clear(),
        }
    }
}
