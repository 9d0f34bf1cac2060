use crate::domain::{RequestPayload, ValidationErrors};
use indexnow_errors::AppError;

pub const KEY_REQUIRED: &str = "Please enter a verification key.";
pub const URL_LIST_REQUIRED: &str = "Please enter at least one link.";
pub const URL_LIST_MALFORMED: &str = "Some links are malformed.";

/// Splits the textarea contents into links: one per line, trimmed, blanks dropped.
pub fn split_url_list(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct FormValidator;

impl FormValidator {
    pub fn validate(verification_key: &str, url_list_text: &str) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if verification_key.is_empty() {
            errors.key_error = KEY_REQUIRED.to_string();
        }

        let urls = split_url_list(url_list_text);
        if urls.is_empty() {
            errors.url_list_error = URL_LIST_REQUIRED.to_string();
        } else if !urls.iter().all(|url| Self::is_absolute_url(url)) {
            errors.url_list_error = URL_LIST_MALFORMED.to_string();
        }

        errors
    }

    /// Scheme plus host, as far as the `url` parser is concerned.
    pub fn is_absolute_url(candidate: &str) -> bool {
        url::Url::parse(candidate)
            .map(|parsed| parsed.host_str().is_some_and(|host| !host.is_empty()))
            .unwrap_or(false)
    }

    /// Re-checks a payload that arrived over the wire before it is forwarded.
    pub fn check_payload(payload: &RequestPayload) -> Result<(), AppError> {
        if payload.key.is_empty() {
            return Err(AppError::Validation(KEY_REQUIRED.to_string()));
        }

        if payload.url_list.is_empty() {
            return Err(AppError::Validation(URL_LIST_REQUIRED.to_string()));
        }

        if let Some(bad) = payload
            .url_list
            .iter()
            .find(|url| url.trim() != url.as_str() || !Self::is_absolute_url(url))
        {
            tracing::warn!("Rejecting payload with malformed link: {}", bad);
            return Err(AppError::Validation(URL_LIST_MALFORMED.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_LINKS: &str = "https://site.com/p1\nhttps://site.com/p2";

    #[test]
    fn test_empty_key_is_reported() {
        for text in ["", "\n\n", "not-a-url", VALID_LINKS] {
            let errors = FormValidator::validate("", text);
            assert_eq!(errors.key_error, KEY_REQUIRED);
        }
    }

    #[test]
    fn test_missing_links_are_reported() {
        let errors = FormValidator::validate("ABC123", "");
        assert_eq!(errors.url_list_error, URL_LIST_REQUIRED);
        assert!(errors.key_error.is_empty());
    }

    #[test]
    fn test_blank_lines_only_count_as_missing() {
        for text in ["\n", "   \n\t\n", " "] {
            let errors = FormValidator::validate("ABC123", text);
            assert_eq!(errors.url_list_error, URL_LIST_REQUIRED, "input {:?}", text);
        }
    }

    #[test]
    fn test_malformed_link_is_reported() {
        let errors = FormValidator::validate("ABC123", "not-a-url");
        assert_eq!(errors.url_list_error, URL_LIST_MALFORMED);

        let errors = FormValidator::validate("ABC123", "https://site.com/ok\nsite.com/missing-scheme");
        assert_eq!(errors.url_list_error, URL_LIST_MALFORMED);
    }

    #[test]
    fn test_valid_links_with_padding_pass() {
        let text = "  https://site.com/p1  \n\n\thttp://site.com/p2?q=1\r\n\n";
        let errors = FormValidator::validate("ABC123", text);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_hostless_urls_are_rejected() {
        assert!(!FormValidator::is_absolute_url("mailto:someone@site.com"));
        assert!(!FormValidator::is_absolute_url("data:text/plain,hi"));
        assert!(FormValidator::is_absolute_url("https://site.com"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let inputs = [("", ""), ("ABC123", "not-a-url"), ("ABC123", VALID_LINKS)];
        for (key, text) in inputs {
            assert_eq!(
                FormValidator::validate(key, text),
                FormValidator::validate(key, text)
            );
        }
    }

    #[test]
    fn test_split_keeps_order_and_exact_text() {
        let urls = split_url_list(" https://a.example.com/y \n\nhttps://a.example.com/x");
        assert_eq!(urls, vec!["https://a.example.com/y", "https://a.example.com/x"]);
    }

    #[test]
    fn test_check_payload() {
        let good = RequestPayload::new(
            "site.com".to_string(),
            "ABC123".to_string(),
            vec!["https://site.com/p1".to_string()],
        );
        assert!(FormValidator::check_payload(&good).is_ok());

        let mut no_key = good.clone();
        no_key.key.clear();
        assert_eq!(
            FormValidator::check_payload(&no_key),
            Err(AppError::Validation(KEY_REQUIRED.to_string()))
        );

        let mut no_links = good.clone();
        no_links.url_list.clear();
        assert!(FormValidator::check_payload(&no_links).is_err());

        let mut bad_link = good;
        bad_link.url_list.push("not-a-url".to_string());
        assert_eq!(
            FormValidator::check_payload(&bad_link),
            Err(AppError::Validation(URL_LIST_MALFORMED.to_string()))
        );
    }
}
