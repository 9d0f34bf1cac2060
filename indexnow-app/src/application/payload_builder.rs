use crate::domain::RequestPayload;

pub struct PayloadBuilder;

impl PayloadBuilder {
    /// `urls` is expected to be the validated, non-empty output of `split_url_list`.
    pub fn build(verification_key: &str, urls: Vec<String>) -> RequestPayload {
        let host = urls
            .first()
            .map(|first| Self::host_of(first))
            .unwrap_or_default();

        RequestPayload::new(host, verification_key.to_string(), urls)
    }

    fn host_of(url: &str) -> String {
        url::Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}
