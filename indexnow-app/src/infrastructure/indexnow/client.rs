use super::types::parse_reply;
use crate::application::IndexNowApi;
use crate::domain::{RequestPayload, SubmitResponse};
use indexnow_errors::AppError;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};

pub const DEFAULT_ENDPOINT: &str = "https://mastweb.ru/classes/IndexNowProxy.php";

#[derive(Clone)]
pub struct IndexNowClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl IndexNowClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn notify(&self, payload: &RequestPayload) -> Result<SubmitResponse, AppError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .header(CACHE_CONTROL, "no-cache")
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        parse_reply(status, &body)
    }
}

impl IndexNowApi for IndexNowClient {
    async fn submit(&self, payload: &RequestPayload) -> Result<SubmitResponse, AppError> {
        self.notify(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Option<(HeaderMap, serde_json::Value)>>>;

    async fn spawn_proxy(status: StatusCode, reply: serde_json::Value) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(None));
        let sink = captured.clone();

        let app = Router::new().route(
            "/",
            post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let sink = sink.clone();
                let reply = reply.clone();
                async move {
                    *sink.lock().unwrap() = Some((headers, body));
                    (status, Json(reply))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/", addr), captured)
    }

    fn sample_payload() -> RequestPayload {
        RequestPayload::new(
            "site.com".to_string(),
            "ABC123".to_string(),
            vec![
                "https://site.com/p1".to_string(),
                "https://site.com/p2".to_string(),
            ],
        )
    }

    #[tokio::test]
    async fn test_posts_json_with_headers() {
        let (endpoint, captured) =
            spawn_proxy(StatusCode::OK, serde_json::json!({ "success": true })).await;
        let client = IndexNowClient::new(endpoint);

        let reply = client.submit(&sample_payload()).await.unwrap();
        assert!(reply.success);

        let (headers, body) = captured.lock().unwrap().take().unwrap();
        assert_eq!(
            headers.get("content-type").unwrap(),
            "application/json; charset=utf-8"
        );
        assert_eq!(headers.get("cache-control").unwrap(), "no-cache");
        assert_eq!(
            body,
            serde_json::json!({
                "host": "site.com",
                "key": "ABC123",
                "urlList": ["https://site.com/p1", "https://site.com/p2"],
            })
        );
    }

    #[tokio::test]
    async fn test_rejection_is_not_an_error() {
        let (endpoint, _) = spawn_proxy(
            StatusCode::OK,
            serde_json::json!({ "success": false, "message": "invalid key" }),
        )
        .await;
        let client = IndexNowClient::new(endpoint);

        let reply = client.submit(&sample_payload()).await.unwrap();
        assert_eq!(reply, SubmitResponse::rejected("invalid key"));
    }

    #[tokio::test]
    async fn test_server_error_status_overrides_success_body() {
        let (endpoint, captured) = spawn_proxy(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({ "success": true }),
        )
        .await;
        let client = IndexNowClient::new(endpoint);

        let err = client.submit(&sample_payload()).await.unwrap_err();

        assert!(captured.lock().unwrap().is_some());
        assert_eq!(
            err,
            AppError::Transport("HTTP error: 500 Internal Server Error".to_string())
        );
    }

    #[tokio::test]
    async fn test_forbidden_rejection_keeps_server_message() {
        let (endpoint, _) = spawn_proxy(
            StatusCode::FORBIDDEN,
            serde_json::json!({ "success": false, "message": "key not found on host" }),
        )
        .await;
        let client = IndexNowClient::new(endpoint);

        let reply = client.submit(&sample_payload()).await.unwrap();
        assert_eq!(reply, SubmitResponse::rejected("key not found on host"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = IndexNowClient::new(format!("http://{}/", addr));
        let err = client.submit(&sample_payload()).await.unwrap_err();

        assert!(matches!(err, AppError::Transport(_)));
    }
}
