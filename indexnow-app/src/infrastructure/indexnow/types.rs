use crate::domain::SubmitResponse;
use indexnow_errors::AppError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Only `success` is required; anything else the proxy sends is ignored.
#[derive(Debug, Deserialize)]
pub struct ProxyReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

/// Interprets a proxy reply.
///
/// A rejection body (`success: false`) wins over the status code so its
/// message reaches the user. A non-2xx status is never reported as success.
/// Anything else is a transport failure.
pub fn parse_reply(status: StatusCode, body: &str) -> Result<SubmitResponse, AppError> {
    match serde_json::from_str::<ProxyReply>(body) {
        Ok(reply) if reply.success && !status.is_success() => {
            tracing::error!("IndexNow proxy claimed success with status {}: {}", status, body);
            Err(AppError::Transport(format!("HTTP error: {}", status)))
        }
        Ok(reply) => {
            let message = reply.message.and_then(message_text).or_else(|| {
                let raw = body.trim();
                (!reply.success && !raw.is_empty()).then(|| raw.to_string())
            });

            Ok(SubmitResponse {
                success: reply.success,
                message,
            })
        }
        Err(_) if !status.is_success() => {
            tracing::error!("IndexNow proxy error: {} - {}", status, body);
            Err(AppError::Transport(format!("HTTP error: {}", status)))
        }
        Err(e) => {
            tracing::error!("Unexpected IndexNow proxy reply: {}", body);
            Err(AppError::Transport(format!("unexpected response: {}", e)))
        }
    }
}

fn message_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flag() {
        let reply = parse_reply(StatusCode::OK, r#"{"success": true}"#).unwrap();
        assert_eq!(reply, SubmitResponse::accepted());
    }

    #[test]
    fn test_rejection_carries_message() {
        let reply =
            parse_reply(StatusCode::OK, r#"{"success": false, "message": "invalid key"}"#).unwrap();
        assert_eq!(reply, SubmitResponse::rejected("invalid key"));
    }

    #[test]
    fn test_rejection_body_wins_over_status() {
        let reply = parse_reply(
            StatusCode::FORBIDDEN,
            r#"{"success": false, "message": "key not found on host"}"#,
        )
        .unwrap();
        assert_eq!(reply.message.as_deref(), Some("key not found on host"));
    }

    #[test]
    fn test_success_body_with_error_status_is_not_success() {
        for status in [StatusCode::INTERNAL_SERVER_ERROR, StatusCode::NOT_FOUND] {
            let err = parse_reply(status, r#"{"success": true}"#).unwrap_err();
            assert_eq!(err, AppError::Transport(format!("HTTP error: {}", status)));
        }
    }

    #[test]
    fn test_rejection_without_message_uses_raw_body() {
        let body = r#"{"success": false, "code": 422}"#;
        let reply = parse_reply(StatusCode::OK, body).unwrap();
        assert_eq!(reply.message.as_deref(), Some(body));
    }

    #[test]
    fn test_structured_message_is_stringified() {
        let reply =
            parse_reply(StatusCode::OK, r#"{"success": false, "message": {"code": 7}}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some(r#"{"code":7}"#));
    }

    #[test]
    fn test_unexpected_shapes_are_transport_errors() {
        for body in ["<html>oops</html>", "[]", r#"{"ok": true}"#, r#"{"success": "yes"}"#, ""] {
            let err = parse_reply(StatusCode::OK, body).unwrap_err();
            assert!(matches!(err, AppError::Transport(_)), "body {:?}", body);
        }
    }

    #[test]
    fn test_bad_status_without_body_mentions_status() {
        let err = parse_reply(StatusCode::BAD_GATEWAY, "").unwrap_err();
        assert_eq!(err, AppError::Transport("HTTP error: 502 Bad Gateway".to_string()));
    }
}
