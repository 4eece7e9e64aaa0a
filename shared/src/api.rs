//! API client types
//!
//! The access URL call is made through [`crate::AccessUrlService`], which the
//! WASM frontend implements with gloo-net. The types here are the contract
//! both sides agree on.

use serde::{Deserialize, Serialize};

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ApiError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),
    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),
    /// Authentication required or failed
    #[error("Auth error: {0}")]
    Auth(String),
}

/// Response body of the access URL endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessUrlResponse {
    pub url: String,
}

/// Map a non-success response status to an error. `None` for 2xx.
pub fn status_error(status: u16, body: &str) -> Option<ApiError> {
    match status {
        200..=299 => None,
        401 | 403 => Some(ApiError::Auth(format!(
            "access URL request rejected with {}",
            status
        ))),
        _ => Some(ApiError::Server {
            status,
            message: body.to_string(),
        }),
    }
}

/// Decode the access URL endpoint's response body.
pub fn parse_access_url_response(body: &str) -> Result<String, ApiError> {
    serde_json::from_str::<AccessUrlResponse>(body)
        .map(|response| response.url)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Configuration for API clients. Requests are authenticated by the
/// browser's session cookie, so only the base URL is configured.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3000")
    pub base_url: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ACCESS_URL_ENDPOINT;

    #[test]
    fn test_config_url_joins_endpoint() {
        let config = ApiClientConfig::new("https://cloud.example/");
        assert_eq!(
            config.url(ACCESS_URL_ENDPOINT),
            "https://cloud.example/api/auth/action-url"
        );
        assert_eq!(
            ApiClientConfig::new("http://localhost:3000").url(ACCESS_URL_ENDPOINT),
            "http://localhost:3000/api/auth/action-url"
        );
    }

    #[test]
    fn test_status_error_success() {
        assert_eq!(status_error(200, ""), None);
        assert_eq!(status_error(204, ""), None);
    }

    #[test]
    fn test_status_error_auth() {
        assert_eq!(
            status_error(401, "login required"),
            Some(ApiError::Auth(
                "access URL request rejected with 401".to_string()
            ))
        );
        assert!(matches!(
            status_error(403, ""),
            Some(ApiError::Auth(_))
        ));
    }

    #[test]
    fn test_status_error_server() {
        assert_eq!(
            status_error(502, "bad gateway"),
            Some(ApiError::Server {
                status: 502,
                message: "bad gateway".to_string(),
            })
        );
        assert!(matches!(
            status_error(404, ""),
            Some(ApiError::Server { status: 404, .. })
        ));
        assert!(matches!(
            status_error(302, ""),
            Some(ApiError::Server { status: 302, .. })
        ));
    }

    #[test]
    fn test_parse_access_url_response() {
        assert_eq!(
            parse_access_url_response(r#"{"url": "https://access.example/apply"}"#),
            Ok("https://access.example/apply".to_string())
        );
        assert!(matches!(
            parse_access_url_response("<html>oops</html>"),
            Err(ApiError::Parse(_))
        ));
        assert!(matches!(
            parse_access_url_response(r#"{"link": "https://access.example"}"#),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Server {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (502): bad gateway");
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
    }

}
