//! gloo-net implementation of the authorization service call.

use crate::utils;
use gloo_net::http::Request;
use shared::protocol::ACCESS_URL_ENDPOINT;
use shared::{
    parse_access_url_response, status_error, AccessUrlService, ApiClientConfig, ApiError,
    ParameterPayload,
};

/// Requests access URLs from the portal's authorization endpoint.
pub struct HttpAccessUrlService {
    config: ApiClientConfig,
}

impl HttpAccessUrlService {
    pub fn new(config: ApiClientConfig) -> Self {
        Self { config }
    }

    /// Client for the server the page was loaded from.
    pub fn from_location() -> Self {
        Self::new(ApiClientConfig::new(utils::get_base_url()))
    }
}

impl AccessUrlService for HttpAccessUrlService {
    async fn request_access_url(&self, params: &ParameterPayload) -> Result<String, ApiError> {
        let response = Request::post(&self.config.url(ACCESS_URL_ENDPOINT))
            .json(params)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if let Some(e) = status_error(response.status(), &body) {
            return Err(e);
        }
        parse_access_url_response(&body)
    }
}
