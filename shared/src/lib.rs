//! Types and logic shared by the access-request frontend and its tests.
//!
//! Nothing in here touches the browser, so the whole crate is testable natively.

// Route identifier -> permission matrix key
pub mod route_key;
pub use route_key::{normalize_route_key, normalize_with, ROUTE_KEY_MARKERS};

// Permission snapshot and the access URL resolver
pub mod access;
pub use access::{
    lookup_params, publish_while_alive, resolve, AccessUrlService, AccessUrlState, NoAction, ParameterPayload,
    PermissionSnapshot, Resolution,
};

// Endpoint paths shared with the authorization service
pub mod protocol;

// API client types
pub mod api;
pub use api::{
    parse_access_url_response, status_error, AccessUrlResponse, ApiClientConfig, ApiError,
};
