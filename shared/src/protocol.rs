/// Authorization service endpoint returning the request-access URL for a
/// parameter payload. POST, JSON body is the payload verbatim.
pub const ACCESS_URL_ENDPOINT: &str = "/api/auth/action-url";

/// Browsing context the request-access URL is opened in.
pub const ACCESS_URL_TARGET: &str = "_blank";
