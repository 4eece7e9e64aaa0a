use gloo::utils::window;

/// Get the base HTTP URL (e.g., "http://localhost:3000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let location = window().location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// Label for the request-access button.
pub fn request_button_label(loading: bool) -> &'static str {
    if loading {
        "Loading..."
    } else {
        "Request access"
    }
}
