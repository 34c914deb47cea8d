//! API utilities for talking to the model server
//!
//! Base URL comes from the build-time configuration in `client::config`.

use client::app_config;

/// Get the base URL for model server requests
///
/// # Returns
/// - API base URL like "http://localhost:11434/api"
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/generate", api_base());
/// ```
pub fn api_base() -> String {
    app_config().server.base_url.clone()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/version");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
