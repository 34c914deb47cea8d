//! API Test - Model (raw request)

use crate::shared::api_utils::api_url;
use contracts::shared::ollama::GenerateRequest;
use gloo_net::http::Request;
use serde_json::Value;

pub const TEST_MODEL: &str = "llama2:latest";
pub const TEST_PROMPT: &str = "Hello, who are you?";

/// Отправить тестовый запрос и вернуть тело ответа в виде форматированного JSON
pub async fn test_direct_api() -> Result<String, String> {
    let url = api_url("/generate");
    log::info!("Testing direct API call to {url}");

    let body = GenerateRequest::new(TEST_MODEL, TEST_PROMPT);
    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!(
            "Request failed with status code {}",
            response.status()
        ));
    }

    let data: Value = response.json().await.map_err(|e| e.to_string())?;
    log::debug!("Raw API response: {data}");
    serde_json::to_string_pretty(&data).map_err(|e| e.to_string())
}
