use serde_json::Value;
use thiserror::Error;

/// Ошибки транспорта к серверу моделей
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl ClientError {
    /// Ошибка для ответа с не-2xx статусом.
    ///
    /// Ollama отвечает телом `{"error": "..."}`; если это так, берём текст оттуда.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        ClientError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_connection_refused(&self) -> bool {
        matches!(self, ClientError::ConnectionRefused(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else if is_connect_failure(&err) {
            ClientError::ConnectionRefused(err.to_string())
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect_failure(err: &reqwest::Error) -> bool {
    err.is_connect()
}

// fetch() не различает причины отказа: любой сбой до получения статуса
// (сервер не запущен, CORS) выглядит как ошибка запроса.
#[cfg(target_arch = "wasm32")]
fn is_connect_failure(err: &reqwest::Error) -> bool {
    err.is_request() && err.status().is_none()
}
