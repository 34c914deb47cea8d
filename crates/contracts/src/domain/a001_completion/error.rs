use serde::{Deserialize, Serialize};
use std::fmt;

/// Классификация ошибки для показа пользователю
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionErrorKind {
    /// Сервер не запущен или недоступен
    ConnectionRefused,
    /// HTTP 404, как правило неизвестная модель
    NotFound,
    /// Запрос прошёл, но текста в ответе нет
    EmptyResponse,
    /// Всё остальное
    Generic,
}

impl CompletionErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionErrorKind::ConnectionRefused => "connection_refused",
            CompletionErrorKind::NotFound => "not_found",
            CompletionErrorKind::EmptyResponse => "empty_response",
            CompletionErrorKind::Generic => "generic",
        }
    }
}

impl fmt::Display for CompletionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ошибка цикла запроса, уже классифицированная view-model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CompletionError {
    pub kind: CompletionErrorKind,
    /// Исходное сообщение транспорта
    pub message: String,
    /// Модель, для которой выполнялся запрос
    pub model: String,
    /// Порт сервера из базового URL, если его удалось определить
    #[serde(default)]
    pub port: Option<u16>,
}

impl CompletionError {
    pub fn new(kind: CompletionErrorKind, message: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            model: model.into(),
            port: None,
        }
    }

    pub fn empty_response(model: impl Into<String>) -> Self {
        Self::new(
            CompletionErrorKind::EmptyResponse,
            "Received empty response from Ollama API",
            model,
        )
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    /// Текст для блока ошибки на странице
    pub fn display_message(&self) -> String {
        match self.kind {
            CompletionErrorKind::ConnectionRefused => match self.port {
                Some(port) => format!(
                    "Cannot connect to Ollama server. Please make sure Ollama is running on port {port}."
                ),
                None => "Cannot connect to Ollama server. Please make sure Ollama is running."
                    .to_string(),
            },
            CompletionErrorKind::NotFound => format!(
                "Model \"{model}\" not found. Please check if it's properly installed with \"ollama pull {model}\".",
                model = self.model
            ),
            CompletionErrorKind::EmptyResponse => {
                "Received empty response from Ollama API".to_string()
            }
            CompletionErrorKind::Generic => {
                if self.message.trim().is_empty() {
                    "An error occurred while fetching completion.".to_string()
                } else {
                    self.message.clone()
                }
            }
        }
    }
}

/// Порт из базового URL вида `http://localhost:11434/api`.
///
/// Без явного порта возвращает порт по умолчанию для схемы.
pub fn port_from_base_url(base_url: &str) -> Option<u16> {
    let (scheme, rest) = match base_url.split_once("://") {
        Some((scheme, rest)) => (scheme, rest),
        None => ("http", base_url),
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    // user:pass@host:port
    let host_port = authority.rsplit('@').next().unwrap_or(authority);

    // [::1]:11434
    let port_part = if let Some(stripped) = host_port.strip_prefix('[') {
        stripped.split_once(']').map(|(_, after)| after)
    } else {
        Some(host_port)
    };

    match port_part.and_then(|p| p.rsplit_once(':')) {
        Some((_, port)) => port.parse().ok(),
        None => match scheme {
            "http" => Some(80),
            "https" => Some(443),
            _ => None,
        },
    }
}
