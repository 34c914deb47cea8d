//! Состояние страницы генерации и его переходы.
//!
//! Переходы чистые: никакого I/O, только изменение полей. Асинхронная часть
//! (HTTP-запросы) живёт в `client::view_model`, который вызывает эти методы
//! до и после `await`.

use super::error::{CompletionError, CompletionErrorKind};
use crate::shared::ollama::ServerStatus;
use serde::{Deserialize, Serialize};

/// Состояние запроса генерации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

/// Состояние соединения с сервером моделей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectivityState {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

impl ConnectivityState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectivityState::Connected)
    }

    /// Текст индикатора статуса
    pub fn banner(&self) -> &'static str {
        match self {
            ConnectivityState::Checking => "Checking connection to Ollama...",
            ConnectivityState::Connected => "Connected to Ollama server",
            ConnectivityState::Disconnected => {
                "Ollama server is not running. Please start Ollama and refresh."
            }
        }
    }

    /// Код для стилей индикатора
    pub fn code(&self) -> &'static str {
        match self {
            ConnectivityState::Checking => "checking",
            ConnectivityState::Connected => "connected",
            ConnectivityState::Disconnected => "disconnected",
        }
    }
}

/// Чем закончился вызов `submit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Completed,
    Failed(CompletionErrorKind),
    /// Запрос уже выполняется, повторный вызов проигнорирован
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionState {
    /// Модель из конфигурации, только для чтения
    pub model: String,
    pub prompt: String,
    pub completion: String,
    pub request: RequestState,
    pub error: Option<CompletionError>,
    pub connectivity: ConnectivityState,
    pub server_version: Option<String>,
}

impl CompletionState {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            completion: String::new(),
            request: RequestState::Idle,
            error: None,
            connectivity: ConnectivityState::Checking,
            server_version: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestState::InFlight
    }

    /// Кнопка генерации активна только без активного запроса и при живом сервере
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.connectivity.is_connected()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Начать цикл запроса.
    ///
    /// Возвращает промпт для отправки или `None`, если запрос уже в полёте.
    pub fn begin_request(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }
        self.completion.clear();
        self.error = None;
        self.request = RequestState::InFlight;
        Some(self.prompt.clone())
    }

    /// Завершить цикл запроса: ровно одно из `completion`/`error` становится непустым.
    pub fn finish_request(&mut self, result: Result<String, CompletionError>) -> SubmitOutcome {
        self.request = RequestState::Idle;
        match result {
            Ok(text) if text.is_empty() => {
                self.completion.clear();
                self.error = Some(CompletionError::empty_response(self.model.clone()));
                SubmitOutcome::Failed(CompletionErrorKind::EmptyResponse)
            }
            Ok(text) => {
                self.completion = text;
                self.error = None;
                SubmitOutcome::Completed
            }
            Err(err) => {
                let kind = err.kind;
                self.completion.clear();
                self.error = Some(err);
                SubmitOutcome::Failed(kind)
            }
        }
    }

    pub fn begin_probe(&mut self) {
        self.connectivity = ConnectivityState::Checking;
        self.server_version = None;
    }

    pub fn finish_probe(&mut self, status: &ServerStatus) {
        if status.connected {
            self.connectivity = ConnectivityState::Connected;
            self.server_version = status.version.clone();
        } else {
            self.connectivity = ConnectivityState::Disconnected;
            self.server_version = None;
        }
    }

    pub fn status_banner(&self) -> String {
        match (&self.connectivity, &self.server_version) {
            (ConnectivityState::Connected, Some(version)) => {
                format!("{} (v{})", self.connectivity.banner(), version)
            }
            (state, _) => state.banner().to_string(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Generating..."
        } else {
            "Generate Response"
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(CompletionError::display_message)
    }

    pub fn title(&self) -> String {
        format!("AI Completion with {}", self.model)
    }
}
