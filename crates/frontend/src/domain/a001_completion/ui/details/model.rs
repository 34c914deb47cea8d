//! Ollama Completion - Model (client construction)

use client::{app_config, CompletionViewModel, OllamaClient};

/// Клиент сервера моделей по конфигурации сборки
pub fn completion_client() -> OllamaClient {
    OllamaClient::from_config(app_config())
}

/// View-model клиента с моделью, промптом и параметрами из конфигурации
pub fn completion_session() -> CompletionViewModel<OllamaClient> {
    CompletionViewModel::from_config(completion_client(), app_config())
}
