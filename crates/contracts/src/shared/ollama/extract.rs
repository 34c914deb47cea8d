//! Извлечение текста из ответов сервера моделей.
//!
//! Разные версии Ollama (и совместимые серверы) кладут текст в разные поля.
//! Порядок: `response`, затем `text`, затем всё тело одной строкой.

use serde_json::Value;

const PRIMARY_TEXT_FIELD: &str = "response";
const FALLBACK_TEXT_FIELD: &str = "text";

/// Текст ответа `POST /generate`.
///
/// Никогда не падает: если ни одно известное поле не найдено,
/// возвращается компактная JSON-строка всего тела.
pub fn extract_completion_text(body: &Value) -> String {
    [PRIMARY_TEXT_FIELD, FALLBACK_TEXT_FIELD]
        .iter()
        .find_map(|field| body.get(field).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}

/// Текст ответа `POST /chat`: `message.content`, иначе правила generate.
pub fn extract_chat_text(body: &Value) -> String {
    body.get("message")
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| extract_completion_text(body))
}
