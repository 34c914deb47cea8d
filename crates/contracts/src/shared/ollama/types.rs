use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Параметры генерации (temperature, top_p, ...), передаются серверу как есть
pub type GenerationOptions = Map<String, Value>;

/// Тело запроса `POST /generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// Всегда `false`: сервер отдаёт один полный JSON вместо потока
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerationOptions>,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options: None,
        }
    }

    pub fn with_options(mut self, options: Option<GenerationOptions>) -> Self {
        self.options = options;
        self
    }
}

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Tool,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::Tool => "tool",
        }
    }
}

/// Сообщение чата
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Тело запроса `POST /chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerationOptions>,
    /// Описания инструментов в формате Ollama, без интерпретации
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
            options: None,
            tools: Vec::new(),
        }
    }
}

/// Тело запроса `POST /show`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowRequest {
    pub model: String,
}

/// Вход для эмбеддингов: одна строка или пачка строк
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbedInput {
    Single(String),
    Batch(Vec<String>),
}

impl From<&str> for EmbedInput {
    fn from(value: &str) -> Self {
        EmbedInput::Single(value.to_string())
    }
}

impl From<String> for EmbedInput {
    fn from(value: String) -> Self {
        EmbedInput::Single(value)
    }
}

impl From<Vec<String>> for EmbedInput {
    fn from(value: Vec<String>) -> Self {
        EmbedInput::Batch(value)
    }
}

/// Тело запроса `POST /embed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedRequest {
    pub model: String,
    pub input: EmbedInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerationOptions>,
}

/// Ответ `POST /embed`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedResponse {
    #[serde(default)]
    pub embeddings: Vec<Vec<f32>>,
}

/// Подробности модели из `GET /tags`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelDetails {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub parameter_size: Option<String>,
    #[serde(default)]
    pub quantization_level: Option<String>,
}

/// Элемент списка установленных моделей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub modified_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub details: Option<ModelDetails>,
}

/// Ответ `GET /tags`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelSummary>,
}

/// Ответ `GET /version`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

/// Результат проверки доступности сервера моделей
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServerStatus {
    pub connected: bool,
    #[serde(default)]
    pub version: Option<String>,
}

impl ServerStatus {
    pub fn connected(version: impl Into<String>) -> Self {
        Self {
            connected: true,
            version: Some(version.into()),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            connected: false,
            version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_request_is_not_streaming() {
        let body = serde_json::to_value(GenerateRequest::new("llama2", "Why is the sky blue?"))
            .unwrap();
        assert_eq!(
            body,
            json!({"model": "llama2", "prompt": "Why is the sky blue?", "stream": false})
        );
    }

    #[test]
    fn test_generate_request_passes_options_through() {
        let mut options = GenerationOptions::new();
        options.insert("temperature".into(), json!(0.2));
        options.insert("num_ctx".into(), json!(4096));
        let body =
            serde_json::to_value(GenerateRequest::new("llama2", "hi").with_options(Some(options)))
                .unwrap();
        assert_eq!(body["options"], json!({"temperature": 0.2, "num_ctx": 4096}));
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest::new(
            "llama2",
            vec![ChatMessage::system("be brief"), ChatMessage::user("hello")],
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "llama2",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"}
                ],
                "stream": false
            })
        );
    }

    #[test]
    fn test_embed_input_is_untagged() {
        let single = serde_json::to_value(EmbedInput::from("a")).unwrap();
        let batch = serde_json::to_value(EmbedInput::from(vec!["a".to_string(), "b".to_string()]))
            .unwrap();
        assert_eq!(single, json!("a"));
        assert_eq!(batch, json!(["a", "b"]));
    }

    #[test]
    fn test_tags_response_tolerates_sparse_entries() {
        let tags: TagsResponse = serde_json::from_value(json!({
            "models": [
                {
                    "name": "llama2:latest",
                    "modified_at": "2024-05-01T10:00:00.123456-07:00",
                    "size": 3826793677u64,
                    "details": {"family": "llama", "parameter_size": "7B"}
                },
                {"name": "mistral:7b"}
            ]
        }))
        .unwrap();
        assert_eq!(tags.models.len(), 2);
        assert_eq!(tags.models[0].size, Some(3826793677));
        assert!(tags.models[0].modified_at.is_some());
        assert_eq!(
            tags.models[0].details.as_ref().and_then(|d| d.family.as_deref()),
            Some("llama")
        );
        assert_eq!(tags.models[1].details, None);
    }
}
