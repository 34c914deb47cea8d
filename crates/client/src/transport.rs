//! Transport to the model server.
//!
//! One method per endpoint, no retries, no caching, no state between calls.
//! Every failure is logged and returned to the caller.

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::ClientError;
use async_trait::async_trait;
use contracts::shared::ollama::{
    extract_chat_text, extract_completion_text, ChatMessage, ChatRequest, EmbedInput,
    EmbedRequest, EmbedResponse, GenerateRequest, GenerationOptions, ModelSummary, ShowRequest,
    TagsResponse, VersionResponse,
};
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;

/// Сервер моделей
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ModelServer: Send + Sync {
    /// `POST /generate`, текст ответа целиком (без стриминга)
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: Option<&GenerationOptions>,
    ) -> Result<String, ClientError>;

    /// `POST /chat`, текст ответа ассистента
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: Option<&GenerationOptions>,
        tools: &[Value],
    ) -> Result<String, ClientError>;

    /// `GET /tags`
    async fn list_models(&self) -> Result<Vec<ModelSummary>, ClientError>;

    /// `POST /show`, метаданные модели как есть
    async fn show_model(&self, model: &str) -> Result<Value, ClientError>;

    /// `POST /embed`
    async fn embed(
        &self,
        model: &str,
        input: EmbedInput,
        options: Option<&GenerationOptions>,
    ) -> Result<Vec<Vec<f32>>, ClientError>;

    /// `GET /version`
    async fn version(&self) -> Result<String, ClientError>;

    /// Базовый путь API, для сообщений об ошибках
    fn base_url(&self) -> &str;
}

/// Клиент Ollama поверх reqwest
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.server.base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        read_json(response).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::from_status(status.as_u16(), &body));
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ModelServer for OllamaClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: Option<&GenerationOptions>,
    ) -> Result<String, ClientError> {
        tracing::info!(model, prompt_len = prompt.len(), "sending generate request");
        let request = GenerateRequest::new(model, prompt).with_options(options.cloned());
        let body = self
            .post_json("generate", &request)
            .await
            .inspect_err(|e| tracing::error!(model, "error generating completion: {e}"))?;

        let text = extract_completion_text(&body);
        tracing::debug!(model, chars = text.len(), "generate response received");
        Ok(text)
    }

    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: Option<&GenerationOptions>,
        tools: &[Value],
    ) -> Result<String, ClientError> {
        tracing::info!(model, messages = messages.len(), "sending chat request");
        let mut request = ChatRequest::new(model, messages.to_vec());
        request.options = options.cloned();
        request.tools = tools.to_vec();

        let body = self
            .post_json("chat", &request)
            .await
            .inspect_err(|e| tracing::error!(model, "error generating chat completion: {e}"))?;
        Ok(extract_chat_text(&body))
    }

    async fn list_models(&self) -> Result<Vec<ModelSummary>, ClientError> {
        let body = self
            .get_json("tags")
            .await
            .inspect_err(|e| tracing::error!("error listing models: {e}"))?;
        let tags: TagsResponse = serde_json::from_value(body)?;
        Ok(tags.models)
    }

    async fn show_model(&self, model: &str) -> Result<Value, ClientError> {
        let request = ShowRequest {
            model: model.to_string(),
        };
        self.post_json("show", &request)
            .await
            .inspect_err(|e| tracing::error!(model, "error showing model details: {e}"))
    }

    async fn embed(
        &self,
        model: &str,
        input: EmbedInput,
        options: Option<&GenerationOptions>,
    ) -> Result<Vec<Vec<f32>>, ClientError> {
        let request = EmbedRequest {
            model: model.to_string(),
            input,
            options: options.cloned(),
        };
        let body = self
            .post_json("embed", &request)
            .await
            .inspect_err(|e| tracing::error!(model, "error generating embeddings: {e}"))?;
        let response: EmbedResponse = serde_json::from_value(body)?;
        Ok(response.embeddings)
    }

    async fn version(&self) -> Result<String, ClientError> {
        let body = self.get_json("version").await?;
        let response: VersionResponse = serde_json::from_value(body)?;
        Ok(response.version)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
