use anyhow::bail;
use contracts::shared::ollama::GenerationOptions;
use once_cell::sync::Lazy;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/api";
pub const DEFAULT_MODEL: &str = "llama2";
pub const DEFAULT_PROMPT: &str = "Why is the sky blue?";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub completion: CompletionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Базовый путь API, например `http://localhost:11434/api`
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CompletionConfig {
    pub model: String,
    #[serde(default = "default_prompt")]
    pub default_prompt: String,
    /// Параметры генерации, передаются серверу без изменений
    #[serde(default)]
    pub options: Option<GenerationOptions>,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
base_url = "http://localhost:11434/api"

[completion]
model = "llama2"
default_prompt = "Why is the sky blue?"
"#;

/// Переопределения, заданные при сборке (`OLLAMA_API_BASE_URL=... trunk build`)
const BASE_URL_OVERRIDE: Option<&str> = option_env!("OLLAMA_API_BASE_URL");
const MODEL_OVERRIDE: Option<&str> = option_env!("OLLAMA_MODEL");

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            completion: CompletionConfig {
                model: DEFAULT_MODEL.to_string(),
                default_prompt: DEFAULT_PROMPT.to_string(),
                options: None,
            },
        }
    }
}

impl Config {
    /// Применить переопределения; пустые строки игнорируются
    pub fn apply_overrides(&mut self, base_url: Option<&str>, model: Option<&str>) {
        if let Some(base_url) = base_url.map(str::trim).filter(|s| !s.is_empty()) {
            self.server.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = model.map(str::trim).filter(|s| !s.is_empty()) {
            self.completion.model = model.to_string();
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let base_url = &self.server.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!("server.base_url must be an http(s) URL, got {base_url:?}");
        }
        if self.completion.model.trim().is_empty() {
            bail!("completion.model must not be empty");
        }
        Ok(())
    }
}

/// Parse and validate a TOML configuration
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration
///
/// Order:
/// 1. Embedded default config
/// 2. Build-time overrides `OLLAMA_API_BASE_URL` / `OLLAMA_MODEL`
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    config.apply_overrides(BASE_URL_OVERRIDE, MODEL_OVERRIDE);
    config.validate()?;
    tracing::info!(
        base_url = %config.server.base_url,
        model = %config.completion.model,
        "configuration loaded"
    );
    Ok(config)
}

static APP_CONFIG: Lazy<Config> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        tracing::error!("invalid build-time configuration, using defaults: {e:#}");
        Config::default()
    })
});

/// Конфигурация приложения (загружается один раз)
pub fn app_config() -> &'static Config {
    &APP_CONFIG
}
