//! HTTP-клиент к локальному серверу моделей (Ollama) и view-model страницы генерации.
//!
//! Собирается и нативно (тесты), и под `wasm32` (фронтенд): на wasm reqwest
//! работает поверх `fetch`.

pub mod config;
pub mod error;
pub mod prober;
pub mod transport;
pub mod view_model;

pub use config::{app_config, load_config, Config};
pub use error::ClientError;
pub use prober::check_server_status;
pub use transport::{ModelServer, OllamaClient};
pub use view_model::CompletionViewModel;
