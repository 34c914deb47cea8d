//! Общие типы для клиента и фронтенда: DTO Ollama API и модель состояния страницы.

pub mod domain;
pub mod shared;
