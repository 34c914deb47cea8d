//! Ollama Completion UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: construction of the model server client from configuration
//! - view_model.rs: OllamaCompletionVm, RwSignal mirror of the client view-model
//! - view.rs: Main component OllamaCompletion

mod model;
mod view;
mod view_model;

pub use view::OllamaCompletion;
pub use view_model::OllamaCompletionVm;
