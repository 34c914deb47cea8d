//! Ollama Completion - View Model
//!
//! Состояние принадлежит `client::CompletionViewModel`; здесь только его
//! зеркало в сигналах, которое обновляет слушатель после каждого перехода.

use super::model::completion_session;
use client::{CompletionViewModel, OllamaClient};
use contracts::domain::a001_completion::{CompletionState, SubmitOutcome};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone, Copy)]
pub struct OllamaCompletionVm {
    pub state: RwSignal<CompletionState>,
    /// Текст в поле ввода, передаётся в view-model при каждом изменении
    pub prompt: RwSignal<String>,
    session: StoredValue<Arc<CompletionViewModel<OllamaClient>>, LocalStorage>,
}

impl OllamaCompletionVm {
    pub fn new() -> Self {
        let session = completion_session();
        let initial = session.snapshot();

        let state = RwSignal::new(initial.clone());
        let session = session.with_listener(move |snapshot: &CompletionState| {
            state.set(snapshot.clone());
        });

        Self {
            state,
            prompt: RwSignal::new(initial.prompt),
            session: StoredValue::new_local(Arc::new(session)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(CompletionState::is_loading)
    }

    pub fn can_submit(&self) -> bool {
        self.state.with(CompletionState::can_submit)
    }

    pub fn sync_prompt(&self, prompt: String) {
        self.session.get_value().set_prompt(prompt);
    }

    pub fn check_connectivity(&self) {
        let session = self.session.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let connectivity = session.check_connectivity().await;
            log::info!("Ollama server status: {}", connectivity.code());
        });
    }

    pub fn submit(&self) {
        let session = self.session.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match session.submit().await {
                SubmitOutcome::Completed => log::debug!("completion received"),
                SubmitOutcome::Failed(kind) => log::warn!("completion failed: {kind}"),
                SubmitOutcome::Ignored => log::debug!("submit ignored, request in flight"),
            }
        });
    }
}

impl Default for OllamaCompletionVm {
    fn default() -> Self {
        Self::new()
    }
}
