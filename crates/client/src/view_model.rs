//! Completion View-Model
//!
//! Единственный владелец изменяемого состояния страницы. Переходы берутся из
//! `contracts::domain::a001_completion::CompletionState`, здесь только
//! оркестрация вызовов к серверу и классификация ошибок.
//!
//! Мьютекс никогда не удерживается через `.await`, слушатель вызывается
//! после освобождения блокировки.

use crate::config::Config;
use crate::error::ClientError;
use crate::prober::check_server_status;
use crate::transport::ModelServer;
use contracts::domain::a001_completion::{
    port_from_base_url, CompletionError, CompletionErrorKind, CompletionState, ConnectivityState,
    SubmitOutcome,
};
use contracts::shared::ollama::GenerationOptions;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Вызывается после каждого перехода со снимком состояния
pub type StateListener = Box<dyn Fn(&CompletionState) + Send + Sync>;

pub struct CompletionViewModel<S> {
    server: S,
    options: Option<GenerationOptions>,
    state: Mutex<CompletionState>,
    listener: Option<StateListener>,
}

impl<S: ModelServer> CompletionViewModel<S> {
    pub fn new(server: S, model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            server,
            options: None,
            state: Mutex::new(CompletionState::new(model, prompt)),
            listener: None,
        }
    }

    pub fn from_config(server: S, config: &Config) -> Self {
        Self::new(
            server,
            config.completion.model.clone(),
            config.completion.default_prompt.clone(),
        )
        .with_options(config.completion.options.clone())
    }

    pub fn with_options(mut self, options: Option<GenerationOptions>) -> Self {
        self.options = options;
        self
    }

    pub fn with_listener(
        mut self,
        listener: impl Fn(&CompletionState) + Send + Sync + 'static,
    ) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn server(&self) -> &S {
        &self.server
    }

    pub fn snapshot(&self) -> CompletionState {
        self.lock().clone()
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        self.update(move |state| state.set_prompt(prompt));
    }

    /// Отправить текущий промпт.
    ///
    /// Повторный вызов во время активного запроса ничего не отправляет и
    /// возвращает [`SubmitOutcome::Ignored`].
    pub async fn submit(&self) -> SubmitOutcome {
        let started = self.update(|state| {
            state
                .begin_request()
                .map(|prompt| (prompt, state.model.clone()))
        });
        let Some((prompt, model)) = started else {
            tracing::debug!("submit ignored: a request is already in flight");
            return SubmitOutcome::Ignored;
        };

        let result = self
            .server
            .generate(&model, &prompt, self.options.as_ref())
            .await
            .map_err(|e| classify(&e, &model, self.server.base_url()));

        let outcome = self.update(|state| state.finish_request(result));
        tracing::info!(model = %model, ?outcome, "completion request finished");
        outcome
    }

    /// Проверить сервер: `Checking`, затем `Connected` или `Disconnected`.
    pub async fn check_connectivity(&self) -> ConnectivityState {
        self.update(CompletionState::begin_probe);
        let status = check_server_status(&self.server).await;
        self.update(|state| {
            state.finish_probe(&status);
            state.connectivity
        })
    }

    fn lock(&self) -> MutexGuard<'_, CompletionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(&self, f: impl FnOnce(&mut CompletionState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.lock();
            let result = f(&mut state);
            (result, state.clone())
        };
        if let Some(listener) = &self.listener {
            listener(&snapshot);
        }
        result
    }
}

/// Единственное место, где ошибка транспорта превращается в ошибку для показа
pub fn classify(err: &ClientError, model: &str, base_url: &str) -> CompletionError {
    let kind = match err {
        ClientError::ConnectionRefused(_) => CompletionErrorKind::ConnectionRefused,
        ClientError::Status { status: 404, .. } => CompletionErrorKind::NotFound,
        _ => CompletionErrorKind::Generic,
    };
    CompletionError::new(kind, err.to_string(), model).with_port(port_from_base_url(base_url))
}
