//! API Test - View Model

use super::model::test_direct_api;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ApiTestVm {
    pub result: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl ApiTestVm {
    pub fn new() -> Self {
        Self {
            result: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub fn run(&self) {
        if self.loading.get_untracked() {
            return;
        }
        self.loading.set(true);
        self.error.set(None);
        self.result.set(String::new());

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match test_direct_api().await {
                Ok(body) => vm.result.set(body),
                Err(e) => {
                    log::error!("API Test Error: {e}");
                    let message = if e.trim().is_empty() {
                        "Unknown error".to_string()
                    } else {
                        e
                    };
                    vm.error.set(Some(message));
                }
            }
            vm.loading.set(false);
        });
    }
}

impl Default for ApiTestVm {
    fn default() -> Self {
        Self::new()
    }
}
