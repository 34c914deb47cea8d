use crate::domain::a001_completion::ui::details::OllamaCompletion;
use crate::system::api_test::ApiTestPanel;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="App" style="padding: 24px; box-sizing: border-box; font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;">
            <header class="App-header">
                <h1 style="margin: 0 0 20px 0;">"My Ollama App"</h1>
            </header>
            <main>
                <OllamaCompletion />
                <ApiTestPanel />
            </main>
        </div>
    }
}
