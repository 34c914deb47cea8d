//! Ollama Completion - View Component

use super::view_model::OllamaCompletionVm;
use contracts::domain::a001_completion::ConnectivityState;
use leptos::prelude::*;
use thaw::*;

const CONTAINER_STYLE: &str = "width: 100%; max-width: 1200px; margin: 0 auto; padding: 30px; box-sizing: border-box; \
    display: flex; flex-direction: column; background: rgba(30, 41, 59, 0.7); border-radius: 16px; \
    border: 1px solid rgba(255, 255, 255, 0.1); box-shadow: 0 20px 50px rgba(0, 0, 0, 0.3); color: #f8fafc;";

const ERROR_STYLE: &str = "background-color: rgba(244, 63, 94, 0.15); color: #fb7185; padding: 16px; \
    border-radius: 12px; margin-bottom: 20px; border: 1px solid rgba(244, 63, 94, 0.4); font-weight: 500;";

fn status_style(connectivity: ConnectivityState) -> String {
    let (background, color, border) = match connectivity {
        ConnectivityState::Checking => (
            "rgba(59, 130, 246, 0.15)",
            "#60a5fa",
            "rgba(59, 130, 246, 0.5)",
        ),
        ConnectivityState::Connected => (
            "rgba(16, 185, 129, 0.15)",
            "#34d399",
            "rgba(16, 185, 129, 0.5)",
        ),
        ConnectivityState::Disconnected => (
            "rgba(244, 63, 94, 0.15)",
            "#fb7185",
            "rgba(244, 63, 94, 0.5)",
        ),
    };
    format!(
        "display: inline-flex; align-items: center; align-self: flex-start; padding: 8px 16px; \
         border-radius: 20px; font-size: 14px; font-weight: 500; margin-bottom: 20px; \
         background-color: {background}; color: {color}; border: 1px solid {border};"
    )
}

#[component]
#[allow(non_snake_case)]
pub fn OllamaCompletion() -> impl IntoView {
    let vm = OllamaCompletionVm::new();

    // Проверка сервера один раз при монтировании
    Effect::new(move |_| {
        vm.check_connectivity();
    });

    // Промпт принадлежит view-model: каждое изменение поля уходит туда
    Effect::new(move |_| {
        let prompt = vm.prompt.get();
        vm.sync_prompt(prompt);
    });

    let is_loading = Signal::derive(move || vm.is_loading());
    let submit_disabled = Signal::derive(move || !vm.can_submit());

    view! {
        <div class="ollama-container" style=CONTAINER_STYLE>
            <div
                class="ollama-header"
                style="margin-bottom: 20px; padding-bottom: 15px; border-bottom: 1px solid rgba(255, 255, 255, 0.1);"
            >
                <h2 style="font-size: 28px; font-weight: 700; margin: 0 0 10px 0;">
                    {move || vm.state.with(|s| s.title())}
                </h2>
                <p style="margin: 0; color: #94a3b8; font-size: 16px;">
                    "Ask a question or provide a prompt to get a response from Ollama"
                </p>
            </div>

            <div
                class="status-indicator"
                style=move || status_style(vm.state.with(|s| s.connectivity))
            >
                {move || vm.state.with(|s| s.status_banner())}
            </div>

            // Input area
            <div
                class="input-area"
                style="background-color: rgba(15, 23, 42, 0.5); padding: 25px; border-radius: 16px; margin-bottom: 25px;"
            >
                <label
                    for="prompt"
                    style="display: block; margin-bottom: 12px; font-weight: 500; color: #e2e8f0;"
                >
                    "Your prompt:"
                </label>
                <Textarea
                    value=vm.prompt
                    placeholder="Enter your prompt here..."
                    disabled=is_loading
                    attr:id="prompt"
                    attr:style="width: 100%; min-height: 120px; margin-bottom: 16px; resize: vertical;"
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submit_disabled
                    on_click=move |_| vm.submit()
                >
                    {move || vm.state.with(|s| s.submit_label())}
                </Button>
            </div>

            // Error display
            {move || {
                vm.state
                    .with(|s| s.error_message())
                    .map(|message| {
                        view! {
                            <div style=ERROR_STYLE>
                                <strong>"Error:"</strong>
                                " "
                                {message}
                            </div>
                        }
                    })
            }}

            <Show when=move || is_loading.get()>
                <Flex
                    vertical=true
                    align=FlexAlign::Center
                    gap=FlexGap::Medium
                    style="padding: 30px;"
                >
                    <Spinner />
                    <p style="color: #94a3b8; margin: 0; font-weight: 500;">
                        "Generating your response..."
                    </p>
                </Flex>
            </Show>

            <Show when=move || vm.state.with(|s| !s.completion.is_empty())>
                <div style="border-radius: 16px; overflow: hidden; border: 1px solid rgba(255, 255, 255, 0.07); margin-top: 20px;">
                    <Flex
                        justify=FlexJustify::SpaceBetween
                        align=FlexAlign::Center
                        class="response-header"
                        style="padding: 16px 20px; border-bottom: 1px solid rgba(255, 255, 255, 0.1); font-weight: 600; font-size: 18px;"
                    >
                        <span>"Response"</span>
                        <span style="font-size: 12px; color: #94a3b8; font-weight: normal;">
                            {move || vm.state.with(|s| format!("Powered by {}", s.model))}
                        </span>
                    </Flex>
                    <div
                        class="response-content"
                        style="padding: 24px; font-size: 16px; line-height: 1.8; white-space: pre-wrap; background-color: rgba(15, 23, 42, 0.5);"
                    >
                        {move || vm.state.with(|s| s.completion.clone())}
                    </div>
                </div>
            </Show>
        </div>
    }
}
