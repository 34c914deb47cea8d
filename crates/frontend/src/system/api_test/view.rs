//! API Test - View Component

use super::view_model::ApiTestVm;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ApiTestPanel() -> impl IntoView {
    let vm = ApiTestVm::new();

    view! {
        <div style="max-width: 1200px; margin: 20px auto 0 auto; padding: 20px; border: 1px solid #ccc; border-radius: 5px; box-sizing: border-box;">
            <h3 style="margin-top: 0;">"API Test Tool"</h3>
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=vm.loading
                on_click=move |_| vm.run()
            >
                {move || if vm.loading.get() { "Testing..." } else { "Test Direct API Call" }}
            </Button>

            {move || {
                vm.error
                    .get()
                    .map(|e| {
                        view! {
                            <div style="margin-top: 10px; color: red;">
                                <strong>"Error:"</strong>
                                " "
                                {e}
                            </div>
                        }
                    })
            }}

            <Show when=move || !vm.result.get().is_empty()>
                <div style="margin-top: 10px;">
                    <h4>"API Response"</h4>
                    <pre style="background: #f5f5f5; color: #0f172a; padding: 10px; border-radius: 5px; overflow: auto;">
                        {move || vm.result.get()}
                    </pre>
                </div>
            </Show>
        </div>
    }
}
