//! API Settings Component
//!
//! Lets the user point the dashboard at another indicator API.

use leptos::*;

use crate::api::{self, GlooDataClient};
use crate::state::global::DashboardState;

/// API connection settings
#[component]
pub fn ApiSettings() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<Result<(), String>>);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let client = GlooDataClient::with_base(api_url.get());
        spawn_local(async move {
            let result = client.check_health().await.map_err(|e| e.to_string());
            set_test_result.set(Some(result));
            set_testing.set(false);
        });
    };

    // Saved URLs apply to the next reload
    let state_for_save = state.clone();
    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        state_for_save.reload();
    };

    view! {
        <details class="rounded-xl p-4 border">
            <summary class="cursor-pointer text-sm opacity-70">"API Connection"</summary>

            <div class="flex space-x-2 mt-4">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 rounded-lg px-4 py-2 border"
                />
                <button
                    on:click=test_connection
                    disabled=move || testing.get()
                    class="px-4 py-2 rounded-lg font-medium border"
                >
                    {move || if testing.get() { "Testing..." } else { "Test" }}
                </button>
                <button on:click=save_url class="px-4 py-2 rounded-lg font-medium active">
                    "Save"
                </button>
            </div>

            {move || test_result.get().map(|result| match result {
                Ok(()) => view! { <p class="text-sm positive mt-2">"Connection successful"</p> },
                Err(e) => view! { <p class="text-sm negative mt-2">{format!("Connection failed: {}", e)}</p> },
            })}
        </details>
    }
}
