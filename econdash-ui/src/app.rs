//! App Root Component
//!
//! Layout, global providers, startup load and the Ctrl+T shortcut.

use leptos::*;

use crate::components::{ApiSettings, Chart, ChartHeader, Controls, StatsPanel, ThemeToggle};
use crate::state::global::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    let state = provide_dashboard_state();

    // Persisted theme first, then the default selection
    state.init_theme();
    state.reload();

    let state_for_keys = state.clone();
    let keys = window_event_listener(ev::keydown, move |ev| {
        if ev.ctrl_key() && ev.key().eq_ignore_ascii_case("t") {
            ev.prevent_default();
            state_for_keys.toggle_theme();
        }
    });
    on_cleanup(move || keys.remove());

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="container mx-auto px-4 py-6 flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Economic Indicators"</h1>
                    <p class="opacity-70 mt-1">"Key indicators at a glance"</p>
                </div>
                <ThemeToggle />
            </header>

            <main class="flex-1 container mx-auto px-4 pb-24 space-y-6">
                <Controls />

                <section class="chart-panel rounded-xl p-6 border">
                    <ChartHeader />
                    <Chart />
                </section>

                <StatsPanel />

                <ApiSettings />
            </main>

            <Footer />
        </div>
    }
}

/// Footer showing load status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let last_updated = state.last_updated;
    let loading = state.loading;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 border-t py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="opacity-70">
                    {move || {
                        last_updated.get()
                            .map(|dt| format!("Last updated: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not loaded".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
