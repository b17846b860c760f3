//! Dashboard Controls
//!
//! Indicator picker, time-range buttons, chart-type buttons and the theme
//! toggle. Every control goes through [`DashboardState`].

use leptos::*;

use econdash::catalog::{IndicatorCatalog, TimeRange};
use econdash::chart::ChartMode;
use econdash::theme::Theme;

use crate::state::global::DashboardState;

const ACTIVE_CLASS: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-colors active";
const INACTIVE_CLASS: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";

/// Indicator selector
#[component]
pub fn IndicatorPicker() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let selection = state.selection;

    let on_change = move |ev: web_sys::Event| state.select_indicator(event_target_value(&ev));

    view! {
        <select
            id="indicatorSelect"
            class="rounded-lg px-4 py-2 border"
            on:change=on_change
            prop:value=move || selection.with(|s| s.indicator_id.clone())
        >
            {IndicatorCatalog::new()
                .all()
                .iter()
                .map(|descriptor| view! {
                    <option value=descriptor.id>{descriptor.display_name}</option>
                })
                .collect::<Vec<_>>()}
        </select>
    }
}

/// Time range selection button
#[component]
fn TimeRangeButton(range: TimeRange) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let selection = state.selection;

    let label = range.as_str().to_string();
    let range_for_memo = range.clone();
    let is_active = create_memo(move |_| selection.with(|s| s.time_range == range_for_memo));

    view! {
        <button
            class=move || if is_active.get() { ACTIVE_CLASS } else { INACTIVE_CLASS }
            data-range=label.clone()
            on:click=move |_| state.select_time_range(range.clone())
        >
            {label}
        </button>
    }
}

/// Chart type selection button
#[component]
fn ChartModeButton(mode: ChartMode) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let selection = state.selection;
    let is_active = create_memo(move |_| selection.with(|s| s.chart_mode == mode));

    view! {
        <button
            class=move || if is_active.get() { ACTIVE_CLASS } else { INACTIVE_CLASS }
            data-type=mode.as_str()
            on:click=move |_| state.select_chart_mode(mode)
        >
            {mode.as_str()}
        </button>
    }
}

/// Light/dark toggle; Ctrl+T does the same
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let theme = state.display.theme;

    view! {
        <button
            id="themeToggle"
            class="px-3 py-2 rounded-lg border"
            title="Toggle theme (Ctrl+T)"
            on:click=move |_| {
                state.toggle_theme();
            }
        >
            {move || match theme.get() {
                Theme::Dark => "☀️",
                Theme::Light => "🌙",
            }}
        </button>
    }
}

/// Full control bar
#[component]
pub fn Controls() -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-4">
            <IndicatorPicker />

            <div class="flex space-x-2">
                {TimeRange::KNOWN
                    .into_iter()
                    .map(|range| view! { <TimeRangeButton range=range /> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="flex space-x-2">
                {ChartMode::ALL
                    .into_iter()
                    .map(|mode| view! { <ChartModeButton mode=mode /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
