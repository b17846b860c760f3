//! Stats Panel Component
//!
//! Latest, highest, lowest, average and change for the shown series.

use leptos::*;

use econdash::dashboard::{DataOrigin, StatsView};

use crate::state::global::DashboardState;

/// Single statistic card
#[component]
fn StatCard(
    /// Card title
    label: &'static str,
    /// Element id, kept stable for styling hooks
    id: &'static str,
    /// Pick the value out of the current stats
    value: fn(&StatsView) -> String,
) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let stats = state.display.stats;

    view! {
        <div class="stat-card rounded-lg p-4 border">
            <span class="text-sm opacity-70">{label}</span>
            <div id=id class="text-2xl font-bold mt-2">
                {move || stats.with(|s| s.as_ref().map(value).unwrap_or_else(|| "—".to_string()))}
            </div>
        </div>
    }
}

/// Stats row
#[component]
pub fn StatsPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let stats = state.display.stats;
    let origin = state.display.origin;

    view! {
        <section class="grid grid-cols-2 md:grid-cols-5 gap-4">
            <StatCard label="Latest Value" id="latestValue" value=|s| s.latest.clone() />
            <StatCard label="Highest" id="highestValue" value=|s| s.highest.clone() />
            <StatCard label="Lowest" id="lowestValue" value=|s| s.lowest.clone() />
            <StatCard label="Average" id="avgValue" value=|s| s.average.clone() />

            // Change, colored by direction
            <div class="stat-card rounded-lg p-4 border">
                <span class="text-sm opacity-70">"Change"</span>
                <div
                    id="changeValue"
                    class=move || {
                        stats.with(|s| match s {
                            Some(s) => format!("text-2xl font-bold mt-2 {}", s.change.direction.css_class()),
                            None => "text-2xl font-bold mt-2".to_string(),
                        })
                    }
                >
                    {move || stats.with(|s| s.as_ref().map(|s| s.change.text.clone()).unwrap_or_else(|| "—".to_string()))}
                </div>
            </div>
        </section>

        {move || {
            if origin.get() == Some(DataOrigin::Fallback) {
                view! {
                    <p class="text-sm opacity-70 mt-2">
                        "Indicator API unavailable; showing sample data"
                    </p>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
