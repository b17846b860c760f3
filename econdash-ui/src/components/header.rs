//! Chart Header Component
//!
//! Indicator title, date-range label and frequency/source line.

use leptos::*;

use econdash::catalog::IndicatorCatalog;

use crate::state::global::DashboardState;

#[component]
pub fn ChartHeader() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let header = state.display.header;
    let selection = state.selection;

    // Until the first load completes, name the selected indicator
    let title = move || {
        header.with(|h| match h {
            Some(h) => h.title.clone(),
            None => IndicatorCatalog::new()
                .get_or_unlisted(&selection.with(|s| s.indicator_id.clone()))
                .display_name
                .to_string(),
        })
    };

    view! {
        <div class="flex items-center justify-between mb-4">
            <h2 id="chartTitle" class="text-xl font-semibold">{title}</h2>
            <div class="text-sm opacity-70 text-right">
                <div id="dateRange">
                    {move || header.with(|h| h.as_ref().map(|h| h.date_range.clone()).unwrap_or_default())}
                </div>
                <div id="chartSource">
                    {move || header.with(|h| h.as_ref().map(|h| h.source_line.clone()).unwrap_or_default())}
                </div>
            </div>
        </div>
    }
}
