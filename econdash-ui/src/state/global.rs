//! Global Application State
//!
//! The dashboard controller lives behind `Rc<RefCell<_>>` and renders into
//! signal-backed surfaces; components read the signals and call back into
//! [`DashboardState`] for every user action.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use econdash::catalog::TimeRange;
use econdash::chart::ChartMode;
use econdash::dashboard::{
    DashboardController, DataOrigin, DisplaySurface, HeaderView, ReloadOutcome, SelectionState,
    StatsView,
};
use econdash::series::SeriesSource;
use econdash::theme::{Theme, ThemeManager};

use super::theme::LocalStorageThemeStore;
use crate::api::GlooDataClient;
use crate::components::chart::SignalChart;

pub type Controller = DashboardController<GlooDataClient, SignalChart, SignalDisplay>;

/// Stats, header, data origin and theme as signals
#[derive(Clone, Copy)]
pub struct SignalDisplay {
    pub stats: RwSignal<Option<StatsView>>,
    pub header: RwSignal<Option<HeaderView>>,
    pub origin: RwSignal<Option<DataOrigin>>,
    pub theme: RwSignal<Theme>,
}

impl SignalDisplay {
    pub fn new() -> Self {
        Self {
            stats: create_rw_signal(None),
            header: create_rw_signal(None),
            origin: create_rw_signal(None),
            theme: create_rw_signal(Theme::default()),
        }
    }
}

impl DisplaySurface for SignalDisplay {
    fn show_stats(&mut self, stats: &StatsView) {
        self.stats.set(Some(stats.clone()));
    }

    fn show_header(&mut self, header: &HeaderView) {
        self.header.set(Some(header.clone()));
    }

    fn show_origin(&mut self, origin: DataOrigin) {
        self.origin.set(Some(origin));
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme.set(theme);
        if let Some(body) = document().body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}

/// Dashboard state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    controller: Rc<RefCell<Controller>>,
    theme_manager: Rc<RefCell<ThemeManager<LocalStorageThemeStore>>>,
    /// Chart frames for the canvas
    pub chart: SignalChart,
    /// Stats, header and theme
    pub display: SignalDisplay,
    /// Mirror of the controller's selection
    pub selection: RwSignal<SelectionState>,
    /// A reload is in flight
    pub loading: RwSignal<bool>,
    /// When data was last rendered
    pub last_updated: RwSignal<Option<chrono::DateTime<chrono::Local>>>,
}

/// Create the dashboard state and provide it to the component tree
pub fn provide_dashboard_state() -> DashboardState {
    let chart = SignalChart::new();
    let display = SignalDisplay::new();
    let controller = DashboardController::new(
        GlooDataClient::from_storage(),
        chart,
        display,
        SelectionState::default(),
    );

    let state = DashboardState {
        selection: create_rw_signal(controller.selection().clone()),
        controller: Rc::new(RefCell::new(controller)),
        theme_manager: Rc::new(RefCell::new(ThemeManager::new(LocalStorageThemeStore))),
        chart,
        display,
        loading: create_rw_signal(false),
        last_updated: create_rw_signal(None),
    };

    provide_context(state.clone());
    state
}

impl DashboardState {
    /// Apply the persisted theme (dark when absent)
    pub fn init_theme(&self) -> Theme {
        let mut controller = self.controller.borrow_mut();
        self.theme_manager.borrow_mut().initialize(&mut *controller)
    }

    /// Flip, persist and apply the theme
    pub fn toggle_theme(&self) -> Theme {
        let mut controller = self.controller.borrow_mut();
        self.theme_manager.borrow_mut().toggle(&mut *controller)
    }

    pub fn select_indicator(&self, indicator_id: String) {
        self.controller.borrow_mut().set_indicator(indicator_id);
        self.sync_selection();
        self.reload();
    }

    pub fn select_time_range(&self, time_range: TimeRange) {
        self.controller.borrow_mut().set_time_range(time_range);
        self.sync_selection();
        self.reload();
    }

    /// Switch chart type; no data is fetched
    pub fn select_chart_mode(&self, mode: ChartMode) {
        self.controller.borrow_mut().select_chart_mode(mode);
        self.sync_selection();
    }

    /// Fetch the current selection in the background
    ///
    /// The controller is not borrowed across the fetch. Completions of
    /// superseded reloads are dropped by the controller.
    pub fn reload(&self) {
        let (request, client) = {
            let mut controller = self.controller.borrow_mut();
            (controller.begin_reload(), controller.source().clone())
        };
        self.loading.set(true);

        let state = self.clone();
        spawn_local(async move {
            let result = client
                .fetch_series(request.indicator_id(), request.time_range())
                .await;
            let error = result.as_ref().err().map(ToString::to_string);

            let outcome = state.controller.borrow_mut().finish_reload(&request, result);

            if let ReloadOutcome::Applied(origin) = outcome {
                if let (DataOrigin::Fallback, Some(error)) = (origin, error) {
                    web_sys::console::warn_1(
                        &format!("Using fallback data due to API error: {}", error).into(),
                    );
                }
                state.loading.set(false);
                state.last_updated.set(Some(chrono::Local::now()));
            }
        });
    }

    fn sync_selection(&self) {
        let selection = self.controller.borrow().selection().clone();
        self.selection.set(selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use econdash::dashboard::{ChangeDirection, ChangeView};

    #[test]
    fn test_signal_display_publishes_views() {
        let runtime = create_runtime();

        let mut display = SignalDisplay::new();
        display.show_header(&HeaderView {
            title: "Consumer Price Index".to_string(),
            date_range: "Last 2 Years".to_string(),
            source_line: "Quarterly • MOSPI".to_string(),
        });
        display.show_stats(&StatsView {
            latest: "5.9%".to_string(),
            highest: "7.3%".to_string(),
            lowest: "5.9%".to_string(),
            average: "6.575%".to_string(),
            change: ChangeView {
                text: "-1.40%".to_string(),
                direction: ChangeDirection::Negative,
            },
        });
        display.show_origin(DataOrigin::Fallback);

        assert_eq!(
            display.header.get_untracked().map(|h| h.title),
            Some("Consumer Price Index".to_string())
        );
        assert_eq!(
            display.stats.get_untracked().map(|s| s.change.direction),
            Some(ChangeDirection::Negative)
        );
        assert_eq!(display.origin.get_untracked(), Some(DataOrigin::Fallback));

        runtime.dispose();
    }
}
