//! Dashboard Controller
//!
//! Drives the selection state machine and the load pipeline:
//! source → fallback on failure → chart, stats and header.
//!
//! Every reload is tagged with a generation number. Only the completion of
//! the most recently issued reload is applied; older completions are dropped
//! so a slow response can never overwrite a newer selection.

use crate::catalog::{IndicatorCatalog, TimeRange};
use crate::chart::{ChartMode, ChartPresenter, ChartSurface};
use crate::series::{FallbackProvider, FetchResult, SeriesResponse, SeriesSource};
use crate::theme::{Theme, Themed};

use super::selection::SelectionState;
use super::view::{DataOrigin, DisplaySurface, HeaderView, StatsView};

/// An issued reload, to be completed with [`DashboardController::finish_reload`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadRequest {
    generation: u64,
    indicator_id: String,
    time_range: TimeRange,
}

impl ReloadRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn indicator_id(&self) -> &str {
        &self.indicator_id
    }

    pub fn time_range(&self) -> &TimeRange {
        &self.time_range
    }
}

/// What happened to a completed reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// Rendered, from live or fallback data
    Applied(DataOrigin),
    /// Superseded by a newer reload; nothing was rendered
    Discarded { generation: u64, latest: u64 },
}

/// Orchestrates one dashboard: selection, data loading and rendering
pub struct DashboardController<C, W, D> {
    source: C,
    presenter: ChartPresenter<W>,
    display: D,
    catalog: IndicatorCatalog,
    fallback: FallbackProvider,
    selection: SelectionState,
    latest_generation: u64,
}

impl<C, W, D> DashboardController<C, W, D>
where
    C: SeriesSource,
    W: ChartSurface,
    D: DisplaySurface,
{
    /// Create the controller and the chart it owns
    ///
    /// No data is loaded until the first reload.
    pub fn new(source: C, surface: W, display: D, selection: SelectionState) -> Self {
        let mut presenter = ChartPresenter::new(surface);
        if selection.chart_mode != ChartMode::default() {
            presenter.set_mode(selection.chart_mode);
        }

        Self {
            source,
            presenter,
            display,
            catalog: IndicatorCatalog::new(),
            fallback: FallbackProvider::new(),
            selection,
            latest_generation: 0,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn presenter(&self) -> &ChartPresenter<W> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut ChartPresenter<W> {
        &mut self.presenter
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    /// Generation of the most recently issued reload (0 before the first)
    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Change the indicator without loading
    pub fn set_indicator(&mut self, indicator_id: impl Into<String>) {
        self.selection.indicator_id = indicator_id.into();
    }

    /// Change the time range without loading
    pub fn set_time_range(&mut self, time_range: TimeRange) {
        self.selection.time_range = time_range;
    }

    /// Select an indicator and load it for the current range
    pub async fn select_indicator(&mut self, indicator_id: impl Into<String>) -> ReloadOutcome {
        self.set_indicator(indicator_id);
        self.reload().await
    }

    /// Select a time range and reload the current indicator
    pub async fn select_time_range(&mut self, time_range: TimeRange) -> ReloadOutcome {
        self.set_time_range(time_range);
        self.reload().await
    }

    /// Switch the chart geometry; data is not reloaded
    pub fn select_chart_mode(&mut self, mode: ChartMode) {
        self.selection.chart_mode = mode;
        self.presenter.set_mode(mode);
    }

    /// Fetch the current selection and render it
    pub async fn reload(&mut self) -> ReloadOutcome {
        let request = self.begin_reload();
        let result = self
            .source
            .fetch_series(&request.indicator_id, &request.time_range)
            .await;
        self.finish_reload(&request, result)
    }

    /// Issue a reload for the current selection
    ///
    /// For event loops that must not hold the controller across the fetch:
    /// fetch `request.indicator_id()` / `request.time_range()` from a clone
    /// of the source, then hand the result to [`Self::finish_reload`].
    pub fn begin_reload(&mut self) -> ReloadRequest {
        self.latest_generation += 1;
        ReloadRequest {
            generation: self.latest_generation,
            indicator_id: self.selection.indicator_id.clone(),
            time_range: self.selection.time_range.clone(),
        }
    }

    /// Apply the result of an issued reload, falling back on failure
    pub fn finish_reload(
        &mut self,
        request: &ReloadRequest,
        result: FetchResult<SeriesResponse>,
    ) -> ReloadOutcome {
        if request.generation != self.latest_generation {
            tracing::debug!(
                generation = request.generation,
                latest = self.latest_generation,
                indicator = %request.indicator_id,
                "Discarding superseded reload"
            );
            return ReloadOutcome::Discarded {
                generation: request.generation,
                latest: self.latest_generation,
            };
        }

        let (series, origin) = match result {
            Ok(series) => (series, DataOrigin::Live),
            Err(e) => {
                tracing::warn!(
                    indicator = %request.indicator_id,
                    range = %request.time_range,
                    error = %e,
                    "Using fallback data due to API error"
                );
                let series = self
                    .fallback
                    .fallback_for(&request.indicator_id)
                    .with_time_range(request.time_range.clone());
                (series, DataOrigin::Fallback)
            }
        };

        self.render(&request.indicator_id, &request.time_range, &series);
        self.display.show_origin(origin);

        ReloadOutcome::Applied(origin)
    }

    fn render(&mut self, indicator_id: &str, time_range: &TimeRange, series: &SeriesResponse) {
        let descriptor = self.catalog.get_or_unlisted(indicator_id);

        self.presenter.set_series(series, descriptor);
        self.display
            .show_stats(&StatsView::render(series.stats(), descriptor.unit));

        // Unlisted indicators leave the previous header in place.
        if let Some(descriptor) = self.catalog.get(indicator_id) {
            self.display
                .show_header(&HeaderView::render(descriptor, time_range));
        }
    }
}

impl<C, W, D> Themed for DashboardController<C, W, D>
where
    C: SeriesSource,
    W: ChartSurface,
    D: DisplaySurface,
{
    fn apply_theme(&mut self, theme: Theme) {
        self.display.set_theme(theme);
        self.presenter.apply_theme(theme);
    }
}
