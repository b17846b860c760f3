//! Test doubles shared by the unit tests.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::catalog::TimeRange;
use crate::chart::{ChartConfig, ChartSurface, Redraw};
use crate::dashboard::{DataOrigin, DisplaySurface, HeaderView, StatsView};
use crate::series::{FetchError, FetchResult, SeriesResponse, SeriesSource};
use crate::theme::Theme;

/// Chart surface that remembers every redraw
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub redraws: Vec<Redraw>,
    pub last: Option<ChartConfig>,
}

impl ChartSurface for RecordingSurface {
    fn redraw(&mut self, config: &ChartConfig, redraw: Redraw) {
        self.redraws.push(redraw);
        self.last = Some(config.clone());
    }
}

/// Display surface that remembers everything pushed to it
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub stats: Vec<StatsView>,
    pub headers: Vec<HeaderView>,
    pub origins: Vec<DataOrigin>,
    pub themes: Vec<Theme>,
}

impl RecordingDisplay {
    pub fn last_stats(&self) -> Option<&StatsView> {
        self.stats.last()
    }

    pub fn last_header(&self) -> Option<&HeaderView> {
        self.headers.last()
    }
}

impl DisplaySurface for RecordingDisplay {
    fn show_stats(&mut self, stats: &StatsView) {
        self.stats.push(stats.clone());
    }

    fn show_header(&mut self, header: &HeaderView) {
        self.headers.push(header.clone());
    }

    fn show_origin(&mut self, origin: DataOrigin) {
        self.origins.push(origin);
    }

    fn set_theme(&mut self, theme: Theme) {
        self.themes.push(theme);
    }
}

/// Source that replays queued results and records what was asked
#[derive(Debug, Default)]
pub struct ScriptedSource {
    responses: RefCell<VecDeque<FetchResult<SeriesResponse>>>,
    calls: RefCell<Vec<(String, TimeRange)>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<FetchResult<SeriesResponse>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, TimeRange)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SeriesSource for ScriptedSource {
    async fn fetch_series(
        &self,
        indicator_id: &str,
        time_range: &TimeRange,
    ) -> FetchResult<SeriesResponse> {
        self.calls
            .borrow_mut()
            .push((indicator_id.to_string(), time_range.clone()));

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted response".to_string())))
    }
}
