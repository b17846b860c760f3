//! Terminal front-end surfaces
//!
//! ratatui renderings of the chart and the stats/header panel, used by the
//! `econdash` binary. `show` renders the [`DashboardView`] into an off-screen
//! buffer and prints it; `watch` draws the same widget full screen.

use std::io::{self, Write};
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::queue;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::chart::{ChartConfig, ChartSurface, Geometry, Palette, Redraw};
use crate::dashboard::{ChangeDirection, DataOrigin, DisplaySurface, HeaderView, StatsView};
use crate::theme::Theme;

/// Default plot width in columns
pub const DEFAULT_PLOT_WIDTH: usize = 40;

const POSITIVE_COLOR: Color = Color::Rgb(52, 208, 88);
const NEGATIVE_COLOR: Color = Color::Rgb(234, 74, 90);
const FALLBACK_COLOR: Color = Color::Rgb(234, 179, 8);

/// Chart surface that keeps the configuration as styled text rows
#[derive(Debug, Clone)]
pub struct TerminalChart {
    width: usize,
    color: bool,
    lines: Vec<Line<'static>>,
}

impl TerminalChart {
    pub fn new(width: usize, color: bool) -> Self {
        Self {
            width: width.max(4),
            color,
            lines: Vec::new(),
        }
    }

    /// The most recent rendering
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }
}

impl ChartSurface for TerminalChart {
    fn redraw(&mut self, config: &ChartConfig, _redraw: Redraw) {
        self.lines = chart_lines(config, self.width, self.color);
    }
}

/// Render `config` as a title row, one row per label and an axis row
pub fn chart_lines(config: &ChartConfig, width: usize, color: bool) -> Vec<Line<'static>> {
    let tick = foreground(config.tick_color, color);
    if config.labels.is_empty() {
        return vec![Line::styled("(no data)", tick)];
    }

    let series = foreground(config.style.border_color, color);
    let (lo, hi) = config.resolved_y_bounds();
    let label_width = config.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(config.labels.len() + 2);
    lines.push(Line::styled(
        config.dataset_label.clone(),
        series.add_modifier(Modifier::BOLD),
    ));

    for (label, value) in config.labels.iter().zip(config.values.iter()) {
        let mut spans = vec![Span::styled(
            format!("{:>width$} │", label, width = label_width),
            tick,
        )];

        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                let cells = (((v - lo) / (hi - lo)) * width as f64)
                    .round()
                    .clamp(0.0, width as f64) as usize;
                let mark = plot_cells(config.geometry, config.fill, cells);
                let pad = " ".repeat(width.saturating_sub(mark.chars().count()));
                spans.push(Span::styled(mark, series));
                spans.push(Span::raw(format!("{} {}", pad, config.format_tick(v))));
            }
            None => spans.push(Span::styled("(no data)", tick)),
        }

        lines.push(Line::from(spans));
    }

    lines.push(Line::styled(
        format!(
            "{:>width$} └ {} … {}",
            "",
            config.format_tick(lo),
            config.format_tick(hi),
            width = label_width
        ),
        tick,
    ));

    lines
}

fn plot_cells(geometry: Geometry, fill: bool, cells: usize) -> String {
    match (geometry, fill) {
        (Geometry::Bar, _) => "█".repeat(cells.max(1)),
        (Geometry::Line, true) => format!("{}●", "░".repeat(cells)),
        (Geometry::Line, false) => format!("{}●", " ".repeat(cells)),
        (Geometry::Scatter, _) => format!("{}·", " ".repeat(cells)),
    }
}

/// Palette colors are CSS hex strings; anything else keeps the terminal default
fn foreground(css: &str, color: bool) -> Style {
    match Color::from_str(css) {
        Ok(fg) if color => Style::default().fg(fg),
        _ => Style::default(),
    }
}

/// Stats and header panel for the terminal
#[derive(Debug, Clone, Default)]
pub struct TerminalDisplay {
    color: bool,
    header: Option<HeaderView>,
    stats: Option<StatsView>,
    origin: Option<DataOrigin>,
    theme: Theme,
}

impl TerminalDisplay {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn header(&self) -> Option<&HeaderView> {
        self.header.as_ref()
    }

    pub fn stats(&self) -> Option<&StatsView> {
        self.stats.as_ref()
    }

    pub fn origin(&self) -> Option<DataOrigin> {
        self.origin
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Header rows then the stat row
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let paint = |fg: Color| {
            if self.color {
                Style::default().fg(fg)
            } else {
                Style::default()
            }
        };

        if let Some(header) = &self.header {
            lines.push(Line::styled(
                header.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            let mut spans = vec![Span::raw(format!("{} · {}", header.date_range, header.source_line))];
            if self.origin == Some(DataOrigin::Fallback) {
                spans.push(Span::styled("  [offline sample data]", paint(FALLBACK_COLOR)));
            }
            lines.push(Line::from(spans));
        }

        if let Some(stats) = &self.stats {
            let change = match stats.change.direction {
                ChangeDirection::Positive => paint(POSITIVE_COLOR),
                ChangeDirection::Negative => paint(NEGATIVE_COLOR),
            };
            lines.push(Line::from(vec![
                Span::raw(format!(
                    "Latest {}   Highest {}   Lowest {}   Average {}   Change ",
                    stats.latest, stats.highest, stats.lowest, stats.average
                )),
                Span::styled(stats.change.text.clone(), change),
            ]));
        }

        lines
    }

    fn border_style(&self) -> Style {
        foreground(Palette::for_theme(self.theme).tick, self.color)
    }
}

impl DisplaySurface for TerminalDisplay {
    fn show_stats(&mut self, stats: &StatsView) {
        self.stats = Some(stats.clone());
    }

    fn show_header(&mut self, header: &HeaderView) {
        self.header = Some(header.clone());
    }

    fn show_origin(&mut self, origin: DataOrigin) {
        self.origin = Some(origin);
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

/// Whole dashboard: header and stats panel, chart panel, status row
pub struct DashboardView<'a> {
    panel: Vec<Line<'static>>,
    chart: &'a [Line<'static>],
    status: Line<'a>,
    border: Style,
}

impl<'a> DashboardView<'a> {
    pub fn new(display: &TerminalDisplay, chart: &'a TerminalChart, status: Line<'a>) -> Self {
        Self {
            panel: display.lines(),
            chart: chart.lines(),
            status,
            border: display.border_style(),
        }
    }

    /// Rows needed to draw without clipping
    pub fn height(&self) -> u16 {
        let rows = self.panel.len() + 2 + self.chart.len().max(1) + 2 + 1;
        rows as u16
    }

    /// Columns needed to draw without clipping
    pub fn width(&self) -> u16 {
        let content = self
            .panel
            .iter()
            .chain(self.chart.iter())
            .map(Line::width)
            .max()
            .unwrap_or(0);
        (content + 2).max(self.status.width()).max(20) as u16
    }

    /// Render at natural size into an off-screen buffer
    pub fn into_buffer(self) -> Buffer {
        let area = Rect::new(0, 0, self.width(), self.height());
        let mut buffer = Buffer::empty(area);
        self.render(area, &mut buffer);
        buffer
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.panel.len() as u16 + 2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(self.panel)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border)
                    .title(" econdash "),
            )
            .render(chunks[0], buf);

        Paragraph::new(self.chart.to_vec())
            .block(Block::default().borders(Borders::ALL).border_style(self.border))
            .render(chunks[1], buf);

        Paragraph::new(self.status).render(chunks[2], buf);
    }
}

/// Print `buffer` row by row, trailing blanks trimmed
///
/// Cells with an RGB foreground are written with crossterm color commands;
/// everything else is plain text.
pub fn write_buffer<W: Write>(buffer: &Buffer, out: &mut W) -> io::Result<()> {
    let width = buffer.area.width as usize;
    if width == 0 {
        return Ok(());
    }

    for row in buffer.content.chunks(width) {
        let end = row
            .iter()
            .rposition(|cell| cell.symbol() != " ")
            .map_or(0, |i| i + 1);
        for cell in &row[..end] {
            match cell.fg {
                Color::Rgb(r, g, b) => queue!(
                    out,
                    SetForegroundColor(TermColor::Rgb { r, g, b }),
                    Print(cell.symbol()),
                    ResetColor
                )?,
                _ => queue!(out, Print(cell.symbol()))?,
            }
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()
}

/// What a key press in `watch` asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchAction {
    Quit,
    /// Move through the catalog by this many entries
    CycleIndicator(isize),
    /// Zero-based catalog position
    PickIndicator(usize),
    CycleRange,
    CycleMode,
    Refresh,
    ToggleTheme,
    Ignore,
}

/// Key bindings for `watch`
pub fn watch_action(key: KeyEvent) -> WatchAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => WatchAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => WatchAction::Quit,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('i') => WatchAction::CycleIndicator(1),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('I') => WatchAction::CycleIndicator(-1),
        KeyCode::Char(c @ '1'..='9') => WatchAction::PickIndicator(c as usize - '1' as usize),
        KeyCode::Char('r') => WatchAction::CycleRange,
        KeyCode::Char('m') => WatchAction::CycleMode,
        KeyCode::Char('R') | KeyCode::F(5) => WatchAction::Refresh,
        KeyCode::Char('t') => WatchAction::ToggleTheme,
        _ => WatchAction::Ignore,
    }
}

/// Entry `step` places from `current`, wrapping; an unlisted `current` starts at the first entry
pub fn cycle<T: PartialEq + Clone>(options: &[T], current: &T, step: isize) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len() as isize;
    let index = match options.iter().position(|o| o == current) {
        Some(i) => (i as isize + step).rem_euclid(len),
        None => 0,
    };
    options.get(index as usize).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::AxisBounds;
    use crate::dashboard::ChangeView;

    fn config(geometry: Geometry, fill: bool) -> ChartConfig {
        ChartConfig {
            geometry,
            fill,
            labels: vec!["Q1".to_string(), "Q2".to_string(), "Q3".to_string()],
            values: vec![Some(0.0), None, Some(10.0)],
            dataset_label: "GDP Growth Rate (%)".to_string(),
            y_axis: AxisBounds {
                min: Some(0.0),
                max: Some(10.0),
            },
            ..ChartConfig::default()
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn display() -> TerminalDisplay {
        let mut display = TerminalDisplay::new(false);
        display.show_header(&HeaderView {
            title: "GDP Growth Rate".to_string(),
            date_range: "Last 1 Year".to_string(),
            source_line: "Quarterly • RBI".to_string(),
        });
        display.show_stats(&StatsView {
            latest: "6%".to_string(),
            highest: "13.1%".to_string(),
            lowest: "4.5%".to_string(),
            average: "7.45%".to_string(),
            change: ChangeView {
                text: "-7.10%".to_string(),
                direction: ChangeDirection::Negative,
            },
        });
        display
    }

    fn printed(view: DashboardView) -> String {
        let mut out = Vec::new();
        write_buffer(&view.into_buffer(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_bar_rows() {
        let lines = chart_lines(&config(Geometry::Bar, false), 10, false);
        let rows: Vec<String> = lines.iter().map(text).collect();

        assert_eq!(rows[0], "GDP Growth Rate (%)");
        assert_eq!(rows[1], "Q1 │█          0.00%");
        assert_eq!(rows[2], "Q2 │(no data)");
        assert_eq!(rows[3], "Q3 │██████████ 10.00%");
        assert_eq!(rows[4], "   └ 0.00% … 10.00%");
    }

    #[test]
    fn test_render_area_and_scatter_marks() {
        let area = chart_lines(&config(Geometry::Line, true), 4, false);
        assert!(text(&area[3]).starts_with("Q3 │░░░░●"));

        let scatter = chart_lines(&config(Geometry::Scatter, false), 4, false);
        assert!(text(&scatter[3]).starts_with("Q3 │    ·"));
    }

    #[test]
    fn test_render_empty_chart() {
        let lines = chart_lines(&ChartConfig::default(), 10, false);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "(no data)");
    }

    #[test]
    fn test_all_negative_series_still_plots() {
        let mut config = config(Geometry::Bar, false);
        config.values = vec![Some(-5.0), None, Some(-3.0)];
        config.y_axis = AxisBounds {
            min: Some(0.0),
            max: Some(-2.8),
        };

        let lines = chart_lines(&config, 10, false);
        assert!(text(&lines[1]).starts_with("Q1 │█ "));
        assert!(text(&lines[3]).starts_with("Q3 │█████████ "));
    }

    #[test]
    fn test_series_colors_follow_palette() {
        let lines = chart_lines(&config(Geometry::Bar, false), 10, true);
        assert_eq!(lines[1].spans[1].style.fg, Some(Color::Rgb(255, 140, 66)));
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Rgb(0xa0, 0xa9, 0xc5)));

        let plain = chart_lines(&config(Geometry::Bar, false), 10, false);
        assert_eq!(plain[1].spans[1].style.fg, None);
    }

    #[test]
    fn test_display_lines() {
        let mut display = display();
        display.show_origin(DataOrigin::Fallback);

        let rows: Vec<String> = display.lines().iter().map(text).collect();
        assert_eq!(rows[0], "GDP Growth Rate");
        assert_eq!(rows[1], "Last 1 Year · Quarterly • RBI  [offline sample data]");
        assert!(rows[2].ends_with("Average 7.45%   Change -7.10%"));
    }

    #[test]
    fn test_change_color() {
        let mut display = display();
        display.color = true;
        let lines = display.lines();
        let change = lines[2].spans.last().unwrap();
        assert_eq!(change.content, "-7.10%");
        assert_eq!(change.style.fg, Some(NEGATIVE_COLOR));
    }

    #[test]
    fn test_dashboard_view_plain_output() {
        let mut chart = TerminalChart::new(10, false);
        chart.redraw(&config(Geometry::Bar, false), Redraw::Immediate);
        let display = display();

        let out = printed(DashboardView::new(&display, &chart, Line::raw("1Y · bar")));
        let rows: Vec<&str> = out.lines().collect();

        assert!(rows[0].starts_with("┌ econdash "));
        assert_eq!(rows[1].trim_end_matches(['│', ' ']), "│GDP Growth Rate");
        assert!(out.contains("│Q3 │██████████ 10.00%"));
        assert_eq!(rows.last(), Some(&"1Y · bar"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_dashboard_view_colored_output() {
        let mut chart = TerminalChart::new(10, true);
        chart.redraw(&config(Geometry::Bar, false), Redraw::Immediate);
        let display = TerminalDisplay::new(true);

        let out = printed(DashboardView::new(&display, &chart, Line::raw("")));
        assert!(out.contains("\x1b[38;2;255;140;66m█"));
    }

    #[test]
    fn test_watch_bindings() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(watch_action(key(KeyCode::Char('q'))), WatchAction::Quit);
        assert_eq!(
            watch_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            WatchAction::Quit
        );
        assert_eq!(watch_action(key(KeyCode::Tab)), WatchAction::CycleIndicator(1));
        assert_eq!(watch_action(key(KeyCode::BackTab)), WatchAction::CycleIndicator(-1));
        assert_eq!(watch_action(key(KeyCode::Char('3'))), WatchAction::PickIndicator(2));
        assert_eq!(watch_action(key(KeyCode::Char('t'))), WatchAction::ToggleTheme);
        assert_eq!(watch_action(key(KeyCode::F(5))), WatchAction::Refresh);
        assert_eq!(watch_action(key(KeyCode::Char('x'))), WatchAction::Ignore);
    }

    #[test]
    fn test_cycle() {
        let ids = ["gdp", "cpi", "gst"];
        assert_eq!(cycle(&ids, &"gdp", 1), Some("cpi"));
        assert_eq!(cycle(&ids, &"gst", 1), Some("gdp"));
        assert_eq!(cycle(&ids, &"gdp", -1), Some("gst"));
        assert_eq!(cycle(&ids, &"steel", 1), Some("gdp"));
        assert_eq!(cycle::<&str>(&[], &"gdp", 1), None);
    }
}
