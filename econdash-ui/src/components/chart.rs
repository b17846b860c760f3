//! Chart Component
//!
//! Indicator chart drawn on an HTML5 Canvas from the core [`ChartConfig`].

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use econdash::chart::{ChartConfig, ChartSurface, Geometry, Redraw};

use crate::state::global::DashboardState;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 400;

/// Horizontal grid lines (and y tick labels) minus one
const Y_TICKS: usize = 5;

const ANIMATION_STEPS: u32 = 20;
const ANIMATION_FRAME_MS: u32 = 16;

/// Bar width as a share of the slot
const BAR_WIDTH_RATIO: f64 = 0.6;

/// A configuration handed to the surface, with how to transition to it
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub config: ChartConfig,
    pub redraw: Redraw,
}

/// Chart surface that publishes every redraw into a signal
///
/// The [`Chart`] component watches the signal and paints the canvas.
#[derive(Clone, Copy)]
pub struct SignalChart {
    frame: RwSignal<Option<ChartFrame>>,
}

impl SignalChart {
    pub fn new() -> Self {
        Self {
            frame: create_rw_signal(None),
        }
    }

    pub fn frame(&self) -> RwSignal<Option<ChartFrame>> {
        self.frame
    }
}

impl ChartSurface for SignalChart {
    fn redraw(&mut self, config: &ChartConfig, redraw: Redraw) {
        self.frame.set(Some(ChartFrame {
            config: config.clone(),
            redraw,
        }));
    }
}

/// Drawing area inside the canvas margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            left: 60.0,
            right: width - 20.0,
            top: 20.0,
            bottom: height - 40.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    fn slot(&self, count: usize) -> f64 {
        self.width() / count.max(1) as f64
    }

    /// Center of the slot for point `index` of `count`
    pub fn x_for(&self, index: usize, count: usize) -> f64 {
        self.left + self.slot(count) * (index as f64 + 0.5)
    }

    /// Canvas y for `value` on an axis spanning `bounds`
    pub fn y_for(&self, value: f64, bounds: (f64, f64)) -> f64 {
        let (lo, hi) = bounds;
        self.bottom - (value - lo) / (hi - lo) * self.height()
    }

    /// Slot under canvas x, if any
    pub fn index_at(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 || x < self.left || x > self.right {
            return None;
        }
        let index = ((x - self.left) / self.slot(count)) as usize;
        Some(index.min(count - 1))
    }
}

/// Indicator chart component
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let frame = state.chart.frame();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let hovered = create_rw_signal(None::<usize>);
    let animation = store_value(0u32);

    // Repaint whenever the presenter redraws
    create_effect(move |_| {
        let Some(current) = frame.get() else {
            return;
        };
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        // A newer frame cancels any running animation
        let token = animation.get_value().wrapping_add(1);
        animation.set_value(token);

        match current.redraw {
            Redraw::Immediate => draw_chart(&canvas, &current.config, 1.0),
            Redraw::Animated => spawn_local(async move {
                for step in 1..=ANIMATION_STEPS {
                    if animation.get_value() != token {
                        return;
                    }
                    draw_chart(&canvas, &current.config, step as f64 / ANIMATION_STEPS as f64);
                    TimeoutFuture::new(ANIMATION_FRAME_MS).await;
                }
            }),
        }
    });

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let count = frame.with_untracked(|f| f.as_ref().map_or(0, |f| f.config.labels.len()));
        let scale = canvas.width() as f64 / canvas.client_width().max(1) as f64;
        let area = PlotArea::for_canvas(canvas.width() as f64, canvas.height() as f64);
        hovered.set(area.index_at(ev.offset_x() as f64 * scale, count));
    };

    let tooltip = move || {
        let index = hovered.get()?;
        frame.with(|f| {
            let config = &f.as_ref()?.config;
            let title = config.labels.get(index)?.clone();
            let body = config.tooltip_label(index)?;
            let area = PlotArea::for_canvas(CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
            let left = area.x_for(index, config.labels.len()) / CANVAS_WIDTH as f64 * 100.0;
            let style = format!(
                "left: {:.1}%; top: 8px; transform: translateX(-50%); background: {}; \
                 padding: {}px; border-radius: {}px;",
                left, config.tooltip.background, config.tooltip.padding, config.tooltip.corner_radius
            );
            let title_style = format!("font-size: {}px;", config.tooltip.title_font_px);
            let body_style = format!("font-size: {}px;", config.tooltip.body_font_px);

            Some(view! {
                <div class="chart-tooltip absolute pointer-events-none text-white" style=style>
                    <div class="font-semibold" style=title_style>{title}</div>
                    <div style=body_style>{body}</div>
                </div>
            })
        })
    };

    view! {
        <div class="relative">
            <canvas
                id="dataChart"
                node_ref=canvas_ref
                width=CANVAS_WIDTH.to_string()
                height=CANVAS_HEIGHT.to_string()
                class="w-full h-64 md:h-96 rounded-lg"
                on:mousemove=on_mousemove
                on:mouseleave=move |_| hovered.set(None)
            />
            {tooltip}
        </div>
    }
}

/// Draw the chart on canvas; `progress` in (0, 1] grows values from the axis floor
fn draw_chart(canvas: &HtmlCanvasElement, config: &ChartConfig, progress: f64) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = PlotArea::for_canvas(width, height);
    let bounds = config.resolved_y_bounds();

    // Clear canvas
    ctx.set_fill_style(&config.background_color.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    draw_axes(&ctx, config, &area, bounds, height);

    if config.labels.is_empty() {
        ctx.set_fill_style(&config.tick_color.into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data for selected range", width / 2.0, height / 2.0);
        return;
    }

    let count = config.labels.len();
    let points: Vec<Option<(f64, f64)>> = config
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let value = value.filter(|v| v.is_finite())?;
            let target = area.y_for(value, bounds);
            Some((area.x_for(i, count), area.bottom - (area.bottom - target) * progress))
        })
        .collect();

    match config.geometry {
        Geometry::Bar => draw_bars(&ctx, config, &area, &points),
        Geometry::Line => {
            for run in present_runs(&points) {
                if config.fill {
                    fill_under(&ctx, config, &area, &run);
                }
                stroke_curve(&ctx, config, &run);
            }
            draw_points(&ctx, config, &points);
        }
        Geometry::Scatter => draw_points(&ctx, config, &points),
    }
}

fn draw_axes(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    area: &PlotArea,
    bounds: (f64, f64),
    height: f64,
) {
    let (lo, hi) = bounds;
    ctx.set_font(&format!("{}px sans-serif", config.tick_font_px));
    ctx.set_line_width(1.0);

    // Horizontal grid lines with y tick labels
    ctx.set_text_align("left");
    for i in 0..=Y_TICKS {
        let value = lo + (hi - lo) * i as f64 / Y_TICKS as f64;
        let y = area.y_for(value, bounds);

        ctx.set_stroke_style(&config.grid_color.into());
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.right, y);
        ctx.stroke();

        ctx.set_fill_style(&config.tick_color.into());
        let _ = ctx.fill_text(&config.format_tick(value), 5.0, y + 4.0);
    }

    // X-axis labels
    ctx.set_text_align("center");
    ctx.set_fill_style(&config.tick_color.into());
    for (i, label) in config.labels.iter().enumerate() {
        let x = area.x_for(i, config.labels.len());
        let _ = ctx.fill_text(label, x, height - 15.0);
    }
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    area: &PlotArea,
    points: &[Option<(f64, f64)>],
) {
    let bar_width = area.width() / points.len().max(1) as f64 * BAR_WIDTH_RATIO;

    ctx.set_line_width(config.style.border_width);
    for (x, y) in points.iter().flatten() {
        let left = x - bar_width / 2.0;
        let bar_height = area.bottom - y;

        ctx.set_fill_style(&config.style.background_color.into());
        ctx.fill_rect(left, *y, bar_width, bar_height);
        ctx.set_stroke_style(&config.style.border_color.into());
        ctx.stroke_rect(left, *y, bar_width, bar_height);
    }
}

/// Consecutive present points; absent values break the line
fn present_runs(points: &[Option<(f64, f64)>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for point in points {
        match point {
            Some(p) => current.push(*p),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Trace a cardinal spline through `run` (tension from the dataset style)
fn trace_curve(ctx: &CanvasRenderingContext2d, tension: f64, run: &[(f64, f64)]) {
    let Some(&(x0, y0)) = run.first() else {
        return;
    };
    ctx.move_to(x0, y0);

    let k = tension / 2.0;
    for i in 0..run.len().saturating_sub(1) {
        let p0 = run[i.saturating_sub(1)];
        let p1 = run[i];
        let p2 = run[i + 1];
        let p3 = run[(i + 2).min(run.len() - 1)];

        let cp1 = (p1.0 + (p2.0 - p0.0) * k, p1.1 + (p2.1 - p0.1) * k);
        let cp2 = (p2.0 - (p3.0 - p1.0) * k, p2.1 - (p3.1 - p1.1) * k);
        ctx.bezier_curve_to(cp1.0, cp1.1, cp2.0, cp2.1, p2.0, p2.1);
    }
}

fn stroke_curve(ctx: &CanvasRenderingContext2d, config: &ChartConfig, run: &[(f64, f64)]) {
    ctx.set_stroke_style(&config.style.border_color.into());
    ctx.set_line_width(config.style.border_width);
    ctx.begin_path();
    trace_curve(ctx, config.style.tension, run);
    ctx.stroke();
}

fn fill_under(ctx: &CanvasRenderingContext2d, config: &ChartConfig, area: &PlotArea, run: &[(f64, f64)]) {
    let (Some(first), Some(last)) = (run.first(), run.last()) else {
        return;
    };

    ctx.set_fill_style(&config.style.background_color.into());
    ctx.begin_path();
    trace_curve(ctx, config.style.tension, run);
    ctx.line_to(last.0, area.bottom);
    ctx.line_to(first.0, area.bottom);
    ctx.close_path();
    ctx.fill();
}

fn draw_points(ctx: &CanvasRenderingContext2d, config: &ChartConfig, points: &[Option<(f64, f64)>]) {
    ctx.set_line_width(config.style.point_border_width);
    for (x, y) in points.iter().flatten() {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, config.style.point_radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.set_fill_style(&config.style.point_background_color.into());
        ctx.fill();
        ctx.set_stroke_style(&config.style.point_border_color.into());
        ctx.stroke();
    }
}
