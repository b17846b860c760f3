//! econdash CLI
//!
//! Terminal front-end for the economic indicator dashboard:
//! - Render an indicator once
//! - Full-screen watch mode driven by key presses
//! - Theme, API status and indicator listing

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, text::Line, Terminal};

use econdash::catalog::{IndicatorCatalog, TimeRange};
use econdash::chart::{ChartMode, ChartPresenter};
use econdash::config::{generate_default_config, Config};
use econdash::dashboard::{DashboardController, SelectionState};
use econdash::series::HttpDataClient;
use econdash::terminal::{
    cycle, watch_action, write_buffer, DashboardView, TerminalChart, TerminalDisplay, WatchAction,
    DEFAULT_PLOT_WIDTH,
};
use econdash::theme::{FileThemeStore, ThemeManager};

type Dashboard = DashboardController<HttpDataClient, TerminalChart, TerminalDisplay>;

#[derive(Parser)]
#[command(name = "econdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Economic indicator dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Indicator API base URL (overrides config and ECONDASH_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: $CONFIG_DIR/econdash/config.toml, ./econdash.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(clap::Args, Default)]
pub struct SelectionArgs {
    /// Indicator id (gdp, cpi, gst, unemployment, forex, iip)
    #[arg(short, long)]
    pub indicator: Option<String>,
    /// Time range (3M, 1Y, 2Y, 5Y)
    #[arg(short, long)]
    pub range: Option<String>,
    /// Chart type (line, bar, area, scatter)
    #[arg(short, long)]
    pub mode: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard once (default)
    Show {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Full-screen dashboard driven by key presses
    Watch {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show or toggle the persisted theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Check that the indicator API is reachable
    Status,

    /// List known indicators
    Indicators,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Flip between light and dark
    Toggle,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    econdash::logging::init(&config.logging);
    tracing::debug!(api = %config.api.base_url, "econdash v{}", env!("CARGO_PKG_VERSION"));

    let color = !cli.no_color && io::stdout().is_terminal();

    match cli.command.unwrap_or(Commands::Show {
        selection: SelectionArgs::default(),
    }) {
        Commands::Show { selection } => {
            let (mut dashboard, _theme) = build_dashboard(&config, &selection, color)?;
            dashboard.reload().await;
            print_dashboard(&dashboard)?;
        }

        Commands::Watch { selection } => {
            let (mut dashboard, mut theme) = build_dashboard(&config, &selection, color)?;
            dashboard.reload().await;

            enable_raw_mode()?;
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

            let result = run_watch(&mut terminal, &mut dashboard, &mut theme).await;

            disable_raw_mode()?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            terminal.show_cursor()?;
            result?;
        }

        Commands::Theme { action } => {
            let store = FileThemeStore::new(config.theme.state_path());
            let mut manager = ThemeManager::new(store);
            let mut preview = ChartPresenter::new(TerminalChart::new(DEFAULT_PLOT_WIDTH, color));
            manager.initialize(&mut preview);

            if let Some(ThemeAction::Toggle) = action {
                manager.toggle(&mut preview);
            }
            println!(
                "Theme: {} ({})",
                manager.theme(),
                manager.store().path().display()
            );
        }

        Commands::Status => {
            let client = HttpDataClient::new(config.api.client_config())?;
            match client.health_check().await {
                Ok(()) => {
                    println!("econdash v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("API Status: ok ({})", config.api.base_url);
                }
                Err(e) => {
                    eprintln!("Cannot reach indicator API at {}", config.api.base_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("The dashboard will show built-in sample data until it is reachable.");
                    std::process::exit(1);
                }
            }
        }

        Commands::Indicators => {
            println!("{:<14} {:<32} {:<14} {}", "ID", "Name", "Unit", "Source");
            println!("{}", "-".repeat(68));
            for descriptor in IndicatorCatalog::new().all() {
                println!(
                    "{:<14} {:<32} {:<14} {}",
                    descriptor.id, descriptor.display_name, descriptor.unit, descriptor.source_label
                );
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Controller plus the theme manager already applied to it
fn build_dashboard(
    config: &Config,
    args: &SelectionArgs,
    color: bool,
) -> anyhow::Result<(Dashboard, ThemeManager<FileThemeStore>)> {
    let mut selection: SelectionState = config.dashboard.selection();
    if let Some(indicator) = &args.indicator {
        selection.indicator_id = indicator.clone();
    }
    if let Some(range) = &args.range {
        selection.time_range = TimeRange::parse(range);
    }
    if let Some(mode) = &args.mode {
        selection.chart_mode = ChartMode::parse(mode);
    }

    let client = HttpDataClient::new(config.api.client_config())
        .context("Failed to create indicator API client")?;

    let mut dashboard = DashboardController::new(
        client,
        TerminalChart::new(DEFAULT_PLOT_WIDTH, color),
        TerminalDisplay::new(color),
        selection,
    );

    let mut theme = ThemeManager::new(FileThemeStore::new(config.theme.state_path()));
    theme.initialize(&mut dashboard);

    Ok((dashboard, theme))
}

const WATCH_KEYS: &str = "[i/Tab] indicator  [1-6] pick  [r] range  [m] mode  [R] refresh  [t] theme  [q] quit";

async fn run_watch<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &mut Dashboard,
    theme: &mut ThemeManager<FileThemeStore>,
) -> anyhow::Result<()> {
    let ids: Vec<&str> = IndicatorCatalog::new().all().iter().map(|d| d.id).collect();

    loop {
        terminal.draw(|frame| {
            let view = DashboardView::new(
                dashboard.display(),
                dashboard.presenter().surface(),
                Line::from(format!("{}   {}", status_text(dashboard), WATCH_KEYS)),
            );
            frame.render_widget(view, frame.area());
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match watch_action(key) {
            WatchAction::Quit => return Ok(()),
            WatchAction::CycleIndicator(step) => {
                let current = dashboard.selection().indicator_id.clone();
                if let Some(id) = cycle(&ids, &current.as_str(), step) {
                    dashboard.select_indicator(id).await;
                }
            }
            WatchAction::PickIndicator(index) => {
                if let Some(&id) = ids.get(index) {
                    dashboard.select_indicator(id).await;
                }
            }
            WatchAction::CycleRange => {
                let current = dashboard.selection().time_range.clone();
                if let Some(range) = cycle(&TimeRange::KNOWN, &current, 1) {
                    dashboard.select_time_range(range).await;
                }
            }
            WatchAction::CycleMode => {
                let current = dashboard.selection().chart_mode;
                if let Some(mode) = cycle(&ChartMode::ALL, &current, 1) {
                    dashboard.select_chart_mode(mode);
                }
            }
            WatchAction::Refresh => {
                dashboard.reload().await;
            }
            WatchAction::ToggleTheme => {
                theme.toggle(dashboard);
            }
            WatchAction::Ignore => {}
        }
    }
}

fn status_text(dashboard: &Dashboard) -> String {
    format!(
        "{} · {} · {}",
        dashboard.selection().time_range,
        dashboard.selection().chart_mode,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

fn print_dashboard(dashboard: &Dashboard) -> io::Result<()> {
    let view = DashboardView::new(
        dashboard.display(),
        dashboard.presenter().surface(),
        Line::from(status_text(dashboard)),
    );
    write_buffer(&view.into_buffer(), &mut io::stdout().lock())
}
