use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use news_cli::api::NewsClient;
use news_cli::app::{App, InputMode, TimeBucket};
use news_cli::config::Config;
use news_cli::{logging, ui};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "news-cli")]
#[command(about = "Terminal UI for browsing news by publication date", long_about = None)]
struct Cli {
    /// Date to open with (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// News endpoint, overrides the config file
    #[arg(short, long)]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Fetch a failed date again when it is re-selected
    #[arg(long)]
    retry_on_failure: bool,
}

// A panic on the UI thread restores the terminal before the default hook
// prints it. Panics on runtime workers are caught by the fetch task and
// only logged, so the screen stays intact.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if std::thread::current().name() != Some("main") {
            tracing::error!(panic = %info, "panic on background thread");
            return;
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.url {
        config.base_url = url;
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout_secs = secs;
    }
    if cli.retry_on_failure {
        config.retry_on_failure = true;
    }
    config.normalize();

    let log_path = logging::init(&config)?;
    tracing::info!(base_url = %config.base_url, log = %log_path.display(), "starting news-cli");

    let client = Arc::new(NewsClient::from_config(&config)?);
    let mut app = App::new(config, client);
    let start = cli.date.unwrap_or(app.today);
    let ticket = app.select_date(start);
    app.dispatch(ticket);

    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.shutdown();

    if let Err(e) = result {
        tracing::error!(error = %e, "event loop failed");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        app.drain_fetch_outcomes();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(tick_rate)? {
            // Let spawned fetches make progress between key presses.
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('?') => app.show_help(),
                KeyCode::Char('g') => app.start_date_input(),
                KeyCode::Left | KeyCode::Char('h') => {
                    let ticket = app.shift_date(-1);
                    app.dispatch(ticket);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    let ticket = app.shift_date(1);
                    app.dispatch(ticket);
                }
                KeyCode::Char('t') => {
                    let ticket = app.select_today();
                    app.dispatch(ticket);
                }
                KeyCode::Char('1') | KeyCode::Char('m') => {
                    let ticket = app.select_bucket(TimeBucket::Morning);
                    app.dispatch(ticket);
                }
                KeyCode::Char('2') | KeyCode::Char('a') => {
                    let ticket = app.select_bucket(TimeBucket::Afternoon);
                    app.dispatch(ticket);
                }
                KeyCode::Char('3') | KeyCode::Char('e') => {
                    let ticket = app.select_bucket(TimeBucket::Evening);
                    app.dispatch(ticket);
                }
                KeyCode::Char('0') | KeyCode::Char('c') => app.clear_bucket(),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('n') => app.advance(),
                KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('p') => app.retreat(),
                KeyCode::Char('r') => {
                    let ticket = app.retry_selected_date();
                    app.dispatch(ticket);
                }
                _ => {}
            },
            InputMode::DateInput => match key.code {
                KeyCode::Enter => {
                    let ticket = app.confirm_date_input();
                    app.dispatch(ticket);
                }
                KeyCode::Esc => app.cancel_input(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    if (c.is_ascii_digit() || c == '-') && app.input_buffer.len() < 10 {
                        app.input_buffer.push(c);
                    }
                }
                _ => {}
            },
            InputMode::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                _ => {}
            },
        }
    }
}
