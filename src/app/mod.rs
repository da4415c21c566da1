mod browse;
pub mod cache;
pub mod cursor;
pub mod display;
mod fetch;
pub mod filter;

pub use cache::{CacheEntry, DateCache, Ensure, FetchTicket};
pub use cursor::{CursorState, NavigationCursor};
pub use display::{ArticleView, DisplayState};
pub use fetch::FetchOutcome;
pub use filter::{CurrentView, TimeBucket, filter_by_bucket, filter_by_bucket_name, filter_by_date};

use crate::api::FetchClient;
use crate::config::Config;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    DateInput, // Typing a YYYY-MM-DD date
    Help,
}

/// Browser state: owns the date cache and the cursor, and turns selection
/// events into fetches and a [`DisplayState`].
pub struct App {
    pub config: Config,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub status_message: Option<String>,
    /// Latest day that may be selected.
    pub today: NaiveDate,
    selected_date: Option<NaiveDate>,
    bucket: Option<TimeBucket>,
    cache: DateCache,
    cursor: NavigationCursor,
    client: Arc<dyn FetchClient>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    in_flight: HashMap<u64, (FetchTicket, JoinHandle<()>)>,
}

impl App {
    pub fn new(config: Config, client: Arc<dyn FetchClient>) -> Self {
        Self::with_today(config, client, Local::now().date_naive())
    }

    pub fn with_today(config: Config, client: Arc<dyn FetchClient>, today: NaiveDate) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let cache = DateCache::new(config.retry_on_failure);
        Self {
            config,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            status_message: None,
            today,
            selected_date: None,
            bucket: None,
            cache,
            cursor: NavigationCursor::default(),
            client,
            outcome_tx,
            outcome_rx,
            in_flight: HashMap::new(),
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn bucket(&self) -> Option<TimeBucket> {
        self.bucket
    }

    pub fn cache(&self) -> &DateCache {
        &self.cache
    }

    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_loading(&self) -> bool {
        self.selected_date.is_some_and(|d| self.cache.is_pending(d))
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn start_date_input(&mut self) {
        self.input_mode = InputMode::DateInput;
        self.input_buffer.clear();
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    /// Parse the typed date and select it. A malformed date only sets the
    /// status line.
    #[must_use]
    pub fn confirm_date_input(&mut self) -> Option<FetchTicket> {
        let text = self.input_buffer.trim().to_string();
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        if text.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
            Ok(date) => self.select_date(date),
            Err(_) => {
                self.status_message = Some(format!("Invalid date '{}', expected YYYY-MM-DD", text));
                None
            }
        }
    }
}
