use chrono::{Days, NaiveDate};

use super::{App, CacheEntry, CurrentView, DisplayState, Ensure, FetchTicket, TimeBucket};
use super::display::ArticleView;

impl App {
    /// Select a date and show its unfiltered view. Returns a ticket when the
    /// date still has to be fetched.
    #[must_use]
    pub fn select_date(&mut self, date: NaiveDate) -> Option<FetchTicket> {
        if date > self.today {
            self.status_message = Some(format!("{} is in the future", date.format("%d-%m-%Y")));
            return None;
        }
        tracing::debug!(%date, "date selected");
        self.selected_date = Some(date);
        self.bucket = None;
        self.status_message = None;
        self.refresh_selection(date)
    }

    /// Narrow the selected date to a time-of-day bucket. Does nothing until a
    /// date has been selected.
    #[must_use]
    pub fn select_bucket(&mut self, bucket: TimeBucket) -> Option<FetchTicket> {
        let date = self.selected_date?;
        tracing::debug!(%date, %bucket, "bucket selected");
        self.bucket = Some(bucket);
        self.status_message = None;
        self.refresh_selection(date)
    }

    pub fn clear_bucket(&mut self) {
        if let Some(date) = self.selected_date {
            self.bucket = None;
            self.status_message = None;
            self.recompute_view(date);
        }
    }

    /// Move the selected date by `days`, starting from today if nothing is
    /// selected yet.
    #[must_use]
    pub fn shift_date(&mut self, days: i64) -> Option<FetchTicket> {
        let from = self.selected_date.unwrap_or(self.today);
        let target = if days >= 0 {
            from.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            from.checked_sub_days(Days::new(days.unsigned_abs()))
        }?;
        self.select_date(target)
    }

    #[must_use]
    pub fn select_today(&mut self) -> Option<FetchTicket> {
        self.select_date(self.today)
    }

    /// Fetch the selected date again after a failure.
    #[must_use]
    pub fn retry_selected_date(&mut self) -> Option<FetchTicket> {
        let date = self.selected_date?;
        let ticket = self.cache.retry_failed(date);
        match ticket {
            Some(_) => {
                tracing::info!(%date, "retrying failed date");
                self.status_message = None;
                self.recompute_view(date);
            }
            None => self.status_message = Some("Nothing to retry".to_string()),
        }
        ticket
    }

    pub fn advance(&mut self) {
        self.cursor.next();
    }

    pub fn retreat(&mut self) {
        self.cursor.previous();
    }

    pub fn display_state(&self) -> DisplayState {
        if let Some(date) = self.selected_date {
            if self.cache.is_pending(date) && self.cursor.current().is_none() {
                return DisplayState::Loading(date);
            }
        }
        match (self.cursor.current(), self.cursor.position()) {
            (Some(item), Some((position, total))) => {
                DisplayState::Article(ArticleView::new(item, position, total))
            }
            _ => DisplayState::NoNews,
        }
    }

    fn refresh_selection(&mut self, date: NaiveDate) -> Option<FetchTicket> {
        let ticket = match self.cache.ensure_date(date) {
            Ensure::Fetch(ticket) => Some(ticket),
            Ensure::InFlight | Ensure::Cached => None,
        };
        if let Some(CacheEntry::Failed { .. }) = self.cache.entry(date) {
            self.status_message = Some(format!("Could not load news for {}  [r] Retry", date.format("%d-%m-%Y")));
        }
        self.recompute_view(date);
        ticket
    }

    pub(super) fn recompute_view(&mut self, date: NaiveDate) {
        let view = CurrentView::compute(self.cache.pool(), date, self.bucket);
        tracing::debug!(%date, bucket = ?self.bucket, items = view.len(), "view recomputed");
        self.cursor.reset(view);
    }
}
