use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;

use crate::api::{FetchClient, FetchError, NewsItem};

use super::{App, FetchTicket};

/// Result of one fetch, sent back to the control thread.
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<Vec<NewsItem>, FetchError>,
}

// Always yields an outcome, even if the client panics, so the pending
// entry for the date gets resolved.
async fn run_fetch(client: Arc<dyn FetchClient>, ticket: FetchTicket, timeout: Duration) -> FetchOutcome {
    let fetch = async {
        match tokio::time::timeout(timeout, client.fetch_news_for_date(ticket.date)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(timeout)),
        }
    };
    let result = match AssertUnwindSafe(fetch).catch_unwind().await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(date = %ticket.date, request_id = ticket.request_id, "fetch task panicked");
            Err(FetchError::Aborted)
        }
    };
    FetchOutcome { ticket, result }
}

impl App {
    /// Run a fetch on a background task. The outcome arrives through
    /// [`App::drain_fetch_outcomes`] or [`App::next_fetch_outcome`].
    pub fn spawn_fetch(&mut self, ticket: FetchTicket) {
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        let timeout = self.config.request_timeout();
        let handle = tokio::spawn(async move {
            let outcome = run_fetch(client, ticket, timeout).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(outcome);
        });
        self.in_flight.insert(ticket.request_id, (ticket, handle));
    }

    pub fn dispatch(&mut self, ticket: Option<FetchTicket>) {
        if let Some(ticket) = ticket {
            self.spawn_fetch(ticket);
        }
    }

    /// Run a fetch on the current task and apply its result.
    pub async fn execute_fetch(&mut self, ticket: FetchTicket) {
        let outcome = run_fetch(Arc::clone(&self.client), ticket, self.config.request_timeout()).await;
        self.apply_fetch_outcome(outcome);
    }

    /// Apply every outcome that has already arrived. Returns how many were
    /// processed.
    pub fn drain_fetch_outcomes(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_fetch_outcome(outcome);
            processed += 1;
        }
        processed
    }

    /// Wait for the next spawned fetch to finish and apply it. Returns false
    /// if nothing is in flight.
    pub async fn next_fetch_outcome(&mut self) -> bool {
        if self.in_flight.is_empty() {
            return false;
        }
        match self.outcome_rx.recv().await {
            Some(outcome) => {
                self.apply_fetch_outcome(outcome);
                true
            }
            None => false,
        }
    }

    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        let FetchOutcome { ticket, result } = outcome;
        self.in_flight.remove(&ticket.request_id);

        let failed = result.is_err();
        if !self.cache.resolve(ticket, result) {
            return;
        }

        if self.selected_date != Some(ticket.date) {
            tracing::debug!(date = %ticket.date, "result stored for a date that is no longer selected");
            return;
        }
        if failed {
            self.status_message = Some(format!(
                "Could not load news for {}  [r] Retry",
                ticket.date.format("%d-%m-%Y")
            ));
        }
        self.recompute_view(ticket.date);
    }

    /// Abort every running fetch and forget its pending entry.
    pub fn shutdown(&mut self) {
        for (_, (ticket, handle)) in self.in_flight.drain() {
            handle.abort();
            self.cache.cancel(ticket);
            tracing::debug!(date = %ticket.date, "fetch aborted");
        }
    }
}
