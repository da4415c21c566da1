use crate::api::{FetchError, NewsItem};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Fetch status of one requested date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    Pending { request_id: u64 },
    Resolved { count: usize },
    Failed { reason: String },
}

/// Permission to fetch one date. The id ties the eventual result back to
/// the pending entry it was issued for. Dropping a ticket without running
/// it leaves the date pending.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub date: NaiveDate,
    pub request_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensure {
    /// The date is settled; use the pool as-is.
    Cached,
    /// A fetch for the date is already running.
    InFlight,
    /// The caller must run this fetch and hand the result to [`DateCache::resolve`].
    Fetch(FetchTicket),
}

/// Which dates have been requested, plus every item fetched so far.
///
/// The pool is append-only and kept in fetch order for the whole session.
#[derive(Debug, Default)]
pub struct DateCache {
    entries: HashMap<NaiveDate, CacheEntry>,
    pool: Vec<NewsItem>,
    retry_on_failure: bool,
    next_request_id: u64,
}

impl DateCache {
    pub fn new(retry_on_failure: bool) -> Self {
        Self {
            retry_on_failure,
            ..Self::default()
        }
    }

    pub fn retry_on_failure(&self) -> bool {
        self.retry_on_failure
    }

    #[must_use]
    pub fn ensure_date(&mut self, date: NaiveDate) -> Ensure {
        match self.entries.get(&date) {
            None => Ensure::Fetch(self.issue(date)),
            Some(CacheEntry::Pending { .. }) => Ensure::InFlight,
            Some(CacheEntry::Failed { .. }) if self.retry_on_failure => Ensure::Fetch(self.issue(date)),
            Some(_) => Ensure::Cached,
        }
    }

    /// Explicit retry of a failed date. Pending and resolved dates are left
    /// alone, since re-fetching them would duplicate items in the pool.
    #[must_use]
    pub fn retry_failed(&mut self, date: NaiveDate) -> Option<FetchTicket> {
        match self.entries.get(&date) {
            Some(CacheEntry::Failed { .. }) => Some(self.issue(date)),
            _ => None,
        }
    }

    /// Record the result of a fetch. Returns false (and changes nothing) if
    /// the ticket no longer matches the pending entry for its date.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Vec<NewsItem>, FetchError>) -> bool {
        let FetchTicket { date, request_id } = ticket;
        match self.entries.get(&date) {
            Some(CacheEntry::Pending { request_id: pending }) if *pending == request_id => {}
            other => {
                tracing::debug!(%date, request_id, entry = ?other, "discarding stale fetch result");
                return false;
            }
        }

        let entry = match result {
            Ok(items) => {
                let count = items.len();
                self.pool.extend(items);
                tracing::info!(%date, count, pool = self.pool.len(), "news cached");
                CacheEntry::Resolved { count }
            }
            Err(e) => {
                tracing::warn!(%date, error = %e, "news fetch failed");
                CacheEntry::Failed { reason: e.to_string() }
            }
        };
        self.entries.insert(date, entry);
        true
    }

    /// Forget a pending fetch whose task was abandoned, so the date can be
    /// requested again.
    pub fn cancel(&mut self, ticket: FetchTicket) -> bool {
        if let Some(CacheEntry::Pending { request_id }) = self.entries.get(&ticket.date) {
            if *request_id == ticket.request_id {
                self.entries.remove(&ticket.date);
                return true;
            }
        }
        false
    }

    pub fn pool(&self) -> &[NewsItem] {
        &self.pool
    }

    pub fn entry(&self, date: NaiveDate) -> Option<&CacheEntry> {
        self.entries.get(&date)
    }

    pub fn is_requested(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn is_pending(&self, date: NaiveDate) -> bool {
        matches!(self.entries.get(&date), Some(CacheEntry::Pending { .. }))
    }

    pub fn requested_count(&self) -> usize {
        self.entries.len()
    }

    pub fn requested_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.entries.keys().copied().collect();
        dates.sort();
        dates
    }

    fn issue(&mut self, date: NaiveDate) -> FetchTicket {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.entries.insert(date, CacheEntry::Pending { request_id });
        tracing::debug!(%date, request_id, "fetch issued");
        FetchTicket { date, request_id }
    }
}
