pub mod news;

pub use news::{NewsClient, NewsItem, decode_news, format_publication_time};

use chrono::NaiveDate;
use futures::future::BoxFuture;
use std::time::Duration;
use thiserror::Error;

/// Why a date-scoped fetch produced no items. An empty but successful
/// response is `Ok(vec![])`, not an error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode news response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("fetch aborted unexpectedly")]
    Aborted,
}

/// Retrieves every news item published on a calendar date.
///
/// Returns a boxed future so the controller can hold the client as
/// `Arc<dyn FetchClient>` and move calls onto spawned tasks.
pub trait FetchClient: Send + Sync {
    fn fetch_news_for_date(&self, date: NaiveDate) -> BoxFuture<'_, Result<Vec<NewsItem>, FetchError>>;
}
