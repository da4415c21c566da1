use super::{FetchClient, FetchError};
use crate::config::Config;
use chrono::{NaiveDate, NaiveDateTime};
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Query-parameter format the news endpoint expects for `date`.
const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";

/// `dd-MM-yyyy HH:mm:ss`
pub const PUBLICATION_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

pub fn format_publication_time(time: &NaiveDateTime) -> String {
    time.format(PUBLICATION_TIME_FORMAT).to_string()
}

/// A single article as served by the news endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "publicationTime")]
    pub publication_time: NaiveDateTime,
}

impl NewsItem {
    pub fn publication_date(&self) -> NaiveDate {
        self.publication_time.date()
    }

    pub fn formatted_publication_time(&self) -> String {
        format_publication_time(&self.publication_time)
    }
}

/// Decode a response body into news items. Unknown fields are ignored.
pub fn decode_news(body: &[u8]) -> Result<Vec<NewsItem>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

pub struct NewsClient {
    client: Client,
    base_url: String,
}

impl NewsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(&config.base_url, config.request_timeout())
    }

    async fn fetch_date(&self, date: NaiveDate) -> Result<Vec<NewsItem>, FetchError> {
        let date_param = date.format(DATE_PARAM_FORMAT).to_string();
        let bytes = self
            .client
            .get(&self.base_url)
            .query(&[("date", date_param.as_str())])
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let items = decode_news(&bytes)?;
        tracing::debug!(%date, count = items.len(), "decoded news response");
        Ok(items)
    }
}

impl FetchClient for NewsClient {
    fn fetch_news_for_date(&self, date: NaiveDate) -> BoxFuture<'_, Result<Vec<NewsItem>, FetchError>> {
        self.fetch_date(date).boxed()
    }
}
