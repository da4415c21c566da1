#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use futures::FutureExt;
use futures::future::BoxFuture;
use news_cli::api::{FetchClient, FetchError, NewsItem};
use news_cli::app::App;
use news_cli::config::Config;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap()
}

pub fn make_news_item(headline: &str, time: NaiveDateTime) -> NewsItem {
    NewsItem {
        headline: headline.to_string(),
        description: format!("{} description", headline),
        publication_time: time,
    }
}

/// The day every test app treats as "today".
pub fn test_today() -> NaiveDate {
    date(2024, 8, 10)
}

#[derive(Clone)]
pub enum Scripted {
    Items(Vec<NewsItem>),
    Fail,
    /// Never answers within any reasonable timeout.
    Hang,
    /// Panics while the fetch is being polled.
    Panic,
}

/// Scripted [`FetchClient`] that counts calls per date. Unscripted dates
/// answer with an empty list.
#[derive(Default)]
pub struct FakeClient {
    responses: Mutex<HashMap<NaiveDate, Scripted>>,
    calls: Mutex<HashMap<NaiveDate, usize>>,
}

impl FakeClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script(&self, date: NaiveDate, response: Scripted) {
        self.responses.lock().unwrap().insert(date, response);
    }

    pub fn calls(&self, date: NaiveDate) -> usize {
        self.calls.lock().unwrap().get(&date).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

impl FetchClient for FakeClient {
    fn fetch_news_for_date(&self, date: NaiveDate) -> BoxFuture<'_, Result<Vec<NewsItem>, FetchError>> {
        *self.calls.lock().unwrap().entry(date).or_insert(0) += 1;
        let response = self
            .responses
            .lock()
            .unwrap()
            .get(&date)
            .cloned()
            .unwrap_or(Scripted::Items(Vec::new()));
        async move {
            match response {
                Scripted::Items(items) => Ok(items),
                Scripted::Fail => Err(decode_error()),
                Scripted::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(Vec::new())
                }
                Scripted::Panic => panic!("scripted client panic"),
            }
        }
        .boxed()
    }
}

pub fn decode_error() -> FetchError {
    FetchError::Decode(serde_json::from_str::<Vec<NewsItem>>("not json").unwrap_err())
}

// App wired to a fake client, with a fixed "today" and no file I/O.
pub fn test_app(client: Arc<FakeClient>) -> App {
    App::with_today(Config::test_config(), client, test_today())
}

pub fn test_app_with(config: Config, client: Arc<FakeClient>) -> App {
    App::with_today(config, client, test_today())
}

/// Three items on 2024-08-01 at 07:00, 14:00 and 20:00.
pub fn three_item_day() -> Vec<NewsItem> {
    let day = date(2024, 8, 1);
    vec![
        make_news_item("Morning brief", at(day, 7, 0)),
        make_news_item("Afternoon update", at(day, 14, 0)),
        make_news_item("Evening wrap", at(day, 20, 0)),
    ]
}
