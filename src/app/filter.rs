use crate::api::NewsItem;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Time-of-day partition used to narrow a date's articles.
///
/// Hours before 06:00 belong to no bucket; those articles only show up in
/// the unfiltered date view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 3] = [TimeBucket::Morning, TimeBucket::Afternoon, TimeBucket::Evening];

    /// Bucket for an hour of the day: morning [6,12), afternoon [12,18),
    /// evening [18,24).
    pub fn for_hour(hour: u32) -> Option<TimeBucket> {
        match hour {
            6..=11 => Some(TimeBucket::Morning),
            12..=17 => Some(TimeBucket::Afternoon),
            18..=23 => Some(TimeBucket::Evening),
            _ => None,
        }
    }

    pub fn of(time: &NaiveDateTime) -> Option<TimeBucket> {
        Self::for_hour(time.hour())
    }

    pub fn contains(&self, time: &NaiveDateTime) -> bool {
        Self::of(time) == Some(*self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::Morning => "Morning",
            TimeBucket::Afternoon => "Afternoon",
            TimeBucket::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time bucket: {0:?}")]
pub struct UnknownBucket(pub String);

impl FromStr for TimeBucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeBucket::Morning),
            "afternoon" => Ok(TimeBucket::Afternoon),
            "evening" => Ok(TimeBucket::Evening),
            _ => Err(UnknownBucket(s.to_string())),
        }
    }
}

pub fn filter_by_date(pool: &[NewsItem], date: NaiveDate) -> Vec<&NewsItem> {
    pool.iter().filter(|item| item.publication_date() == date).collect()
}

pub fn filter_by_bucket<'a>(items: &[&'a NewsItem], bucket: TimeBucket) -> Vec<&'a NewsItem> {
    items
        .iter()
        .copied()
        .filter(|item| bucket.contains(&item.publication_time))
        .collect()
}

/// Like [`filter_by_bucket`], but for a bucket named by the caller.
/// An unrecognized name selects nothing.
pub fn filter_by_bucket_name<'a>(items: &[&'a NewsItem], name: &str) -> Vec<&'a NewsItem> {
    match name.parse::<TimeBucket>() {
        Ok(bucket) => filter_by_bucket(items, bucket),
        Err(e) => {
            tracing::debug!("{e}; selecting nothing");
            Vec::new()
        }
    }
}

/// The ordered articles matching the active date and optional bucket.
///
/// Items keep the order in which they were added to the pool, which is fetch
/// order. Nothing here sorts by publication time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentView {
    items: Vec<NewsItem>,
}

impl CurrentView {
    pub fn compute(pool: &[NewsItem], date: NaiveDate, bucket: Option<TimeBucket>) -> Self {
        let by_date = filter_by_date(pool, date);
        let selected = match bucket {
            Some(bucket) => filter_by_bucket(&by_date, bucket),
            None => by_date,
        };
        Self {
            items: selected.into_iter().cloned().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NewsItem> {
        self.items.get(index)
    }
}

impl From<Vec<NewsItem>> for CurrentView {
    fn from(items: Vec<NewsItem>) -> Self {
        Self { items }
    }
}
