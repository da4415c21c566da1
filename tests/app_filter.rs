mod common;

use common::{at, date, make_news_item};
use news_cli::app::{CurrentView, TimeBucket, filter_by_bucket, filter_by_bucket_name, filter_by_date};

fn headlines(items: &[&news_cli::api::NewsItem]) -> Vec<String> {
    items.iter().map(|i| i.headline.clone()).collect()
}

// --- TimeBucket ---

#[test]
fn test_bucket_hour_boundaries() {
    assert_eq!(TimeBucket::for_hour(5), None);
    assert_eq!(TimeBucket::for_hour(6), Some(TimeBucket::Morning));
    assert_eq!(TimeBucket::for_hour(11), Some(TimeBucket::Morning));
    assert_eq!(TimeBucket::for_hour(12), Some(TimeBucket::Afternoon));
    assert_eq!(TimeBucket::for_hour(17), Some(TimeBucket::Afternoon));
    assert_eq!(TimeBucket::for_hour(18), Some(TimeBucket::Evening));
    assert_eq!(TimeBucket::for_hour(23), Some(TimeBucket::Evening));
    assert_eq!(TimeBucket::for_hour(0), None);
}

#[test]
fn test_bucket_parse_case_insensitive() {
    assert_eq!("Morning".parse::<TimeBucket>(), Ok(TimeBucket::Morning));
    assert_eq!(" afternoon ".parse::<TimeBucket>(), Ok(TimeBucket::Afternoon));
    assert_eq!("EVENING".parse::<TimeBucket>(), Ok(TimeBucket::Evening));
    assert!("night".parse::<TimeBucket>().is_err());
}

// --- filter_by_date ---

#[test]
fn test_filter_by_date_keeps_only_matching_day() {
    let d1 = date(2024, 8, 1);
    let d2 = date(2024, 8, 2);
    let pool = vec![
        make_news_item("a", at(d1, 9, 0)),
        make_news_item("b", at(d2, 9, 0)),
        make_news_item("c", at(d1, 23, 59)),
    ];
    let filtered = filter_by_date(&pool, d1);
    assert_eq!(headlines(&filtered), vec!["a", "c"]);
    assert!(filtered.iter().all(|i| i.publication_date() == d1));
}

#[test]
fn test_filter_by_date_empty_pool() {
    assert!(filter_by_date(&[], date(2024, 8, 1)).is_empty());
}

#[test]
fn test_filter_by_date_preserves_insertion_order() {
    let d = date(2024, 8, 1);
    let pool = vec![
        make_news_item("late", at(d, 22, 0)),
        make_news_item("early", at(d, 1, 0)),
        make_news_item("noon", at(d, 12, 0)),
    ];
    assert_eq!(headlines(&filter_by_date(&pool, d)), vec!["late", "early", "noon"]);
}

// --- filter_by_bucket ---

#[test]
fn test_buckets_partition_a_day() {
    let d = date(2024, 8, 1);
    let pool: Vec<_> = (0..24)
        .map(|h| make_news_item(&format!("h{}", h), at(d, h, 30)))
        .collect();
    let by_date = filter_by_date(&pool, d);

    let morning = filter_by_bucket(&by_date, TimeBucket::Morning);
    let afternoon = filter_by_bucket(&by_date, TimeBucket::Afternoon);
    let evening = filter_by_bucket(&by_date, TimeBucket::Evening);
    let unbucketed: Vec<_> = by_date
        .iter()
        .filter(|i| TimeBucket::of(&i.publication_time).is_none())
        .collect();

    assert_eq!(morning.len(), 6);
    assert_eq!(afternoon.len(), 6);
    assert_eq!(evening.len(), 6);
    assert_eq!(unbucketed.len(), 6);
    assert_eq!(
        morning.len() + afternoon.len() + evening.len() + unbucketed.len(),
        by_date.len()
    );
    for item in &morning {
        assert!(!afternoon.contains(item) && !evening.contains(item));
    }
    for item in &afternoon {
        assert!(!evening.contains(item));
    }
}

#[test]
fn test_early_hours_excluded_from_every_bucket() {
    let d = date(2024, 8, 1);
    let pool = vec![make_news_item("night owl", at(d, 5, 59))];
    let by_date = filter_by_date(&pool, d);
    for bucket in TimeBucket::ALL {
        assert!(filter_by_bucket(&by_date, bucket).is_empty());
    }
    assert_eq!(by_date.len(), 1);
}

#[test]
fn test_filter_by_bucket_name_unknown_is_empty() {
    let d = date(2024, 8, 1);
    let pool = vec![make_news_item("a", at(d, 9, 0))];
    let by_date = filter_by_date(&pool, d);
    assert!(filter_by_bucket_name(&by_date, "midnight").is_empty());
    assert_eq!(filter_by_bucket_name(&by_date, "morning").len(), 1);
}

// --- CurrentView ---

#[test]
fn test_current_view_composes_date_and_bucket() {
    let d = date(2024, 8, 1);
    let other = date(2024, 7, 31);
    let pool = vec![
        make_news_item("other day afternoon", at(other, 14, 0)),
        make_news_item("first afternoon", at(d, 13, 0)),
        make_news_item("morning", at(d, 8, 0)),
        make_news_item("second afternoon", at(d, 16, 0)),
    ];
    let view = CurrentView::compute(&pool, d, Some(TimeBucket::Afternoon));
    let names: Vec<_> = view.items().iter().map(|i| i.headline.as_str()).collect();
    assert_eq!(names, vec!["first afternoon", "second afternoon"]);

    let whole_day = CurrentView::compute(&pool, d, None);
    assert_eq!(whole_day.len(), 3);
}
