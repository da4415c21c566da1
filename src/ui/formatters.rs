use chrono::NaiveDate;

pub use crate::api::news::{PUBLICATION_TIME_FORMAT, format_publication_time};

/// Header label for a date, e.g. "Thu 01-08-2024".
pub fn format_date_heading(date: NaiveDate) -> String {
    date.format("%a %d-%m-%Y").to_string()
}

pub fn format_position(position: usize, total: usize) -> String {
    if total == 0 {
        String::new()
    } else {
        format!("{}/{}", position, total)
    }
}

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        if max_len <= 3 {
            return s.chars().take(max_len).collect();
        }
        let end = s
            .char_indices()
            .nth(max_len - 3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..end])
    } else {
        s.to_string()
    }
}
