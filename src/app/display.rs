use crate::api::NewsItem;
use chrono::NaiveDate;

/// What the article pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Article(ArticleView),
    /// The active view has no items, including after a failed fetch.
    NoNews,
    /// The selected date is still being fetched.
    Loading(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub headline: String,
    pub description: String,
    pub published: String,
    pub position: usize,
    pub total: usize,
}

impl ArticleView {
    pub fn new(item: &NewsItem, position: usize, total: usize) -> Self {
        Self {
            headline: item.headline.clone(),
            description: item.description.clone(),
            published: item.formatted_publication_time(),
            position,
            total,
        }
    }
}

impl DisplayState {
    pub fn is_no_news(&self) -> bool {
        matches!(self, DisplayState::NoNews)
    }

    pub fn article(&self) -> Option<&ArticleView> {
        match self {
            DisplayState::Article(view) => Some(view),
            _ => None,
        }
    }
}
