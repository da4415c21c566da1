use super::filter::CurrentView;
use crate::api::NewsItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Empty,
    Positioned(usize),
}

/// Position within a [`CurrentView`].
///
/// The cursor owns the view it was reset with, so replacing the view always
/// replaces the index too.
#[derive(Debug, Clone, Default)]
pub struct NavigationCursor {
    view: CurrentView,
    index: usize,
}

impl NavigationCursor {
    pub fn new(view: CurrentView) -> Self {
        let mut cursor = Self::default();
        cursor.reset(view);
        cursor
    }

    pub fn reset(&mut self, view: CurrentView) {
        self.view = view;
        self.index = 0;
    }

    pub fn is_active(&self) -> bool {
        !self.view.is_empty()
    }

    pub fn state(&self) -> CursorState {
        if self.is_active() {
            CursorState::Positioned(self.index)
        } else {
            CursorState::Empty
        }
    }

    pub fn next(&mut self) {
        if self.is_active() && self.index < self.view.len() - 1 {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.is_active() && self.index > 0 {
            self.index -= 1;
        }
    }

    pub fn current(&self) -> Option<&NewsItem> {
        if self.is_active() {
            self.view.get(self.index)
        } else {
            None
        }
    }

    /// 1-based position and view length, if positioned.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.state() {
            CursorState::Positioned(i) => Some((i + 1, self.view.len())),
            CursorState::Empty => None,
        }
    }

    pub fn view(&self) -> &CurrentView {
        &self.view
    }
}
