use super::formatters::{format_date_heading, format_position};
use crate::app::DisplayState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const NO_NEWS_TEXT: &str = "No new news.";

pub fn draw_article(frame: &mut Frame, area: Rect, state: &DisplayState) {
    match state {
        DisplayState::Article(article) => {
            let title = format!(" Article {} ", format_position(article.position, article.total));
            let block = Block::default().borders(Borders::ALL).title(title);
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(inner);

            let body = vec![
                Line::from(Span::styled(
                    article.headline.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(article.description.clone()),
            ];
            frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), chunks[0]);

            let published = Paragraph::new(Span::styled(
                article.published.clone(),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right);
            frame.render_widget(published, chunks[1]);
        }
        DisplayState::NoNews => {
            let body = Paragraph::new(Span::styled(NO_NEWS_TEXT, Style::default().fg(Color::Yellow)))
                .block(Block::default().borders(Borders::ALL).title(" Article "));
            frame.render_widget(body, area);
        }
        DisplayState::Loading(date) => {
            let body = Paragraph::new(Span::styled(
                format!("Loading news for {}...", format_date_heading(*date)),
                Style::default().fg(Color::DarkGray),
            ))
            .block(Block::default().borders(Borders::ALL).title(" Article [Loading...] "));
            frame.render_widget(body, area);
        }
    }
}
