mod article;
pub mod formatters;
mod modals;

use crate::app::{App, InputMode};
use formatters::{format_date_heading, truncate_str};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    article::draw_article(frame, chunks[1], &app.display_state());
    draw_footer(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        modals::draw_help(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let date_label = app
        .selected_date()
        .map(format_date_heading)
        .unwrap_or_else(|| "No date".to_string());

    let bucket_label = match app.bucket() {
        Some(bucket) => bucket.label(),
        None => "All day",
    };

    let status = if app.is_loading() {
        "[Loading...]".to_string()
    } else {
        format!("[{} dates cached]", app.cache().requested_count())
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" News ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(date_label, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(bucket_label, Style::default().fg(Color::Magenta)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let help = " [←→] Day [t] Today [g] Go to [1/2/3] Morning/Afternoon/Evening [0] All [↑↓] Article [r] Retry [?] Help [q] Quit ";
            if let Some(msg) = &app.status_message {
                let width = area.width.saturating_sub(4) as usize;
                Line::from(vec![
                    Span::styled(truncate_str(msg, width.max(8) / 2), Style::default().fg(Color::Yellow)),
                    Span::raw(" | "),
                    Span::styled(help, Style::default().fg(Color::DarkGray)),
                ])
            } else {
                Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)))
            }
        }
        InputMode::DateInput => Line::from(vec![
            Span::raw(" Go to date (YYYY-MM-DD): "),
            Span::styled(&app.input_buffer, Style::default().fg(Color::Cyan)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::raw(" | [Enter] Confirm | [Esc] Cancel"),
        ]),
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
