use super::centered_rect;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

fn help_section(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("─── {} ", title), Style::default().fg(Color::Yellow)),
        Span::styled("───────────────────────────", Style::default().fg(Color::DarkGray)),
    ])
}

fn help_binding(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:12}", key), Style::default().fg(Color::Cyan)),
        Span::raw(desc.to_string()),
    ])
}

fn help_content() -> Vec<Line<'static>> {
    vec![
        help_section("General"),
        help_binding("q", "Quit"),
        help_binding("?", "Show this help"),
        help_binding("r", "Retry a date that failed to load"),
        Line::from(""),
        help_section("Date"),
        help_binding("h / ←", "Previous day"),
        help_binding("l / →", "Next day (not past today)"),
        help_binding("t", "Today"),
        help_binding("g", "Go to date (YYYY-MM-DD)"),
        Line::from(""),
        help_section("Time of day"),
        help_binding("1 / m", "Morning (06:00-11:59)"),
        help_binding("2 / a", "Afternoon (12:00-17:59)"),
        help_binding("3 / e", "Evening (18:00-23:59)"),
        help_binding("0 / c", "Whole day"),
        Line::from(""),
        help_section("Articles"),
        help_binding("j / n / ↓", "Next article"),
        help_binding("k / p / ↑", "Previous article"),
    ]
}

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 70, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    frame.render_widget(
        Paragraph::new(help_content()).alignment(Alignment::Left),
        inner_area,
    );
}
