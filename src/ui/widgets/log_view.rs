// src/ui/widgets/log_view.rs

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

use crate::app::App;

/// Splits a log line into its timestamp and the rest.
///
/// Lines are written as `DATE TIME LEVEL MESSAGE`; anything else yields
/// `None` and is shown unstyled.
pub fn split_timestamp(line: &str) -> Option<(String, &str)> {
    let mut parts = line.splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(date), Some(time), Some(rest)) => Some((format!("{date} {time}"), rest)),
        _ => None,
    }
}

/// Renders the tail of the log file with a horizontal scrollbar for long
/// lines. Timestamps are dimmed.
pub fn render_log_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("Logs (scroll with ← →)")
        .borders(Borders::ALL);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let max_width = app.log_tail.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    app.log_horizontal_scroll_state = app.log_horizontal_scroll_state.content_length(max_width);

    // Newest lines at the bottom of the panel.
    let visible = inner_area.height.saturating_sub(1) as usize;
    let start = app.log_tail.lines.len().saturating_sub(visible);

    let log_lines: Vec<Line> = app.log_tail.lines[start..]
        .iter()
        .map(|line| match split_timestamp(line) {
            Some((timestamp, rest)) => Line::from(vec![
                Span::styled(timestamp, Style::default().fg(Color::DarkGray)),
                Span::raw(format!(" {rest}")),
            ]),
            None => Line::from(line.as_str()),
        })
        .collect();

    let log_paragraph = Paragraph::new(log_lines).scroll((0, app.log_horizontal_scroll as u16));
    frame.render_widget(log_paragraph, inner_area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom).thumb_symbol("■");
    let scrollbar_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(1),
        width: inner_area.width,
        height: 1,
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut app.log_horizontal_scroll_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_date_and_time_from_message() {
        let (timestamp, rest) = split_timestamp("2025-01-31 14:02:11  INFO Tool selected.").unwrap();
        assert_eq!(timestamp, "2025-01-31 14:02:11");
        assert_eq!(rest, " INFO Tool selected.");
        assert!(split_timestamp("garbage").is_none());
    }
}
