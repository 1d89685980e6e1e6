// src/ui/widgets/header.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::core::catalog;

/// Title bar: application name, the mounted tool and its category.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let detail = catalog::get_tool_detail(app.tool);
    let mut spans = vec![
        Span::styled("cyberkit-rs", Style::new().bold().fg(Color::Cyan)),
        Span::raw("  │  "),
        Span::styled(detail.name, Style::new().bold()),
        Span::styled(format!("  {}", detail.description), Style::new().fg(Color::DarkGray)),
        Span::styled(format!("  [{}]", detail.category), Style::new().fg(Color::Blue)),
    ];
    if app.tool.is_simulated() {
        spans.push(Span::styled("  SIMULATED", Style::new().bold().fg(Color::Magenta)));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}
