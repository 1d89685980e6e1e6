// src/ui/widgets/sidebar.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::{App, Focus};
use crate::core::catalog::{self, ToolCategory};

/// Renders the tool list grouped by category.
///
/// The row under the cursor is highlighted only while the sidebar has
/// focus; the mounted tool is always marked with `▶`.
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let mut items = Vec::new();
    let mut selected = None;

    for category in ToolCategory::ALL {
        items.push(ListItem::new(Line::from(Span::styled(
            category.to_string(),
            Style::new().bold().fg(Color::Cyan),
        ))));
        for tool in catalog::tools_in(category) {
            if tool.kind == app.highlighted {
                selected = Some(items.len());
            }
            let marker = if tool.kind == app.tool { "▶ " } else { "  " };
            let style = if tool.kind == app.tool {
                Style::new().fg(Color::Yellow)
            } else {
                Style::new()
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(tool.name, style),
            ])));
        }
    }

    let focused = app.focus == Focus::Sidebar;
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let list = List::new(items)
        .block(
            Block::default()
                .title("Tools")
                .borders(Borders::ALL)
                .border_style(Style::new().fg(border)),
        )
        .highlight_style(Style::new().bg(Color::DarkGray).bold());

    let mut state = ListState::default();
    if focused {
        state.select(selected);
    }
    frame.render_stateful_widget(list, area, &mut state);
}
