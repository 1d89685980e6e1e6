// src/ui/widgets/input.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus, InputField};
use crate::core::models::ToolKind;

/// Rows the mounted tool needs for its input area.
pub fn input_height(app: &App) -> u16 {
    match app.tool {
        ToolKind::PythonObfuscator | ToolKind::PhpObfuscator => 14,
        ToolKind::PasswordGenerator => 9,
        ToolKind::PortScanner => 6,
        _ => 3,
    }
}

fn field_label(tool: ToolKind) -> &'static str {
    match tool {
        ToolKind::SubdomainFinder | ToolKind::WhoisLookup | ToolKind::DnsLookup => "Domain",
        ToolKind::ReverseIp | ToolKind::IpGeolocation => "IP Address",
        ToolKind::PortScanner => "Target Host",
        ToolKind::HashCracker => "Hash",
        ToolKind::PythonObfuscator => "Python Code",
        ToolKind::PhpObfuscator => "PHP Code",
        _ => "Input",
    }
}

fn field_block(title: String, active: bool) -> Block<'static> {
    let border = if active { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::new().fg(border))
}

/// Renders the input area of the mounted tool.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let typing = app.focus == Focus::Tool && !app.show_disclaimer;

    match app.tool {
        ToolKind::PasswordGenerator => render_password_options(frame, app, area),
        ToolKind::PortScanner => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Length(3)])
                .split(area);
            let on_target = app.panel.field == InputField::Primary;
            render_line(frame, chunks[0], field_block("Target Host".into(), typing && on_target), &app.panel.input, typing && on_target);
            render_line(frame, chunks[1], field_block("Ports (comma separated)".into(), typing && !on_target), &app.panel.ports, typing && !on_target);
        }
        ToolKind::PythonObfuscator | ToolKind::PhpObfuscator => {
            let block = field_block(field_label(app.tool).to_string(), typing);
            let inner = block.inner(area);
            let lines: Vec<&str> = app.panel.input.split('\n').collect();
            // Keep the end of the buffer, where the cursor is, in view.
            let overflow = lines.len().saturating_sub(inner.height as usize);
            let code = Paragraph::new(lines[overflow..].join("\n"))
                .block(block)
                .style(Style::new().fg(Color::Green));
            frame.render_widget(code, area);
            if typing {
                let last = lines.last().map_or(0, |l| l.chars().count());
                let row = (lines.len() - overflow).saturating_sub(1);
                let y = inner.y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
                frame.set_cursor_position((cursor_x(inner, last), y));
            }
        }
        tool => {
            let mut title = field_label(tool).to_string();
            if tool.has_mode() {
                title = format!("{title} ({}, F2 to switch)", app.panel.mode);
            } else if tool == ToolKind::HashCracker {
                let algorithm = app.panel.algorithm;
                title = format!("{title} ({algorithm}, {} hex chars, F2 to switch)", algorithm.hex_len());
            }
            render_line(frame, area, field_block(title, typing), &app.panel.input, typing);
        }
    }
}

fn render_line(frame: &mut Frame, area: Rect, block: Block<'static>, text: &str, cursor: bool) {
    let inner = block.inner(area);
    let paragraph = Paragraph::new(text).block(block).style(Style::new().fg(Color::Yellow));
    frame.render_widget(paragraph, area);
    if cursor {
        frame.set_cursor_position((cursor_x(inner, text.chars().count()), inner.y));
    }
}

/// Column `offset` cells into `inner`, clamped to its right edge.
fn cursor_x(inner: Rect, offset: usize) -> u16 {
    let last = inner.right().saturating_sub(1).max(inner.x);
    inner.x.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX)).min(last)
}

fn render_password_options(frame: &mut Frame, app: &App, area: Rect) {
    let spec = &app.panel.password;
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    let option = |on: bool, keys: &'static str, label: &'static str| {
        Line::from(vec![
            Span::raw(format!(" {} ", check(on))),
            Span::raw(label),
            Span::styled(format!("  ({keys})"), Style::new().fg(Color::DarkGray)),
        ])
    };
    let lines = vec![
        Line::from(vec![
            Span::raw(" Length: "),
            Span::styled(spec.length.to_string(), Style::new().bold().fg(Color::Yellow)),
            Span::styled("  (+/-)", Style::new().fg(Color::DarkGray)),
        ]),
        option(spec.uppercase, "Ctrl+U", "Uppercase (A-Z)"),
        option(spec.lowercase, "Ctrl+W", "Lowercase (a-z)"),
        option(spec.numbers, "Ctrl+N", "Numbers (0-9)"),
        option(spec.symbols, "Ctrl+S", "Symbols (!@#$...)"),
        option(spec.exclude_similar, "Ctrl+E", "Exclude similar (i, l, 1, L, o, 0, O)"),
    ];
    let typing = app.focus == Focus::Tool && !app.show_disclaimer;
    let options = Paragraph::new(lines).block(field_block("Options".into(), typing));
    frame.render_widget(options, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_short_text() {
        let inner = Rect::new(5, 1, 20, 1);
        assert_eq!(cursor_x(inner, 0), 5);
        assert_eq!(cursor_x(inner, 7), 12);
    }

    #[test]
    fn cursor_stays_inside_the_field() {
        let inner = Rect::new(5, 1, 20, 1);
        assert_eq!(cursor_x(inner, 19), 24);
        assert_eq!(cursor_x(inner, 500), 24);
        assert_eq!(cursor_x(inner, 100_000), 24);
        assert_eq!(cursor_x(Rect::new(3, 0, 0, 0), 9), 3);
    }
}
