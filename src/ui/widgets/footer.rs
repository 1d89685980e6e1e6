// src/ui/widgets/footer.rs

use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, AppState, Focus};
use crate::core::models::{ToolKind, ToolOutput};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays the keys that apply right now.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    let mut add = |k: &'static str, action: &'static str| {
        spans.push(key(k));
        spans.push(Span::raw(format!(" {action}  ")));
    };

    if app.show_disclaimer {
        add("Enter", "acknowledge");
    } else if app.focus == Focus::Sidebar {
        add("↑↓", "choose");
        add("Enter", "open");
        add("Tab", "back to tool");
        add("Q", "quit");
    } else {
        match app.tool {
            ToolKind::PythonObfuscator | ToolKind::PhpObfuscator => {
                add("Ctrl+R", "obfuscate");
                add("F6", "sample");
            }
            ToolKind::PasswordGenerator => {
                add("Enter", "generate");
                add("+/-", "length");
                add("Ctrl+U/W/N/S/E", "options");
            }
            ToolKind::PortScanner => {
                add("Enter", "scan");
                add("Tab", "field");
                add("F6", "common ports");
            }
            ToolKind::HashCracker => {
                add("Enter", "crack");
                add("F2", "algorithm");
                add("F6", "sample");
            }
            tool if tool.has_mode() => {
                add("Enter", "run");
                add("F2", "mode");
            }
            _ => add("Enter", "run"),
        }
        if app.panel.output.is_some() {
            add("F3", "copy");
        }
        if matches!(app.panel.output, Some(ToolOutput::Subdomains(_))) {
            add("F5", "export");
        }
        add("F4", "clear");
        add("Esc", "tools");
        add("Ctrl+B", "sidebar");
        add("Ctrl+L", "logs");
        add("Ctrl+Q", "quit");
    }

    if app.state == AppState::Running {
        spans.push(Span::raw("│ running…").italic());
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
