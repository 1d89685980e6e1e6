// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the sidebar when it is open.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Screen regions for one frame. Hidden regions are `Rect::default()`.
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub input: Rect,
    pub output: Rect,
    pub log_panel: Rect,
    pub footer: Rect,
}

/// Splits the frame into header, body and footer. The body holds the
/// optional sidebar, the tool panel (input above output) and the optional
/// log panel. `input_height` is what the mounted tool asks for.
pub fn create_layout(frame_size: Rect, sidebar_open: bool, show_logs: bool, input_height: u16) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(frame_size);

    let mut body_constraints = Vec::with_capacity(3);
    if sidebar_open {
        body_constraints.push(Constraint::Length(SIDEBAR_WIDTH));
    }
    body_constraints.push(Constraint::Min(0));
    if show_logs {
        body_constraints.push(Constraint::Percentage(35));
    }
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_constraints)
        .split(main_chunks[1]);

    let (sidebar, panel) = if sidebar_open { (body[0], body[1]) } else { (Rect::default(), body[0]) };
    let log_panel = if show_logs { body[body.len() - 1] } else { Rect::default() };

    let panel_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(input_height), Constraint::Min(0)])
        .split(panel);

    AppLayout {
        header: main_chunks[0],
        sidebar,
        input: panel_chunks[0],
        output: panel_chunks[1],
        log_panel,
        footer: main_chunks[2],
    }
}
