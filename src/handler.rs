// src/handler.rs

use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus, PasswordOption};
use crate::core::models::ToolKind;

/// Routes one key press to the matching `App` action. `out` receives the
/// clipboard escape sequence.
pub fn handle_key<W: Write>(app: &mut App, key: KeyEvent, out: &mut W) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        app.quit();
        return;
    }
    if app.show_disclaimer {
        if key.code == KeyCode::Enter {
            app.dismiss_disclaimer();
        }
        return;
    }

    match key.code {
        KeyCode::Char('b') if ctrl => app.toggle_sidebar(),
        KeyCode::Char('l') if ctrl => app.toggle_logs(),
        KeyCode::F(2) => app.toggle_mode(),
        KeyCode::F(3) => app.copy_output(out),
        KeyCode::F(4) => app.clear(),
        KeyCode::F(5) => app.export(),
        KeyCode::F(6) => app.load_sample(),
        _ => match app.focus {
            Focus::Sidebar => handle_sidebar_key(app, key.code),
            Focus::Tool => handle_tool_key(app, key.code, ctrl),
        },
    }
}

fn handle_sidebar_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_highlight(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_highlight(1),
        KeyCode::Enter => app.select_tool(app.highlighted),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Right => app.focus = Focus::Tool,
        _ => {}
    }
}

fn handle_tool_key(app: &mut App, code: KeyCode, ctrl: bool) {
    match code {
        KeyCode::Esc => app.focus_sidebar(),
        KeyCode::Tab => app.switch_field(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Left if app.show_logs => app.scroll_logs_left(),
        KeyCode::Right if app.show_logs => app.scroll_logs_right(),
        _ if app.tool == ToolKind::PasswordGenerator => handle_password_key(app, code, ctrl),
        KeyCode::Char('r') if ctrl && app.tool.takes_source_code() => app.run(),
        KeyCode::Enter if app.tool.takes_source_code() => app.push_char('\n'),
        KeyCode::Enter => app.run(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) if !ctrl => app.push_char(c),
        _ => {}
    }
}

fn handle_password_key(app: &mut App, code: KeyCode, ctrl: bool) {
    match code {
        KeyCode::Enter => app.run(),
        KeyCode::Char('+') => app.adjust_password_length(1),
        KeyCode::Char('-') => app.adjust_password_length(-1),
        KeyCode::Char('u') if ctrl => app.toggle_password_option(PasswordOption::Uppercase),
        KeyCode::Char('w') if ctrl => app.toggle_password_option(PasswordOption::Lowercase),
        KeyCode::Char('n') if ctrl => app.toggle_password_option(PasswordOption::Numbers),
        KeyCode::Char('s') if ctrl => app.toggle_password_option(PasswordOption::Symbols),
        KeyCode::Char('e') if ctrl => app.toggle_password_option(PasswordOption::ExcludeSimilar),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::config::Settings;
    use crate::core::dispatcher::ToolContext;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn app() -> App {
        let settings = Settings { delay_scale: 0.0, ..Settings::default() };
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(Arc::new(ToolContext::new(settings).unwrap()), tx)
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key(app, KeyEvent::new(code, modifiers), &mut Vec::<u8>::new());
    }

    #[tokio::test]
    async fn disclaimer_swallows_keys_until_enter() {
        let mut app = app();
        assert!(app.show_disclaimer);
        press(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(app.panel.input.is_empty());
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(!app.show_disclaimer);
        press(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.panel.input, "x");
    }

    #[tokio::test]
    async fn sidebar_navigation_mounts_tools() {
        let mut app = app();
        app.dismiss_disclaimer();
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Sidebar);
        press(&mut app, KeyCode::Down, KeyModifiers::NONE);
        press(&mut app, KeyCode::Down, KeyModifiers::NONE);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.tool, ToolKind::DnsLookup);
        assert_eq!(app.focus, Focus::Tool);
    }

    #[tokio::test]
    async fn obfuscator_enter_inserts_newline() {
        let mut app = app();
        app.dismiss_disclaimer();
        app.select_tool(ToolKind::PythonObfuscator);
        press(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.panel.input, "a\n");
        assert_eq!(app.state, AppState::Idle);
        press(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(app.state, AppState::Running);
    }

    #[tokio::test]
    async fn password_keys_toggle_options() {
        let mut app = app();
        app.dismiss_disclaimer();
        app.select_tool(ToolKind::PasswordGenerator);
        press(&mut app, KeyCode::Char('w'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('+'), KeyModifiers::NONE);
        assert!(!app.panel.password.lowercase);
        assert_eq!(app.panel.password.length, 17);
    }

    #[tokio::test]
    async fn ctrl_q_quits_from_anywhere() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
