// src/ui/mod.rs

use ratatui::prelude::*;

use crate::app::App;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let input_height = widgets::input::input_height(app);
    let layout = layout::create_layout(frame.area(), app.sidebar_open, app.show_logs, input_height);

    widgets::header::render_header(frame, app, layout.header);
    if app.sidebar_open {
        widgets::sidebar::render_sidebar(frame, app, layout.sidebar);
    }
    widgets::input::render_input(frame, app, layout.input);
    widgets::output::render_output(frame, app, layout.output);
    if app.show_logs {
        widgets::log_view::render_log_view(frame, app, layout.log_panel);
    }
    widgets::footer::render_footer(frame, app, layout.footer);

    if app.show_disclaimer {
        widgets::disclaimer_popup::render_disclaimer_popup(frame, frame.area());
    }
}
