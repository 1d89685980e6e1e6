// src/ui/widgets/disclaimer_popup.rs

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the "educational purpose only" notice over the whole UI.
pub fn render_disclaimer_popup(frame: &mut Frame, area: Rect) {
    let disclaimer_text = Text::from(vec![
        Line::from("EDUCATIONAL PURPOSE ONLY".bold().yellow()),
        Line::from(""),
        Line::from("cyberkit-rs bundles reconnaissance, encoding and password tools for learning and for assessing assets you are authorized to test."),
        Line::from(""),
        Line::from("Only the subdomain finder contacts a real service (the public crt.sh certificate log). WHOIS, DNS, geolocation, reverse IP and port scan results are simulated and do not describe real hosts."),
        Line::from(""),
        Line::from("Do not use these tools against systems you do not own or have explicit permission to test. The authors assume no liability for misuse."),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to Acknowledge and Continue".bold()),
    ]);

    let block = Block::default()
        .title("Disclaimer")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(60, 60, area);

    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// A `Rect` of the given percentages, centered in `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
