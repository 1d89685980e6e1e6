// src/ui/widgets/output.rs

use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, AppState, ExportStatus};
use crate::core::models::{
    CrackOutcome, DnsRecords, GeoLocation, PasswordStrength, PortResult, PortStatus, ToolOutput,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const SIMULATED_NOTE: &str = "Simulated data, not a real lookup";

/// Renders the result area of the mounted tool.
pub fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let mut title = String::from("Result");
    if app.is_copied() {
        title.push_str(" (Copied!)");
    }
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    match (&app.state, &app.panel.output) {
        (AppState::Running, _) => {
            let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
            lines.push(Line::from(format!("{spinner} Working...")).fg(Color::Yellow));
            if !app.panel.partial_ports.is_empty() {
                frame.render_widget(Paragraph::new(lines), inner);
                let rest = Rect { y: inner.y + 1, height: inner.height.saturating_sub(1), ..inner };
                frame.render_widget(port_table(&app.panel.partial_ports), rest);
                return;
            }
        }
        (_, None) => lines.push(Line::from("No result yet.").fg(Color::DarkGray)),
        (_, Some(ToolOutput::PortScan(results))) => {
            let open = results.iter().filter(|r| r.status == PortStatus::Open).count();
            let summary = Line::from(format!("{} ports scanned, {open} open. {SIMULATED_NOTE}.", results.len()))
                .fg(Color::Magenta);
            frame.render_widget(Paragraph::new(summary), inner);
            let rest = Rect { y: inner.y + 1, height: inner.height.saturating_sub(1), ..inner };
            frame.render_widget(port_table(results), rest);
            return;
        }
        (_, Some(output)) => lines = output_lines(output),
    }

    if let Some(finished) = app.panel.finished_at {
        if app.state == AppState::Finished {
            lines.push(Line::from(""));
            lines.push(
                Line::from(format!("Finished at {}", finished.with_timezone(&Local).format("%H:%M:%S")))
                    .fg(Color::DarkGray),
            );
        }
    }
    match &app.export_status {
        ExportStatus::Idle => {}
        ExportStatus::Success(path) => lines.push(Line::from(format!("Exported to {path}")).fg(Color::Green)),
        ExportStatus::Error(e) => lines.push(Line::from(format!("Export failed: {e}")).fg(Color::Red)),
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.output_scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn output_lines(output: &ToolOutput) -> Vec<Line<'static>> {
    match output {
        ToolOutput::Text(text) => text.lines().map(|l| Line::from(l.to_string())).collect(),
        ToolOutput::Sha(d) => vec![
            labelled("SHA-1", &d.sha1),
            labelled("SHA-256", &d.sha256),
            labelled("SHA-512", &d.sha512),
        ],
        ToolOutput::Subdomains(report) => {
            let mut lines = vec![
                Line::from(format!("Found {} subdomains for {}", report.subdomains.len(), report.domain))
                    .bold()
                    .fg(Color::Cyan),
            ];
            lines.extend(report.subdomains.iter().map(|s| Line::from(format!("  {s}"))));
            lines
        }
        ToolOutput::Whois(record) => {
            let mut lines = vec![simulated()];
            lines.extend(record.lines().map(|l| Line::from(l.to_string())));
            lines
        }
        ToolOutput::Dns(records) => dns_lines(records),
        ToolOutput::ReverseIp { ip, domains } => {
            let mut lines = vec![
                simulated(),
                Line::from(format!("{} domains hosted on {ip}", domains.len())).bold(),
            ];
            lines.extend(domains.iter().map(|d| Line::from(format!("  {d}"))));
            lines
        }
        ToolOutput::Geolocation(geo) => geo_lines(geo),
        ToolOutput::PortScan(results) => results
            .iter()
            .map(|r| Line::from(format!("{}\t{}\t{}", r.port, r.service, r.status)))
            .collect(),
        ToolOutput::Password { value, strength } => vec![
            Line::from(value.clone()).bold().fg(Color::Yellow),
            Line::from(""),
            Line::from(vec![
                Span::raw("Strength: "),
                Span::styled(strength.to_string(), Style::new().bold().fg(strength_color(*strength))),
            ]),
        ],
        ToolOutput::Crack(CrackOutcome::Found(password)) => vec![
            Line::from("Hash cracked!").bold().fg(Color::Green),
            labelled("Password", password),
        ],
        ToolOutput::Crack(CrackOutcome::NotFound) => {
            vec![Line::from(output.to_plain_text()).fg(Color::Red)]
        }
        ToolOutput::Error(e) => vec![Line::from(e.to_string()).fg(Color::Red)],
    }
}

fn simulated() -> Line<'static> {
    Line::from(format!("{SIMULATED_NOTE}.")).italic().fg(Color::Magenta)
}

fn labelled(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::new().bold().fg(Color::Cyan)),
        Span::raw(value.to_string()),
    ])
}

fn dns_lines(records: &DnsRecords) -> Vec<Line<'static>> {
    let mut lines = vec![simulated()];
    let mut section = |kind: &str, values: &[String]| {
        lines.push(Line::from(format!("{kind} Records")).bold().fg(Color::Cyan));
        lines.extend(values.iter().map(|v| Line::from(format!("  {v}"))));
    };
    section("A", &records.a);
    section("AAAA", &records.aaaa);
    section("MX", &records.mx);
    section("NS", &records.ns);
    section("TXT", &records.txt);
    if let Some(cname) = &records.cname {
        section("CNAME", cname);
    }
    lines
}

fn geo_lines(geo: &GeoLocation) -> Vec<Line<'static>> {
    vec![
        simulated(),
        labelled("IP", &geo.ip),
        labelled("Country", &format!("{} ({})", geo.country, geo.country_code)),
        labelled("Region", &format!("{} ({})", geo.region, geo.region_name)),
        labelled("City", &geo.city),
        labelled("ZIP", &geo.zip),
        labelled("Coordinates", &format!("{}, {}", geo.lat, geo.lon)),
        labelled("Timezone", &geo.timezone),
        labelled("ISP", &geo.isp),
        labelled("Organization", &geo.org),
        labelled("AS", &geo.asn),
    ]
}

fn strength_color(strength: PasswordStrength) -> Color {
    match strength {
        PasswordStrength::Weak => Color::Red,
        PasswordStrength::Medium => Color::Yellow,
        PasswordStrength::Strong => Color::Green,
        PasswordStrength::VeryStrong => Color::LightGreen,
    }
}

fn port_table(results: &[PortResult]) -> Table<'static> {
    let rows = results.iter().map(|r| {
        let color = match r.status {
            PortStatus::Open => Color::Green,
            PortStatus::Closed => Color::Red,
            PortStatus::Filtered => Color::Yellow,
        };
        Row::new(vec![
            Cell::from(r.port.to_string()),
            Cell::from(r.service.clone()),
            Cell::from(r.status.to_string()).style(Style::new().fg(color)),
        ])
    });
    Table::new(rows, [Constraint::Length(8), Constraint::Length(14), Constraint::Length(10)])
        .header(Row::new(vec!["Port", "Service", "Status"]).style(Style::new().bold().fg(Color::Cyan)))
}
