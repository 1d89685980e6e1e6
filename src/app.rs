// src/app.rs

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use ratatui::widgets::ScrollbarState;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::clipboard;
use crate::core::catalog;
use crate::core::dispatcher::{self, ToolContext};
use crate::core::export;
use crate::core::lookups::{hash_cracker, port_scanner};
use crate::core::models::{
    HashAlgorithm, PasswordSpec, PortResult, ToolEvent, ToolKind, ToolOutput, ToolRequest, TransformMode,
};
use crate::core::obfuscator;
use crate::core::password;
use crate::logging;

/// How long the "Copied!" indicator stays visible.
pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);
const LOG_TAIL_LINES: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Running,
    Finished,
}

/// Which part of the screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Tool,
}

/// The port scanner has two text fields; every other tool has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Primary,
    Ports,
}

/// State of the mounted tool panel. Replaced wholesale when the user
/// switches tools, so nothing leaks from one tool into another.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPanel {
    pub input: String,
    pub ports: String,
    pub field: InputField,
    pub mode: TransformMode,
    pub algorithm: HashAlgorithm,
    pub password: PasswordSpec,
    pub output: Option<ToolOutput>,
    /// Port results received so far for the running scan.
    pub partial_ports: Vec<PortResult>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for ToolPanel {
    fn default() -> Self {
        Self {
            input: String::new(),
            ports: port_scanner::DEFAULT_PORTS.to_string(),
            field: InputField::Primary,
            mode: TransformMode::Encode,
            algorithm: HashAlgorithm::Md5,
            password: PasswordSpec::default(),
            output: None,
            partial_ports: Vec::new(),
            finished_at: None,
        }
    }
}

impl ToolPanel {
    /// The text field typed characters go to.
    pub fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            InputField::Primary => &mut self.input,
            InputField::Ports => &mut self.ports,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub tool: ToolKind,
    /// Tool under the sidebar cursor; mounted on Enter.
    pub highlighted: ToolKind,
    pub sidebar_open: bool,
    pub focus: Focus,
    pub panel: ToolPanel,
    pub spinner_frame: usize,
    pub copied_at: Option<Instant>,
    pub export_status: ExportStatus,
    pub show_disclaimer: bool,
    pub show_logs: bool,
    pub log_tail: logging::LogTail,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
    pub output_scroll: u16,
    invocation_id: u64,
    token: Option<CancellationToken>,
    ctx: Arc<ToolContext>,
    events: UnboundedSender<ToolEvent>,
}

impl App {
    pub fn new(ctx: Arc<ToolContext>, events: UnboundedSender<ToolEvent>) -> Self {
        let show_disclaimer = ctx.settings.show_disclaimer;
        Self {
            should_quit: false,
            state: AppState::Idle,
            tool: ToolKind::default(),
            highlighted: ToolKind::default(),
            sidebar_open: true,
            focus: Focus::Tool,
            panel: ToolPanel::default(),
            spinner_frame: 0,
            copied_at: None,
            export_status: ExportStatus::Idle,
            show_disclaimer,
            show_logs: false,
            log_tail: logging::LogTail::default(),
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
            output_scroll: 0,
            invocation_id: 0,
            token: None,
            ctx,
            events,
        }
    }

    pub fn invocation_id(&self) -> u64 {
        self.invocation_id
    }

    // --- Navigation ---

    /// Mounts `kind` with a fresh panel. Any running invocation is cancelled.
    pub fn select_tool(&mut self, kind: ToolKind) {
        self.cancel_running();
        info!(tool = kind.id(), "Tool selected.");
        self.tool = kind;
        self.highlighted = kind;
        self.panel = ToolPanel::default();
        self.state = AppState::Idle;
        self.export_status = ExportStatus::Idle;
        self.output_scroll = 0;
        self.focus = Focus::Tool;
    }

    pub fn move_highlight(&mut self, offset: isize) {
        self.highlighted = catalog::step(self.highlighted, offset);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        if !self.sidebar_open {
            self.focus = Focus::Tool;
        }
    }

    pub fn focus_sidebar(&mut self) {
        self.sidebar_open = true;
        self.highlighted = self.tool;
        self.focus = Focus::Sidebar;
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if self.show_logs {
            self.refresh_logs();
        }
    }

    pub fn refresh_logs(&mut self) {
        self.log_tail.reload(&logging::log_path(), LOG_TAIL_LINES);
    }

    pub fn scroll_logs_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn scroll_logs_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn scroll_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.output_scroll = self.output_scroll.saturating_add(1);
    }

    pub fn dismiss_disclaimer(&mut self) {
        self.show_disclaimer = false;
    }

    // --- Panel editing ---

    pub fn push_char(&mut self, c: char) {
        self.panel.active_field_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.panel.active_field_mut().pop();
    }

    pub fn switch_field(&mut self) {
        if self.tool == ToolKind::PortScanner {
            self.panel.field = match self.panel.field {
                InputField::Primary => InputField::Ports,
                InputField::Ports => InputField::Primary,
            };
        }
    }

    /// F2: encode/decode for codec tools, algorithm for the cracker.
    pub fn toggle_mode(&mut self) {
        if self.tool.has_mode() {
            self.panel.mode = self.panel.mode.toggled();
            self.panel.output = None;
        } else if self.tool == ToolKind::HashCracker {
            self.panel.algorithm = self.panel.algorithm.next();
        }
    }

    pub fn toggle_password_option(&mut self, option: PasswordOption) {
        let spec = &mut self.panel.password;
        let flag = match option {
            PasswordOption::Uppercase => &mut spec.uppercase,
            PasswordOption::Lowercase => &mut spec.lowercase,
            PasswordOption::Numbers => &mut spec.numbers,
            PasswordOption::Symbols => &mut spec.symbols,
            PasswordOption::ExcludeSimilar => &mut spec.exclude_similar,
        };
        *flag = !*flag;
    }

    pub fn adjust_password_length(&mut self, delta: isize) {
        let length = self.panel.password.length.saturating_add_signed(delta);
        self.panel.password.length = length.clamp(password::MIN_LENGTH, password::MAX_LENGTH);
    }

    /// F6: fills the panel with a ready-made input.
    pub fn load_sample(&mut self) {
        match self.tool {
            ToolKind::HashCracker => self.panel.input = hash_cracker::sample_hash(self.panel.algorithm),
            ToolKind::PortScanner => self.panel.ports = port_scanner::COMMON_PORTS_PRESET.to_string(),
            ToolKind::PythonObfuscator => self.panel.input = obfuscator::PYTHON_SAMPLE.to_string(),
            ToolKind::PhpObfuscator => self.panel.input = obfuscator::PHP_SAMPLE.to_string(),
            _ => {}
        }
    }

    /// F4: cancels the run and empties inputs and output. Options survive.
    pub fn clear(&mut self) {
        self.cancel_running();
        let panel = &mut self.panel;
        panel.input.clear();
        if self.tool == ToolKind::PortScanner {
            panel.ports.clear();
        }
        panel.output = None;
        panel.partial_ports.clear();
        panel.finished_at = None;
        self.state = AppState::Idle;
        self.export_status = ExportStatus::Idle;
        self.output_scroll = 0;
    }

    // --- Invocations ---

    /// The request the mounted panel describes, or `None` when there is
    /// nothing to run (an empty input for a text transform).
    pub fn build_request(&self) -> Option<ToolRequest> {
        let p = &self.panel;
        let input = p.input.clone();
        let request = match self.tool {
            ToolKind::SubdomainFinder => ToolRequest::SubdomainFinder { domain: input },
            ToolKind::WhoisLookup => ToolRequest::WhoisLookup { domain: input },
            ToolKind::DnsLookup => ToolRequest::DnsLookup { domain: input },
            ToolKind::ReverseIp => ToolRequest::ReverseIp { ip: input },
            ToolKind::IpGeolocation => ToolRequest::IpGeolocation { ip: input },
            ToolKind::PortScanner => ToolRequest::PortScanner { target: input, ports: p.ports.clone() },
            ToolKind::PythonObfuscator => ToolRequest::PythonObfuscator { source: input },
            ToolKind::PhpObfuscator => ToolRequest::PhpObfuscator { source: input },
            ToolKind::PasswordGenerator => ToolRequest::PasswordGenerator(p.password),
            ToolKind::HashCracker => ToolRequest::HashCracker { digest: input, algorithm: p.algorithm },
            _ if input.trim().is_empty() => return None,
            ToolKind::Md5Tool => ToolRequest::Md5Tool { input, mode: p.mode },
            ToolKind::Base64Tool => ToolRequest::Base64Tool { input, mode: p.mode },
            ToolKind::ShaTool => ToolRequest::ShaTool { input },
            ToolKind::UrlTool => ToolRequest::UrlTool { input, mode: p.mode },
            ToolKind::HexTool => ToolRequest::HexTool { input, mode: p.mode },
            ToolKind::Rot13Tool => ToolRequest::Rot13Tool { input },
        };
        Some(request)
    }

    /// Starts the mounted tool, superseding any run in flight.
    pub fn run(&mut self) {
        let Some(request) = self.build_request() else {
            debug!(tool = self.tool.id(), "Nothing to run.");
            return;
        };
        self.cancel_running();

        self.invocation_id += 1;
        let token = CancellationToken::new();
        self.token = Some(token.clone());
        self.state = AppState::Running;
        self.panel.output = None;
        self.panel.partial_ports.clear();
        self.export_status = ExportStatus::Idle;
        self.output_scroll = 0;

        tokio::spawn(dispatcher::run(
            request,
            Arc::clone(&self.ctx),
            self.invocation_id,
            token,
            self.events.clone(),
        ));
    }

    /// Applies an event from a running invocation. Events from superseded
    /// invocations are dropped.
    pub fn handle_event(&mut self, event: ToolEvent) {
        if event.id() != self.invocation_id || self.state != AppState::Running {
            debug!(event_id = event.id(), current = self.invocation_id, "Dropping stale tool event.");
            return;
        }
        match event {
            ToolEvent::PortProgress { result, .. } => self.panel.partial_ports.push(result),
            ToolEvent::Completed { output, finished_at, .. } => {
                self.panel.output = Some(output);
                self.panel.finished_at = Some(finished_at);
                self.state = AppState::Finished;
                self.token = None;
            }
        }
    }

    fn cancel_running(&mut self) {
        if let Some(token) = self.token.take() {
            debug!(id = self.invocation_id, "Cancelling running invocation.");
            token.cancel();
        }
        if self.state == AppState::Running {
            self.state = AppState::Idle;
        }
    }

    // --- Output actions ---

    /// F3: copies the current output through the terminal.
    pub fn copy_output<W: Write>(&mut self, out: &mut W) {
        let Some(output) = &self.panel.output else {
            return;
        };
        match clipboard::copy_osc52(out, &output.to_plain_text()) {
            Ok(()) => self.copied_at = Some(Instant::now()),
            Err(e) => warn!(error = %e, "Could not write clipboard escape sequence."),
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some_and(|at| at.elapsed() < COPIED_INDICATOR)
    }

    /// F5: writes the subdomain list to the export directory.
    pub fn export(&mut self) {
        let Some(ToolOutput::Subdomains(report)) = &self.panel.output else {
            return;
        };
        self.export_status = match export::export_subdomains(&self.ctx.settings.export_dir, report) {
            Ok(path) => ExportStatus::Success(path.display().to_string()),
            Err(e) => {
                error!(error = %e, "Export failed.");
                ExportStatus::Error(e.to_string())
            }
        };
    }

    pub fn on_tick(&mut self) {
        if self.state == AppState::Running {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        if self.copied_at.is_some() && !self.is_copied() {
            self.copied_at = None;
        }
        if self.show_logs {
            self.log_tail.refresh(&logging::log_path(), LOG_TAIL_LINES);
        }
    }

    pub fn quit(&mut self) {
        self.cancel_running();
        self.should_quit = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordOption {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
    ExcludeSimilar,
}
