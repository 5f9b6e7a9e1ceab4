//! Console writer: emits styled and laid-out text, status lines, timestamped
//! log lines, cursor control, and blocking prompts.
//!
//! `Console` owns its writer and performs one-shot writes; it keeps no state
//! between calls beyond the color flag and layout defaults. With color off,
//! every styled string is stripped to its visible text before writing, so
//! plain output keeps the same layout.

pub mod input;
mod status;

pub use input::{read_bool, read_string};
pub use status::{format_log_line, LogLevel, StatusKind};

use crate::config::{Config, LayoutConfig};
use crate::layout::{
    render_banner, render_box, render_divider, render_table, render_title, BannerSpec, BoxSpec,
    DividerSpec, TableSpec,
};
use crate::style::{compose, settings, Attribute, Color};
use crate::text::strip_escapes;
use chrono::{Local, NaiveDateTime};
use crossterm::style::Print;
use crossterm::QueueableCommand;
use std::io::{self, BufRead, Write};

/// Handles all terminal output formatting for one writer.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    /// Whether ANSI color/style output is enabled.
    color: bool,
    layout: LayoutConfig,
}

impl Console<io::Stdout> {
    /// Console bound to process stdout.
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }

    /// Stdout console using color and layout defaults from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::stdout(config.display.color).with_layout(config.layout)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            layout: LayoutConfig::default(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `text`, stripping escapes when color is off, and flush.
    fn emit(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            self.out.queue(Print(text))?;
        } else {
            self.out.queue(Print(strip_escapes(text)))?;
        }
        self.out.flush()
    }

    /// Write a control sequence verbatim. Stripping would swallow sequences
    /// that do not end in `m`.
    fn emit_control(&mut self, sequence: &str) -> io::Result<()> {
        self.out.queue(Print(sequence))?;
        self.out.flush()
    }

    // -----------------------------------------------------------------------
    // Styled text
    // -----------------------------------------------------------------------

    pub fn print_colored(
        &mut self,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        attrs: &[Attribute],
    ) -> io::Result<()> {
        self.emit(&compose(text, fg, bg, attrs))
    }

    pub fn print_colored_line(
        &mut self,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        attrs: &[Attribute],
    ) -> io::Result<()> {
        let mut line = compose(text, fg, bg, attrs);
        line.push('\n');
        self.emit(&line)
    }

    // -----------------------------------------------------------------------
    // Status lines
    // -----------------------------------------------------------------------

    /// Print `glyph message` in the kind's color.
    pub fn print_status(&mut self, kind: StatusKind, message: &str) -> io::Result<()> {
        self.print_colored_line(
            &format!("{} {message}", kind.glyph()),
            Some(kind.color()),
            None,
            &[],
        )
    }

    pub fn print_success(&mut self, message: &str) -> io::Result<()> {
        self.print_status(StatusKind::Success, message)
    }

    pub fn print_warning(&mut self, message: &str) -> io::Result<()> {
        self.print_status(StatusKind::Warning, message)
    }

    pub fn print_error(&mut self, message: &str) -> io::Result<()> {
        self.print_status(StatusKind::Error, message)
    }

    pub fn print_info(&mut self, message: &str) -> io::Result<()> {
        self.print_status(StatusKind::Info, message)
    }

    /// Print an error line and terminate the process with `code`.
    pub fn print_error_exit(&mut self, message: &str, code: i32) -> ! {
        self.report_fatal(message);
        tracing::debug!(code, "exiting after fatal error");
        std::process::exit(code)
    }

    /// Write the fatal error line; a write failure is logged, not returned.
    fn report_fatal(&mut self, message: &str) {
        if let Err(e) = self.print_error(message) {
            tracing::debug!(error = %e, "failed to write fatal error line");
        }
    }

    /// Print `[YYYY-MM-DD HH:MM:SS] message` (local time) as a status line
    /// of the matching level.
    pub fn log_message(&mut self, message: &str, level: LogLevel) -> io::Result<()> {
        self.log_message_at(message, level, Local::now().naive_local())
    }

    pub fn log_message_at(
        &mut self,
        message: &str,
        level: LogLevel,
        timestamp: NaiveDateTime,
    ) -> io::Result<()> {
        let line = format_log_line(&timestamp, message);
        self.print_status(level.status(), &line)
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    pub fn print_title(&mut self, title: &str, color: Color) -> io::Result<()> {
        self.emit(&render_title(title, color))
    }

    pub fn print_box(&mut self, spec: &BoxSpec) -> io::Result<()> {
        self.emit(&render_box(spec))
    }

    /// Box `body` using the configured border style.
    pub fn print_text_box(&mut self, body: &str, title: &str) -> io::Result<()> {
        let spec = BoxSpec::new(body).title(title).style(self.layout.box_style);
        self.print_box(&spec)
    }

    pub fn print_table(&mut self, spec: &TableSpec) -> io::Result<()> {
        self.emit(&render_table(spec))
    }

    pub fn print_banner(&mut self, spec: &BannerSpec) -> io::Result<()> {
        self.emit(&render_banner(spec))
    }

    /// Banner at the configured width.
    pub fn print_banner_message(&mut self, message: &str, title: &str) -> io::Result<()> {
        let spec = BannerSpec::new(message)
            .title(title)
            .width(self.layout.banner_width);
        self.print_banner(&spec)
    }

    /// Divider at the configured width.
    pub fn print_divider(&mut self, message: &str) -> io::Result<()> {
        self.emit(&render_divider(message, self.layout.divider_width))
    }

    pub fn print_divider_spec(&mut self, spec: &DividerSpec) -> io::Result<()> {
        self.emit(&spec.render())
    }

    // -----------------------------------------------------------------------
    // Cursor control
    // -----------------------------------------------------------------------

    /// Clear the screen and home the cursor.
    pub fn clear_console(&mut self) -> io::Result<()> {
        self.emit_control(&format!(
            "{}{}",
            settings::CLEAR_SCREEN,
            settings::CURSOR_HOME
        ))
    }

    /// Move up one line and erase it.
    pub fn clear_last_line(&mut self) -> io::Result<()> {
        self.emit_control(&format!("{}{}", settings::CURSOR_UP, settings::CLEAR_LINE))
    }

    // -----------------------------------------------------------------------
    // Prompts
    // -----------------------------------------------------------------------

    /// Write `prompt`, then block for one line from `input`; `y`/`Y` is true.
    pub fn get_bool_input<R: BufRead + ?Sized>(
        &mut self,
        prompt: &str,
        input: &mut R,
    ) -> io::Result<bool> {
        self.emit(prompt)?;
        read_bool(input)
    }

    /// Write `prompt`, then block for one line from `input`.
    pub fn get_string_input<R: BufRead + ?Sized>(
        &mut self,
        prompt: &str,
        input: &mut R,
    ) -> io::Result<String> {
        self.emit(prompt)?;
        read_string(input)
    }

    pub fn prompt_bool_stdin(&mut self, prompt: &str) -> io::Result<bool> {
        let stdin = io::stdin();
        let mut lock = stdin.lock();
        self.get_bool_input(prompt, &mut lock)
    }

    pub fn prompt_string_stdin(&mut self, prompt: &str) -> io::Result<String> {
        let stdin = io::stdin();
        let mut lock = stdin.lock();
        self.get_string_input(prompt, &mut lock)
    }
}
