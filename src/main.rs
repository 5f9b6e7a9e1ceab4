//! CLI entry point for ansiframe.

mod cli;

use ansiframe::app::{Application, ExitFlag};
use ansiframe::config::{load_config, Config};
use ansiframe::console::{Console, LogLevel};
use ansiframe::error::ConsoleError;
use ansiframe::layout::{BannerSpec, BoxSpec, DividerSpec, TableSpec};
use ansiframe::style::Color;
use ansiframe::text::Align;
use clap::Parser;
use std::io::{self, Write};

fn main() {
    init_tracing();
    let args = cli::Args::parse();

    let config = match runtime_config(&args) {
        Ok(c) => c,
        Err(e) => Console::stdout(!args.no_color).print_error_exit(&format!("error: {e}"), 1),
    };

    let mut console = Console::from_config(&config);
    match run(&mut console, &config, args.command) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => console.print_error_exit(&format!("error: {e}"), 1),
    }
}

/// Diagnostics go to stderr so they never interleave with rendered stdout.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("ANSIFRAME_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Loaded config with the `--no-color` flag applied on top.
fn runtime_config(args: &cli::Args) -> Result<Config, ConsoleError> {
    let mut config = load_config(args.config.as_deref())?;
    if args.no_color {
        config.display.color = false;
    }
    Ok(config)
}

/// Execute one subcommand; returns the process exit code.
fn run<W: Write>(
    console: &mut Console<W>,
    config: &Config,
    command: cli::Command,
) -> Result<i32, ConsoleError> {
    use cli::Command;

    match command {
        Command::Box {
            lines,
            title,
            style,
            fix_offset,
        } => {
            let spec = BoxSpec::new(lines.join("\n"))
                .title(title)
                .style(style.unwrap_or(config.layout.box_style))
                .fix_offset(fix_offset);
            console.print_box(&spec)?;
        }
        Command::Table {
            title,
            header,
            rows,
            align,
        } => {
            let mut spec = TableSpec::new(header).title(title);
            for row in &rows {
                spec = spec.row(split_cells(row));
            }
            for (column, alignment) in align.into_iter().enumerate() {
                spec = spec.align(column, alignment);
            }
            console.print_table(&spec)?;
        }
        Command::Title { text, color } => console.print_title(&text, color)?,
        Command::Banner {
            message,
            title,
            width,
        } => {
            let spec = BannerSpec::new(message)
                .title(title)
                .width(width.unwrap_or(config.layout.banner_width));
            console.print_banner(&spec)?;
        }
        Command::Divider { message, width } => {
            let spec = DividerSpec::new(message.unwrap_or_default())
                .width(width.unwrap_or(config.layout.divider_width));
            console.print_divider_spec(&spec)?;
        }
        Command::Status { kind, message } => console.print_status(kind, &message)?,
        Command::Log { message, level } => console.log_message(&message, level)?,
        Command::Confirm { prompt } => {
            let yes = console.prompt_bool_stdin(&format!("{prompt} [y/n] "))?;
            return Ok(if yes { 0 } else { 1 });
        }
        Command::Ask { prompt } => {
            let answer = console.prompt_string_stdin(&format!("{prompt} "))?;
            console.print_colored_line(&answer, None, None, &[])?;
        }
        Command::Clear { last_line } => {
            if last_line {
                console.clear_last_line()?;
            } else {
                console.clear_console()?;
            }
        }
        Command::Demo { frames } => {
            let mut demo = Showcase::new(console, frames);
            demo.run();
            if let Some(e) = demo.error.take() {
                return Err(e.into());
            }
        }
    }
    Ok(0)
}

fn split_cells(row: &str) -> Vec<String> {
    row.split(',').map(|cell| cell.trim().to_string()).collect()
}

/// Walks through every widget, one per frame.
struct Showcase<'a, W: Write> {
    console: &'a mut Console<W>,
    flag: ExitFlag,
    frame: u32,
    frames: u32,
    /// First write failure; drawing stops once one occurs.
    error: Option<io::Error>,
}

impl<'a, W: Write> Showcase<'a, W> {
    fn new(console: &'a mut Console<W>, frames: u32) -> Self {
        Self {
            console,
            flag: ExitFlag::new(),
            frame: 0,
            frames,
            error: None,
        }
    }

    fn draw_frame(&mut self) -> io::Result<()> {
        let c = &mut *self.console;
        match self.frame % 4 {
            1 => {
                c.print_title("ansiframe", Color::Cyan)?;
                c.print_text_box("Boxes pad every line\nto the widest one.", " Box ")?;
            }
            2 => {
                let table = TableSpec::new(["ID", "Name", "State"])
                    .title(" Users ")
                    .row(["1", "Al", "\x1b[32mactive\x1b[0m"])
                    .row(["22", "Bob", "\x1b[33midle\x1b[0m"])
                    .align(0, Align::Right)
                    .align(2, Align::Center);
                c.print_table(&table)?;
            }
            3 => {
                c.print_banner_message("Banners center by visible width", "Banner")?;
                c.print_divider("section")?;
            }
            _ => {
                c.print_success("rendered")?;
                c.print_warning("widths are counted per code point")?;
                c.print_info("frames advance on their own")?;
                c.log_message("demo frame complete", LogLevel::Info)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Application for Showcase<'_, W> {
    fn init(&mut self) {
        tracing::debug!(frames = self.frames, "starting demo");
        if self.frames == 0 {
            self.exit();
        }
    }

    fn update(&mut self) {
        self.frame += 1;
        if self.frame >= self.frames || self.error.is_some() {
            self.exit();
        }
    }

    fn draw(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.draw_frame() {
            self.error = Some(e);
        }
    }

    fn exit_flag(&self) -> &ExitFlag {
        &self.flag
    }

    fn exit_flag_mut(&mut self) -> &mut ExitFlag {
        &mut self.flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn missing_explicit_config_surfaces_as_console_config_error() {
        let args = cli::Args::parse_from([
            "ansiframe",
            "--config",
            "/nonexistent/ansiframe/missing.toml",
            "divider",
        ]);
        let err = runtime_config(&args).unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)), "got: {err:?}");
        assert!(err.to_string().starts_with("config: io:"), "got: {err}");
    }

    #[test]
    fn demo_draws_every_frame_kind_into_the_writer() {
        let mut console = Console::new(Vec::new(), false);
        let mut demo = Showcase::new(&mut console, 4);
        demo.run();
        assert!(demo.error.is_none());
        let out = String::from_utf8(console.into_inner()).expect("utf-8 output");
        assert!(out.contains("ansiframe"));
        assert!(out.contains("│ 22 │ Bob  │"));
        assert!(out.contains("ℹ frames advance on their own"));
        assert!(!out.contains("press enter"));
    }
}
