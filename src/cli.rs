//! CLI argument parsing via clap.

use ansiframe::console::{LogLevel, StatusKind};
use ansiframe::layout::BoxStyle;
use ansiframe::style::Color;
use ansiframe::text::Align;
use clap::{Parser, Subcommand};

/// Render boxes, tables, banners and status lines to an ANSI terminal.
#[derive(Debug, Parser)]
#[command(name = "ansiframe", version)]
pub struct Args {
    /// Path to config file (default: ./ansiframe.toml or ~/.config/ansiframe/ansiframe.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw a box around text; each argument is one line.
    Box {
        #[arg(required = true)]
        lines: Vec<String>,
        #[arg(long, default_value = "")]
        title: String,
        /// Border style (single or double). Defaults to the configured style.
        #[arg(long)]
        style: Option<BoxStyle>,
        /// Extra top-border fill for titles with odd-width glyphs.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        fix_offset: isize,
    },
    /// Draw a table. Cells within --header and --row are comma-separated.
    Table {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, value_delimiter = ',', required = true)]
        header: Vec<String>,
        #[arg(long = "row")]
        rows: Vec<String>,
        /// Per-column alignment, e.g. `left,right`.
        #[arg(long, value_delimiter = ',')]
        align: Vec<Align>,
    },
    /// Print a bold title framed by `=` rules.
    Title {
        text: String,
        #[arg(long, default_value = "cyan")]
        color: Color,
    },
    /// Print a centered banner message.
    Banner {
        message: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        width: Option<usize>,
    },
    /// Print a horizontal divider, optionally with a centered message.
    Divider {
        message: Option<String>,
        #[arg(long)]
        width: Option<usize>,
    },
    /// Print one status line (success, warning, error, info).
    Status { kind: StatusKind, message: String },
    /// Print a timestamped log line.
    Log {
        message: String,
        #[arg(long, default_value = "info")]
        level: LogLevel,
    },
    /// Ask a yes/no question; exits 0 for yes and 1 otherwise.
    Confirm { prompt: String },
    /// Ask for one line of text and echo it back.
    Ask { prompt: String },
    /// Clear the screen, or only the previous line.
    Clear {
        #[arg(long = "last-line")]
        last_line: bool,
    },
    /// Step through every widget as a small init/update/draw application.
    Demo {
        #[arg(long, default_value_t = 4)]
        frames: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use ansiframe::text::Align;
    use clap::Parser;

    #[test]
    fn table_parses_header_rows_and_alignment() {
        let args = Args::parse_from([
            "ansiframe",
            "table",
            "--title",
            "Users",
            "--header",
            "ID,Name",
            "--row",
            "1,Al",
            "--row",
            "22,Bob",
            "--align",
            "right,left",
        ]);
        match args.command {
            Command::Table {
                title,
                header,
                rows,
                align,
            } => {
                assert_eq!(title, "Users");
                assert_eq!(header, vec!["ID", "Name"]);
                assert_eq!(rows, vec!["1,Al", "22,Bob"]);
                assert_eq!(align, vec![Align::Right, Align::Left]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn box_accepts_negative_fix_offset() {
        let args = Args::parse_from(["ansiframe", "box", "hi", "--fix-offset", "-2"]);
        match args.command {
            Command::Box { fix_offset, .. } => assert_eq!(fix_offset, -2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_color_is_global() {
        let args = Args::parse_from(["ansiframe", "divider", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(Args::try_parse_from(["ansiframe", "title", "x", "--color", "teal"]).is_err());
    }
}
