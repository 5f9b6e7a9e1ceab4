//! Status line kinds and timestamped log formatting.

use crate::style::settings;
use crate::style::Color;
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Kind of one-line status message; fixes its glyph and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    Warning,
    Error,
    Info,
}

impl StatusKind {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => settings::GLYPH_SUCCESS,
            Self::Warning => settings::GLYPH_WARNING,
            Self::Error => settings::GLYPH_ERROR,
            Self::Info => settings::GLYPH_INFO,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Success => settings::COLOR_SUCCESS,
            Self::Warning => settings::COLOR_WARNING,
            Self::Error => settings::COLOR_ERROR,
            Self::Info => settings::COLOR_INFO,
        }
    }
}

impl FromStr for StatusKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" | "ok" => Ok(Self::Success),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            _ => Err(format!(
                "unknown status `{s}` (expected success, warning, error or info)"
            )),
        }
    }
}

/// Severity for [`crate::console::Console::log_message`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Status line used to print a message at this level.
    pub fn status(self) -> StatusKind {
        match self {
            Self::Info => StatusKind::Info,
            Self::Success => StatusKind::Success,
            Self::Warning => StatusKind::Warning,
            Self::Error => StatusKind::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.parse::<StatusKind>()?;
        Ok(match kind {
            StatusKind::Info => Self::Info,
            StatusKind::Success => Self::Success,
            StatusKind::Warning => Self::Warning,
            StatusKind::Error => Self::Error,
        })
    }
}

/// `[YYYY-MM-DD HH:MM:SS] message`
pub fn format_log_line(timestamp: &NaiveDateTime, message: &str) -> String {
    format!(
        "[{}] {message}",
        timestamp.format(settings::LOG_TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn status_kinds_have_fixed_glyph_and_color() {
        assert_eq!(StatusKind::Success.glyph(), "✔");
        assert_eq!(StatusKind::Success.color(), Color::Green);
        assert_eq!(StatusKind::Warning.color(), Color::Yellow);
        assert_eq!(StatusKind::Error.color(), Color::Red);
        assert_eq!(StatusKind::Info.color(), Color::Cyan);
    }

    #[test]
    fn log_levels_map_onto_status_kinds() {
        assert_eq!(LogLevel::Info.status(), StatusKind::Info);
        assert_eq!(LogLevel::Error.status(), StatusKind::Error);
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert!("fatal".parse::<LogLevel>().is_err());
    }

    #[test]
    fn log_line_uses_second_precision_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .expect("valid timestamp");
        assert_eq!(format_log_line(&ts, "started"), "[2024-01-02 03:04:05] started");
    }
}
