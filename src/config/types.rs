//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML layout; `Config` is the resolved runtime
//! form with string selectors already parsed.

use serde::Deserialize;

use super::defaults::{DEFAULT_BANNER_WIDTH, DEFAULT_COLOR, DEFAULT_DIVIDER_WIDTH};
use crate::error::ConfigError;
use crate::layout::BoxStyle;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Emit ANSI styling. When false, output is stripped to plain text.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
        }
    }
}

/// Default geometry used by console helpers that take no explicit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub divider_width: usize,
    pub banner_width: usize,
    pub box_style: BoxStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            divider_width: DEFAULT_DIVIDER_WIDTH,
            banner_width: DEFAULT_BANNER_WIDTH,
            box_style: BoxStyle::Single,
        }
    }
}

/// On-disk TOML shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub display: FileDisplayConfig,
    pub layout: FileLayoutConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileDisplayConfig {
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileLayoutConfig {
    pub divider_width: Option<usize>,
    pub banner_width: Option<usize>,
    pub box_style: Option<String>,
}

impl FileConfig {
    /// Fill unset fields from defaults and parse selectors.
    pub(super) fn resolve(self) -> Result<Config, ConfigError> {
        let defaults = LayoutConfig::default();
        let box_style = match self.layout.box_style.as_deref() {
            Some(raw) => raw
                .parse::<BoxStyle>()
                .map_err(|e| ConfigError::Invalid(format!("layout.box_style: {e}")))?,
            None => defaults.box_style,
        };
        Ok(Config {
            display: DisplayConfig {
                color: self.display.color.unwrap_or(DEFAULT_COLOR),
            },
            layout: LayoutConfig {
                divider_width: self.layout.divider_width.unwrap_or(defaults.divider_width),
                banner_width: self.layout.banner_width.unwrap_or(defaults.banner_width),
                box_style,
            },
        })
    }
}
