//! Environment overrides.
//!
//! `NO_COLOR` follows the no-color.org convention: any value disables color.
//! `ANSIFRAME_COLOR` can force color on or off and wins over `NO_COLOR`.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if env_lookup("NO_COLOR").is_some() {
        config.display.color = false;
    }
    if let Some(raw) = env_lookup("ANSIFRAME_COLOR") {
        config.display.color = parse_switch("ANSIFRAME_COLOR", &raw)?;
    }
    if let Some(raw) = env_lookup("ANSIFRAME_DIVIDER_WIDTH") {
        config.layout.divider_width = parse_width("ANSIFRAME_DIVIDER_WIDTH", &raw)?;
    }
    if let Some(raw) = env_lookup("ANSIFRAME_BANNER_WIDTH") {
        config.layout.banner_width = parse_width("ANSIFRAME_BANNER_WIDTH", &raw)?;
    }
    Ok(())
}

fn parse_switch(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {name} value `{raw}`: expected true/false"
        ))),
    }
}

fn parse_width(name: &str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {name} value `{raw}`: expected positive integer columns"
        ))),
    }
}
