//! Default configuration constants.

use crate::style::settings;

/// Config file name looked up locally and under the per-user config root.
pub(super) const CONFIG_FILE_NAME: &str = "ansiframe.toml";
/// Directory under the platform config root.
pub(super) const CONFIG_DIR_NAME: &str = "ansiframe";

pub(super) const DEFAULT_COLOR: bool = true;
pub(super) const DEFAULT_DIVIDER_WIDTH: usize = settings::DIVIDER_WIDTH;
pub(super) const DEFAULT_BANNER_WIDTH: usize = settings::BANNER_WIDTH;
