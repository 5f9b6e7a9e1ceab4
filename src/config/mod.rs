//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`NO_COLOR`, `ANSIFRAME_COLOR`,
//!    `ANSIFRAME_DIVIDER_WIDTH`, `ANSIFRAME_BANNER_WIDTH`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./ansiframe.toml in the current directory
//! 4. $XDG_CONFIG_HOME/ansiframe/ansiframe.toml (or the platform config dir)
//! 5. Built-in defaults
//!
//! The rendering API never reads configuration itself; only the console
//! writer and the binary consult it for default widths and color.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod defaults;
mod env;
mod sources;
mod types;

use env::apply_runtime_env_overrides;
use sources::{config_root_dir, read_config_text_with_sources};
use types::FileConfig;
pub use types::{Config, DisplayConfig, LayoutConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    tracing::debug!(?source, "resolved configuration source");
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = parsed.resolve()?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BoxStyle;
    use std::collections::BTreeMap;
    use std::io;

    fn files(entries: &[(&str, &str)]) -> BTreeMap<PathBuf, String> {
        entries
            .iter()
            .map(|(path, text)| (PathBuf::from(path), text.to_string()))
            .collect()
    }

    fn load_with(
        path_override: Option<&str>,
        fs: &BTreeMap<PathBuf, String>,
        env: &[(&str, &str)],
    ) -> Result<Config, ConfigError> {
        load_config_from_sources(
            path_override,
            |path| {
                fs.get(path)
                    .cloned()
                    .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
            },
            |name| {
                env.iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_string())
            },
            || Some(PathBuf::from("/cfg")),
        )
    }

    #[test]
    fn no_sources_yields_defaults() {
        let config = load_with(None, &files(&[]), &[]).expect("defaults");
        assert_eq!(config, Config::default());
        assert!(config.display.color);
        assert_eq!(config.layout.divider_width, 50);
        assert_eq!(config.layout.banner_width, 80);
    }

    #[test]
    fn local_file_wins_over_global() {
        let fs = files(&[
            ("ansiframe.toml", "[layout]\ndivider_width = 30\n"),
            ("/cfg/ansiframe/ansiframe.toml", "[layout]\ndivider_width = 70\n"),
        ]);
        let config = load_with(None, &fs, &[]).expect("load");
        assert_eq!(config.layout.divider_width, 30);
    }

    #[test]
    fn global_file_used_when_no_local() {
        let fs = files(&[(
            "/cfg/ansiframe/ansiframe.toml",
            "[layout]\nbox_style = \"double\"\n",
        )]);
        let config = load_with(None, &fs, &[]).expect("load");
        assert_eq!(config.layout.box_style, BoxStyle::Double);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_with(Some("missing.toml"), &files(&[]), &[]).unwrap_err();
        assert!(err.to_string().starts_with("io:"), "got: {err}");
    }

    #[test]
    fn explicit_path_wins_over_local() {
        let fs = files(&[
            ("ansiframe.toml", "[display]\ncolor = true\n"),
            ("custom.toml", "[display]\ncolor = false\n"),
        ]);
        let config = load_with(Some("custom.toml"), &fs, &[]).expect("load");
        assert!(!config.display.color);
    }

    #[test]
    fn env_overrides_file_values() {
        let fs = files(&[("ansiframe.toml", "[layout]\nbanner_width = 60\n")]);
        let config =
            load_with(None, &fs, &[("ANSIFRAME_BANNER_WIDTH", "100")]).expect("load");
        assert_eq!(config.layout.banner_width, 100);
    }

    #[test]
    fn no_color_disables_color_and_explicit_switch_wins() {
        let config = load_with(None, &files(&[]), &[("NO_COLOR", "")]).expect("load");
        assert!(!config.display.color);
        let config = load_with(
            None,
            &files(&[]),
            &[("NO_COLOR", "1"), ("ANSIFRAME_COLOR", "yes")],
        )
        .expect("load");
        assert!(config.display.color);
    }

    #[test]
    fn invalid_env_width_is_rejected() {
        let err = load_with(None, &files(&[]), &[("ANSIFRAME_DIVIDER_WIDTH", "0")]).unwrap_err();
        assert!(
            err.to_string().contains("ANSIFRAME_DIVIDER_WIDTH"),
            "got: {err}"
        );
    }

    #[test]
    fn unknown_box_style_is_invalid_config() {
        let fs = files(&[("ansiframe.toml", "[layout]\nbox_style = \"dotted\"\n")]);
        let err = load_with(None, &fs, &[]).unwrap_err();
        assert!(err.to_string().starts_with("invalid config:"), "got: {err}");
    }

    #[test]
    fn malformed_toml_is_reported() {
        let fs = files(&[("ansiframe.toml", "[layout\n")]);
        let err = load_with(None, &fs, &[]).unwrap_err();
        assert!(err.to_string().starts_with("toml:"), "got: {err}");
    }
}
