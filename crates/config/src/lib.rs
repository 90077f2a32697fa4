pub mod schema;
pub mod watcher;

pub use schema::{Layout, NotchConfig, ThemeConfig, TimingConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use notch_core::{NotchError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `NotchConfig::default()` if
/// the file doesn't exist so the notch always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<NotchConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(NotchConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| NotchError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| NotchError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("notch").join("notch.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.window.layout, Layout::Classic);
        assert_eq!(cfg.timing.proximity_ms, 50);
        assert!(cfg.display.show_time);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[window]\nlayout = \"slim\"\nwidth = 260\n\n[display]\nshow_cpu = true\n"
        )
        .unwrap();

        let cfg = load(file.path()).unwrap();
        let g = cfg.window.geometry();

        assert_eq!(g.width, 260.0);
        assert_eq!(g.collapsed_height, 24.0);
        assert_eq!(cfg.window.hover_buffer, 10);
        assert!(cfg.display.show_cpu);
        assert!(cfg.display.show_time);
        assert!(!cfg.window.layout.has_options_dialog());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window\nlayout = ").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, NotchError::Config(_)));
    }

    #[test]
    fn unknown_layout_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\nlayout = \"round\"").unwrap();

        assert!(load(file.path()).is_err());
    }
}
