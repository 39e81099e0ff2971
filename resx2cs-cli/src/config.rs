//! Optional TOML configuration file.
//!
//! ```toml
//! input_dir = "src/MyApp"
//! out_dir = "src/MyApp/Generated"
//! namespace = "MyApp.Text"
//! internal_access_modifier = true
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use resx2cs::{AccessModifier, BatchOptions, paths};
use serde::Deserialize;

/// Settings for one run, from the config file, the command line, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub namespace: Option<String>,
    pub internal_access_modifier: bool,
}

impl Config {
    /// Parses TOML text. Paths stay as written.
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Invalid configuration: {}", e))
    }

    /// Reads `path` and resolves its relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path).map_err(|e| {
            format!(
                "The '{}' configuration file not found or unreadable: {}",
                path.display(),
                e
            )
        })?;
        let config = Self::from_toml(&text)?;
        let base = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Ok(config.resolved_against(base))
    }

    fn resolved_against(self, base: &Path) -> Self {
        Self {
            input_dir: self.input_dir.map(|p| paths::to_absolute_path(base, p)),
            out_dir: self.out_dir.map(|p| paths::to_absolute_path(base, p)),
            ..self
        }
    }

    /// Combines `self` (command line) with `file`: values given on the
    /// command line win; the internal switch is on if either turns it on.
    pub fn merge(self, file: Config) -> Config {
        Config {
            input_dir: self.input_dir.or(file.input_dir),
            out_dir: self.out_dir.or(file.out_dir),
            namespace: self.namespace.or(file.namespace),
            internal_access_modifier: self.internal_access_modifier
                || file.internal_access_modifier,
        }
    }

    /// Directory to convert; empty means the current directory.
    pub fn input_dir(&self) -> PathBuf {
        self.input_dir.clone().unwrap_or_default()
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions::new()
            .with_output_dir(self.out_dir.clone())
            .with_namespace(self.namespace.clone())
            .with_access_modifier(AccessModifier::from_internal_flag(
                self.internal_access_modifier,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
            input_dir = "res"
            namespace = "Acme"
            internal_access_modifier = true
            "#,
        )
        .unwrap();
        assert_eq!(config.input_dir, Some(PathBuf::from("res")));
        assert_eq!(config.out_dir, None);
        assert_eq!(config.namespace.as_deref(), Some("Acme"));
        assert!(config.internal_access_modifier);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = Config::from_toml("output = \"x\"").unwrap_err();
        assert!(err.starts_with("Invalid configuration"));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resx2cs.toml");
        fs::write(&path, "input_dir = \"src\"\nout_dir = \"/abs/out\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.input_dir, Some(paths::clean(&temp_dir.path().join("src"))));
        assert_eq!(config.out_dir, Some(PathBuf::from("/abs/out")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.contains("not found or unreadable"));
    }

    #[test]
    fn test_command_line_wins() {
        let cli = Config {
            namespace: Some("Cli".to_string()),
            ..Config::default()
        };
        let file = Config {
            input_dir: Some(PathBuf::from("/from/file")),
            namespace: Some("File".to_string()),
            internal_access_modifier: true,
            ..Config::default()
        };
        let merged = cli.merge(file);
        assert_eq!(merged.namespace.as_deref(), Some("Cli"));
        assert_eq!(merged.input_dir(), PathBuf::from("/from/file"));
        assert_eq!(
            merged.batch_options().access_modifier,
            AccessModifier::Internal
        );
    }
}
