use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::{AimosError, AimosResult};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// CLI-wide settings loaded from config.toml and environment variables.
/// Controls the `aimos` binary itself, not any agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub ansi: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            ansi: std::io::stderr().is_terminal(),
        }
    }
}

impl Settings {
    /// Load settings: defaults < config file < environment.
    ///
    /// An explicitly named file must exist; the default location is only
    /// read when present.
    pub fn load(config_path: Option<&Path>) -> AimosResult<Self> {
        let mut settings = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Parse a TOML settings file; missing keys fall back to defaults
    pub fn from_file(path: &Path) -> AimosResult<Self> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(AimosError::configuration("config file not found", Some(display)));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AimosError::configuration(format!("failed to read config: {}", e), Some(display.clone()))
        })?;
        toml::from_str(&content)
            .map_err(|e| AimosError::configuration(format!("failed to parse TOML: {}", e), Some(display)))
    }

    /// `<config_dir>/aimos/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aimos").join("config.toml"))
    }

    /// Apply `AIMOS_LOG_LEVEL` and `AIMOS_LOG_ANSI` from the given lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> AimosResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("AIMOS_LOG_LEVEL") {
            self.logging.level = val;
        }

        if let Some(val) = lookup("AIMOS_LOG_ANSI") {
            self.logging.ansi = val.parse().map_err(|_| {
                AimosError::configuration(format!("AIMOS_LOG_ANSI must be true or false, got '{}'", val), None)
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> AimosResult<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AimosError::configuration(
                format!(
                    "invalid log level '{}', expected one of: {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
                None,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.logging.ansi, std::io::stderr().is_terminal());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("[logging]\nlevel = \"debug\"\n");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.ansi, LoggingSettings::default().ansi);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = Settings::from_file(Path::new("/nonexistent/aimos/config.toml")).unwrap_err();
        assert!(matches!(err, AimosError::Configuration { path: Some(_), .. }));
    }

    #[test]
    fn test_unreadable_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_file(dir.path()).unwrap_err();
        assert!(matches!(err, AimosError::Configuration { path: Some(_), .. }));
        assert!(err.to_string().contains("failed to read config"));
        assert!(err.user_message().contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let file = write_config("[logging\nlevel = ");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse TOML"));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("[logging]\nlevel = \"debug\"\nansi = true\n");
        let mut settings = Settings::from_file(file.path()).unwrap();

        let env: HashMap<&str, &str> = [("AIMOS_LOG_LEVEL", "error"), ("AIMOS_LOG_ANSI", "false")]
            .into_iter()
            .collect();
        settings
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(settings.logging.level, "error");
        assert!(!settings.logging.ansi);
    }

    #[test]
    fn test_invalid_ansi_override() {
        let mut settings = Settings::default();
        let result = settings.apply_overrides(|key| {
            (key == "AIMOS_LOG_ANSI").then(|| "sometimes".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(settings.validate().is_err());

        settings.logging.level = "INFO".to_string();
        assert!(settings.validate().is_ok());
    }
}
