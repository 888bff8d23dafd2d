use std::path::PathBuf;

use anyhow::Result;
use monthview_core::WeekStart;
use serde::Deserialize;

/// Global configuration at ~/.config/monthview/config.toml
///
/// Every field is optional; command-line flags take precedence over
/// configured values.
#[derive(Deserialize, Clone, Default)]
pub struct CliConfig {
    /// IANA timezone name used when --timezone is not given
    pub timezone: Option<String>,

    /// Locale tag for labels (e.g. "de")
    pub locale: Option<String>,

    /// "monday" (default) or "sunday"
    pub week_start: Option<String>,

    /// Event files loaded when --events is not given
    #[serde(default)]
    pub event_files: Vec<PathBuf>,
}

impl CliConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("monthview");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, or defaults if none exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {}", path.display(), e))
    }

    /// Files given on the command line win over configured defaults.
    pub fn event_files<'a>(&'a self, flag: &'a [PathBuf]) -> &'a [PathBuf] {
        if flag.is_empty() {
            &self.event_files
        } else {
            flag
        }
    }

    pub fn week_start(&self) -> WeekStart {
        match self.week_start.as_deref() {
            Some("sunday") => WeekStart::Sunday,
            _ => WeekStart::Monday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: CliConfig = toml::from_str(
            r#"
            timezone = "Europe/Zurich"
            locale = "de"
            week_start = "sunday"
            event_files = ["~/events/vereine.ics"]
            "#,
        )
        .unwrap();

        assert_eq!(config.timezone.as_deref(), Some("Europe/Zurich"));
        assert_eq!(config.week_start(), WeekStart::Sunday);
        assert_eq!(config.event_files.len(), 1);
    }

    #[test]
    fn test_empty_config_defaults_to_monday() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.week_start(), WeekStart::Monday);
        assert!(config.timezone.is_none());
    }
}
