//! TOML-based application configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::sizing::panel::{
    DEFAULT_AREA_M2, DEFAULT_EFFICIENCY, DEFAULT_MAX_PANEL_POWER_KW, DEFAULT_PEAK_SUN_HOURS,
    PanelModel,
};

/// Top-level configuration parsed from TOML.
///
/// All fields have defaults. Load from TOML with
/// [`AppConfig::from_toml_file`] or use [`AppConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Panel physical constants and output cap.
    #[serde(default)]
    pub panel: PanelConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Panel physical constants and output cap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Panel surface area (m², must be > 0).
    pub area_m2: f64,
    /// Conversion efficiency (0.0 exclusive to 1.0 inclusive).
    pub efficiency: f64,
    /// Average peak sun hours per day (must be >= 0).
    pub peak_sun_hours: f64,
    /// Cap on the rated panel output (kW, must be > 0).
    pub max_panel_power_kw: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            area_m2: DEFAULT_AREA_M2,
            efficiency: DEFAULT_EFFICIENCY,
            peak_sun_hours: DEFAULT_PEAK_SUN_HOURS,
            max_panel_power_kw: DEFAULT_MAX_PANEL_POWER_KW,
        }
    }
}

impl PanelConfig {
    pub fn model(&self) -> PanelModel {
        PanelModel {
            area_m2: self.area_m2,
            efficiency: self.efficiency,
            peak_sun_hours: self.peak_sun_hours,
            max_panel_power_kw: self.max_panel_power_kw,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind: String,
    pub port: u16,
    /// Directory holding `<diagram id>.html` resources.
    pub diagrams_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3000,
            diagrams_dir: PathBuf::from("static/diagrams"),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"panel.max_panel_power_kw"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl AppConfig {
    /// Parses configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let p = &self.panel;

        if !(p.area_m2 > 0.0) {
            errors.push(ConfigError {
                field: "panel.area_m2".into(),
                message: "must be > 0".into(),
            });
        }
        if !(p.efficiency > 0.0 && p.efficiency <= 1.0) {
            errors.push(ConfigError {
                field: "panel.efficiency".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if !(p.peak_sun_hours >= 0.0) {
            errors.push(ConfigError {
                field: "panel.peak_sun_hours".into(),
                message: "must be >= 0".into(),
            });
        }
        if !(p.max_panel_power_kw > 0.0) {
            errors.push(ConfigError {
                field: "panel.max_panel_power_kw".into(),
                message: format!("must be > 0, got {}", p.max_panel_power_kw),
            });
        }

        if self.server.bind.trim().is_empty() {
            errors.push(ConfigError {
                field: "server.bind".into(),
                message: "must not be empty".into(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        let errors = AppConfig::default().validate();
        assert!(errors.is_empty(), "defaults should be valid: {errors:?}");
    }

    #[test]
    fn default_panel_model_matches_constants() {
        let model = AppConfig::default().panel.model();
        assert_eq!(model, PanelModel::default());
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[panel]
area_m2 = 2.0
efficiency = 0.2
peak_sun_hours = 4.5
max_panel_power_kw = 0.6

[server]
bind = "127.0.0.1"
port = 8080
diagrams_dir = "/srv/diagrams"
"#;
        let cfg = AppConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.panel.max_panel_power_kw), Some(0.6));
        assert_eq!(cfg.as_ref().map(|c| c.server.port), Some(8080));
        assert_eq!(
            cfg.as_ref().map(|c| c.server.diagrams_dir.clone()),
            Some(PathBuf::from("/srv/diagrams"))
        );
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[panel]
max_panel_power_kw = 0.4
"#;
        let cfg = AppConfig::from_toml_str(toml).ok();
        assert_eq!(cfg.as_ref().map(|c| c.panel.max_panel_power_kw), Some(0.4));
        assert_eq!(cfg.as_ref().map(|c| c.panel.area_m2), Some(DEFAULT_AREA_M2));
        assert_eq!(cfg.as_ref().map(|c| c.server.port), Some(3000));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[panel]
wattage = 400
"#;
        assert!(AppConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn validation_catches_zero_cap() {
        let mut cfg = AppConfig::default();
        cfg.panel.max_panel_power_kw = 0.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "panel.max_panel_power_kw"));
    }

    #[test]
    fn validation_catches_bad_efficiency() {
        let mut cfg = AppConfig::default();
        cfg.panel.efficiency = 1.5;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "panel.efficiency"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::from_toml_file(Path::new("/nonexistent/solar.toml")).unwrap_err();
        assert_eq!(err.field, "config");
        assert!(err.message.contains("/nonexistent/solar.toml"));
    }
}
