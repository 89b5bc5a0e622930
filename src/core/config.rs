//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.imc/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The input limits are advisory display hints only — they are shown in the
//! field titles and never gate the calculation.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ImcConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_icons: Option<bool>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LimitsConfig {
    pub height_min: Option<f64>,
    pub height_max: Option<f64>,
    pub weight_min: Option<f64>,
    pub weight_max: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PLACEHOLDER: &str = "?";
pub const DEFAULT_HEIGHT_MIN: f64 = 1.0;
pub const DEFAULT_HEIGHT_MAX: f64 = 300.0;
pub const DEFAULT_WEIGHT_MIN: f64 = 1.0;
pub const DEFAULT_WEIGHT_MAX: f64 = 1000.0;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Advisory bounds for one input field, rendered as a hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimits {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub show_icons: bool,
    pub placeholder: String,
    pub height_limits: FieldLimits,
    pub weight_limits: FieldLimits,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.imc/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".imc").join("config.toml"))
}

/// Load config from the given path, or the default `~/.imc/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ImcConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(override_path: Option<&Path>) -> Result<ImcConfig, ConfigError> {
    let path = match override_path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ImcConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ImcConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ImcConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# imc Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [display]
# show_icons = true          # severity icons next to the classification
# placeholder = "?"          # shown while the BMI is not computable

# [limits]                   # advisory hints shown in the field titles
# height_min = 1.0
# height_max = 300.0
# weight_min = 1.0
# weight_max = 1000.0
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_no_icons` is the `--no-icons` flag (false = not specified).
pub fn resolve(config: &ImcConfig, cli_no_icons: bool) -> ResolvedConfig {
    // Icons: CLI → env → config → default (on)
    let show_icons = if cli_no_icons {
        false
    } else if std::env::var("IMC_NO_ICONS").is_ok_and(|v| v == "1") {
        false
    } else {
        config.display.show_icons.unwrap_or(true)
    };

    let placeholder = config
        .display
        .placeholder
        .clone()
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    ResolvedConfig {
        show_icons,
        placeholder,
        height_limits: FieldLimits {
            min: config.limits.height_min.unwrap_or(DEFAULT_HEIGHT_MIN),
            max: config.limits.height_max.unwrap_or(DEFAULT_HEIGHT_MAX),
        },
        weight_limits: FieldLimits {
            min: config.limits.weight_min.unwrap_or(DEFAULT_WEIGHT_MIN),
            max: config.limits.weight_max.unwrap_or(DEFAULT_WEIGHT_MAX),
        },
    }
}
