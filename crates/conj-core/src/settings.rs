//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Environment variable overriding `data.dir`.
pub const DATA_DIR_ENV: &str = "CONJ_DATA_DIR";

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub data: DataSettings,
    pub lookup: LookupSettings,
    pub conjugation: ConjugationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    pub dir: PathBuf,
    pub user_dir: PathBuf,
}

impl DataSettings {
    /// `dir`, unless the environment overrides it.
    pub fn resolved_dir(&self) -> PathBuf {
        std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.dir.clone())
    }

    /// `$HOME/<user_dir>`, or `None` when `HOME` is unset.
    pub fn resolved_user_dir(&self) -> Option<PathBuf> {
        let home = std::env::var_os("HOME").filter(|v| !v.is_empty())?;
        Some(PathBuf::from(home).join(&self.user_dir))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupSettings {
    pub accent_tolerant: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConjugationSettings {
    pub include_pronouns: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.data.dir.as_os_str().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "data.dir".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.data.user_dir.is_absolute() {
        return Err(SettingsError::InvalidValue {
            field: "data.user_dir".to_string(),
            reason: "must be relative to $HOME".to_string(),
        });
    }
    Ok(())
}
