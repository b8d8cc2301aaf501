//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shoplist/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! template is generated so users can discover all options.

use chrono::NaiveDate;
use log::{LevelFilter, debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ShoplistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    pub fade_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub hobbies: Option<String>,
    pub birth_place: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub specialization: Option<String>,
}

impl ProfileConfig {
    /// Birth place and date as shown on the profile card, e.g. `"Padang, 18-12-2003"`.
    pub fn birth_line(&self) -> Option<String> {
        let date = self.birth_date.map(|d| d.format("%d-%m-%Y").to_string());
        match (self.birth_place.as_deref(), date) {
            (Some(place), Some(date)) => Some(format!("{place}, {date}")),
            (Some(place), None) => Some(place.to_string()),
            (None, Some(date)) => Some(date),
            (None, None) => None,
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "ShoppingList";
pub const DEFAULT_FADE_MS: u64 = 300;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub fade_ms: u64,
    pub log_level: LevelFilter,
    pub profile: ProfileConfig,
    /// Where the config was read from, if anywhere. Filled in by the caller
    /// from [`load_config`].
    pub source: Option<PathBuf>,
    /// Overrides that failed to parse and were skipped, as `key="value"`.
    pub ignored: Vec<String>,
}

impl Default for ResolvedConfig {
    /// Built-in defaults only; the environment is not consulted.
    fn default() -> Self {
        resolve_with_env(&ShoplistConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub fade_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "config I/O error ({}): {e}", path.display()),
            ConfigError::Parse(path, e) => {
                write!(f, "config parse error ({}): {e}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.shoplist/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shoplist").join("config.toml"))
}

/// Load the config file.
///
/// With an explicit path, a missing file is an error. Without one, the
/// default location is used; if that doesn't exist a commented-out template
/// is generated there and `ShoplistConfig::default()` is returned.
pub fn load_config(explicit: Option<&Path>) -> Result<(ShoplistConfig, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        return parse_file(path).map(|config| (config, Some(path.to_path_buf())));
    }

    let path = match default_config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok((ShoplistConfig::default(), None));
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok((ShoplistConfig::default(), None));
    }

    parse_file(&path).map(|config| (config, Some(path)))
}

fn parse_file(path: &Path) -> Result<ShoplistConfig, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let config = parse_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_str(contents: &str) -> Result<ShoplistConfig, toml::de::Error> {
    toml::from_str(contents)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# shoplist configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "ShoppingList"        # Top bar title on the Home screen
# log_level = "debug"           # off, error, warn, info, debug, trace

# [ui]
# fade_ms = 300                 # Screen fade-in duration, 0 disables (SHOPLIST_FADE_MS)

# [profile]
# name = "Jane Doe"
# student_id = "2211520000"
# hobbies = "Gaming, Design"
# birth_place = "Padang"
# birth_date = "2003-12-18"
# specialization = "Mobile Programming"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ShoplistConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with the environment lookup injected.
pub fn resolve_with_env(
    config: &ShoplistConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut ignored = Vec::new();

    // Fade: CLI → env → config → default
    let env_fade = env("SHOPLIST_FADE_MS")
        .and_then(|v| parse_override("SHOPLIST_FADE_MS", &v, &mut ignored));
    let fade_ms = cli
        .fade_ms
        .or(env_fade)
        .or(config.ui.fade_ms)
        .unwrap_or(DEFAULT_FADE_MS);

    // Log level: env → config → default
    let env_level = env("SHOPLIST_LOG_LEVEL")
        .and_then(|v| parse_override("SHOPLIST_LOG_LEVEL", &v, &mut ignored));
    let file_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|v| parse_override("general.log_level", v, &mut ignored));
    let log_level = env_level.or(file_level).unwrap_or(DEFAULT_LOG_LEVEL);

    let title = config
        .general
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    ResolvedConfig {
        title,
        fade_ms,
        log_level,
        profile: config.profile.clone(),
        source: None,
        ignored,
    }
}

fn parse_override<T: std::str::FromStr>(
    key: &str,
    value: &str,
    ignored: &mut Vec<String>,
) -> Option<T> {
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring invalid value for {key}: {value:?}");
            ignored.push(format!("{key}={value:?}"));
            None
        }
    }
}
