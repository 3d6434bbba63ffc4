//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.trivia/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::history::DEFAULT_DISPLAY_LIMIT;
use crate::trivia::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::trivia::{Difficulty, MAX_AMOUNT, MIN_AMOUNT};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TriviaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub amount: Option<u8>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HistoryConfig {
    pub display_limit: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_AMOUNT: u8 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub amount: u8,
    pub difficulty: Option<Difficulty>,
    pub category: Option<u32>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub history_display_limit: usize,
}

/// Values passed on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub amount: Option<u8>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<u32>,
    pub base_url: Option<String>,
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

/// Returns the path to `~/.trivia/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".trivia").join("config.toml"))
}

/// Load config from `~/.trivia/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TriviaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TriviaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TriviaConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<TriviaConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TriviaConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TriviaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Trivia Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# amount = 10                        # Questions per quiz (1-50)
# difficulty = "medium"              # "easy", "medium", "hard"; omit for any
# category = 9                       # Category id; omit for any

# [api]
# base_url = "https://opentdb.com"   # Or set TRIVIA_BASE_URL env var
# timeout_secs = 10

# [history]
# display_limit = 5                  # Recent quizzes shown on the home screen
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TriviaConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Amount: CLI → env → config → default, always clamped to the API range
    let amount = cli
        .amount
        .or_else(|| {
            std::env::var("TRIVIA_AMOUNT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
        })
        .or(config.general.amount)
        .unwrap_or(DEFAULT_AMOUNT)
        .clamp(MIN_AMOUNT, MAX_AMOUNT);

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("TRIVIA_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig {
        amount,
        difficulty: cli.difficulty.or(config.general.difficulty),
        category: cli.category.or(config.general.category),
        base_url,
        timeout_secs: config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        history_display_limit: config
            .history
            .display_limit
            .unwrap_or(DEFAULT_DISPLAY_LIMIT),
    }
}
