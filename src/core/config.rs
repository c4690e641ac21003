//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.squid-master/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! template is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::inference::LatencyPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SquidConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub idle_timeout_ms: Option<u64>,
    pub per_char_latency_ms: Option<u64>,
    pub max_latency_ms: Option<u64>,
    pub notice_duration_ms: Option<u64>,
    pub reveal_char_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub placeholder: Option<String>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub idle_timeout_ms: Option<u64>,
    pub max_latency_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 500;
pub const DEFAULT_PER_CHAR_LATENCY_MS: u64 = 50;
pub const DEFAULT_MAX_LATENCY_MS: u64 = 3000;
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 2000;
pub const DEFAULT_REVEAL_CHAR_MS: u64 = 50;

pub const DEFAULT_TITLE: &str = "Squid Master";
pub const DEFAULT_TAGLINE: &str = "Squid Master will help you handle everything all at once.";
pub const DEFAULT_PLACEHOLDER: &str = "Please write a description of your problem...";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub idle_timeout: Duration,
    pub latency: LatencyPolicy,
    pub notice_duration: Duration,
    pub reveal_char_interval: Duration,
    pub title: String,
    pub tagline: String,
    pub placeholder: String,
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

/// Returns the path to `~/.squid-master/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".squid-master").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise from the default path.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an error: the user asked for it by name.
pub fn load_config(explicit: Option<&Path>) -> Result<SquidConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SquidConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SquidConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<SquidConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SquidConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Squid Master Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [timing]
# idle_timeout_ms = 500          # Quiet period before "Typing..." settles (or SQUID_IDLE_TIMEOUT_MS)
# per_char_latency_ms = 50       # Simulated thinking time per input character
# max_latency_ms = 3000          # Cap on simulated thinking time (or SQUID_MAX_LATENCY_MS)
# notice_duration_ms = 2000      # How long notices stay on screen
# reveal_char_ms = 50            # Typewriter speed for the response

# [display]
# title = "Squid Master"
# tagline = "Squid Master will help you handle everything all at once."
# placeholder = "Please write a description of your problem..."
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SquidConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |var| std::env::var(var).ok())
}

/// `resolve` with the environment supplied by `env`.
fn resolve_with_env(
    config: &SquidConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let timing = &config.timing;

    // Idle timeout: CLI → env → config → default
    let idle_timeout_ms = cli
        .idle_timeout_ms
        .or_else(|| env_millis(&env, "SQUID_IDLE_TIMEOUT_MS"))
        .or(timing.idle_timeout_ms)
        .unwrap_or(DEFAULT_IDLE_TIMEOUT_MS);

    // Latency cap: CLI → env → config → default
    let max_latency_ms = cli
        .max_latency_ms
        .or_else(|| env_millis(&env, "SQUID_MAX_LATENCY_MS"))
        .or(timing.max_latency_ms)
        .unwrap_or(DEFAULT_MAX_LATENCY_MS);

    let display = &config.display;

    ResolvedConfig {
        idle_timeout: Duration::from_millis(idle_timeout_ms),
        latency: LatencyPolicy {
            per_char: Duration::from_millis(
                timing
                    .per_char_latency_ms
                    .unwrap_or(DEFAULT_PER_CHAR_LATENCY_MS),
            ),
            cap: Duration::from_millis(max_latency_ms),
        },
        notice_duration: Duration::from_millis(
            timing
                .notice_duration_ms
                .unwrap_or(DEFAULT_NOTICE_DURATION_MS),
        ),
        reveal_char_interval: Duration::from_millis(
            timing.reveal_char_ms.unwrap_or(DEFAULT_REVEAL_CHAR_MS),
        ),
        title: display
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        tagline: display
            .tagline
            .clone()
            .unwrap_or_else(|| DEFAULT_TAGLINE.to_string()),
        placeholder: display
            .placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
    }
}

/// Read a millisecond value from the environment, ignoring garbage.
fn env_millis(env: impl Fn(&str) -> Option<String>, var: &str) -> Option<u64> {
    let raw = env(var)?;
    match raw.trim().parse() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", var, raw, e);
            None
        }
    }
}
