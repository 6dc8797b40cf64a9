//! Configuration loader
//!
//! Loads application configuration from a file, then layers environment
//! variable overrides on top.
//!
//! ## Loading Strategy
//! 1. `FLEETBOOK_CONFIG` names an explicit file; it must exist
//! 2. Otherwise probe the standard locations for a config file
//! 3. Otherwise start from [`Config::default`]
//! 4. Apply `FLEETBOOK_*` overrides
//!
//! ## Environment Variables
//! - `FLEETBOOK_CONFIG`: Path to a `.toml` or `.json` config file
//! - `FLEETBOOK_TIME_ZONE`: IANA zone or fixed offset for "today" and
//!   instant normalization (empty means process-local)
//! - `FLEETBOOK_SCAN_ORDER`: `input` or `chronological`
//! - `FLEETBOOK_SEARCH_HONOR_BLOCKED_DAYS`: Exclude blocked listings from
//!   search (true/false)
//! - `FLEETBOOK_AUTO_CONFIRM`: Store accepted bookings as confirmed
//!   (true/false)
//! - `FLEETBOOK_LOG_LEVEL`: Default tracing filter when `RUST_LOG` is unset
//! - `FLEETBOOK_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes `fleetbook.toml`, `fleetbook.json`, `config.toml` and
//! `config.json` (in that order) in:
//! 1. The current working directory
//! 2. Its parent and grandparent directories
//! 3. The directory holding the executable

use std::path::{Path, PathBuf};

use fleetbook_domain::constants::ENV_PREFIX;
use fleetbook_domain::{Config, FleetbookError, Result, ScanOrder};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["fleetbook.toml", "fleetbook.json", "config.toml", "config.json"];

/// Load configuration using the full strategy described in the module docs.
///
/// # Errors
/// Returns `FleetbookError::Config` if:
/// - `FLEETBOOK_CONFIG` points at a missing file
/// - The selected file cannot be read or parsed
/// - An environment override has an invalid value
pub fn load() -> Result<Config> {
    let config = match std::env::var(env_key("CONFIG")).ok().filter(|p| !p.trim().is_empty()) {
        Some(path) => load_from_file(Some(PathBuf::from(path)))?,
        None => match probe_config_paths() {
            Some(path) => load_from_file(Some(path))?,
            None => {
                tracing::info!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections and fields missing from the file take their defaults.
///
/// # Errors
/// Returns `FleetbookError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FleetbookError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FleetbookError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FleetbookError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FleetbookError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FleetbookError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(FleetbookError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
        dirs.push(cwd.join("../.."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Apply `FLEETBOOK_*` environment overrides to `config`.
///
/// Unset variables leave the corresponding field untouched.
///
/// # Errors
/// Returns `FleetbookError::Config` for an unknown scan order or a boolean
/// variable that is not one of the accepted spellings.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(zone) = env_var("TIME_ZONE") {
        config.engine.time_zone = Some(zone).filter(|z| !z.is_empty());
    }
    if let Some(order) = env_var("SCAN_ORDER") {
        config.engine.scan_order = order
            .parse::<ScanOrder>()
            .map_err(|e| FleetbookError::Config(format!("{}: {e}", env_key("SCAN_ORDER"))))?;
    }
    if let Some(honor) = env_bool("SEARCH_HONOR_BLOCKED_DAYS")? {
        config.search.honor_blocked_days = honor;
    }
    if let Some(auto_confirm) = env_bool("AUTO_CONFIRM")? {
        config.booking.auto_confirm = auto_confirm;
    }
    if let Some(level) = env_var("LOG_LEVEL").filter(|l| !l.is_empty()) {
        config.logging.level = level;
    }
    if let Some(json) = env_bool("LOG_JSON")? {
        config.logging.json = json;
    }

    tracing::debug!(?config, "Configuration resolved");
    Ok(config)
}

fn env_key(name: &str) -> String {
    format!("{ENV_PREFIX}{name}")
}

/// Trimmed value of `FLEETBOOK_{name}`, if set.
fn env_var(name: &str) -> Option<String> {
    std::env::var(env_key(name)).ok().map(|v| v.trim().to_string())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Errors
/// Returns `FleetbookError::Config` for any other value.
fn env_bool(name: &str) -> Result<Option<bool>> {
    let Some(raw) = env_var(name) else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(FleetbookError::Config(format!(
            "{} must be a boolean, got '{raw}'",
            env_key(name)
        ))),
    }
}
