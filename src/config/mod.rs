// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Toast lifetime, stacking geometry and transitions
//! - `[verification]` - Resend cooldowns and the verification server
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `ICED_TOASTS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.notifications.duration_ms = Some(5000);
//!
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```
//!
//! The bundled demo only reads settings. Saving is library API for hosts
//! that let users edit them.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when the settings file exists but cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Default auto-dismiss delay in milliseconds.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Gap between stacked toasts.
    #[serde(default = "default_margin", skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,

    /// Offset of the first toast from the top edge.
    #[serde(default = "default_base_offset", skip_serializing_if = "Option::is_none")]
    pub base_offset: Option<f32>,

    /// Delay before the entry animation, in milliseconds.
    #[serde(default = "default_enter_delay_ms", skip_serializing_if = "Option::is_none")]
    pub enter_delay_ms: Option<u64>,

    /// Exit transition length, in milliseconds.
    #[serde(
        default = "default_exit_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_transition_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            margin: default_margin(),
            base_offset: default_base_offset(),
            enter_delay_ms: default_enter_delay_ms(),
            exit_transition_ms: default_exit_transition_ms(),
        }
    }
}

impl NotificationsConfig {
    #[must_use]
    pub fn duration(&self) -> Duration {
        let ms = self
            .duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .min(MAX_TOAST_DURATION_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn margin(&self) -> f32 {
        clamp_spacing(self.margin, DEFAULT_TOAST_MARGIN)
    }

    #[must_use]
    pub fn base_offset(&self) -> f32 {
        clamp_spacing(self.base_offset, DEFAULT_TOAST_BASE_OFFSET)
    }

    #[must_use]
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(
            self.enter_delay_ms
                .unwrap_or(DEFAULT_ENTER_DELAY_MS)
                .min(MAX_TRANSITION_MS),
        )
    }

    #[must_use]
    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(
            self.exit_transition_ms
                .unwrap_or(DEFAULT_EXIT_TRANSITION_MS)
                .min(MAX_TRANSITION_MS),
        )
    }
}

/// Email verification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationConfig {
    /// Base URL of the server handling resend requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    /// Cooldown between resends, in seconds.
    #[serde(
        default = "default_resend_cooldown_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub resend_cooldown_secs: Option<u32>,

    /// Initial cooldown after a failed verification, in seconds.
    #[serde(
        default = "default_failed_verification_cooldown_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub failed_verification_cooldown_secs: Option<u32>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            resend_cooldown_secs: default_resend_cooldown_secs(),
            failed_verification_cooldown_secs: default_failed_verification_cooldown_secs(),
        }
    }
}

impl VerificationConfig {
    #[must_use]
    pub fn resend_cooldown_secs(&self) -> u32 {
        self.resend_cooldown_secs
            .unwrap_or(DEFAULT_RESEND_COOLDOWN_SECS)
            .clamp(MIN_COOLDOWN_SECS, MAX_COOLDOWN_SECS)
    }

    /// Initial cooldown after a failed verification; never longer than the
    /// regular resend cooldown.
    #[must_use]
    pub fn failed_verification_cooldown_secs(&self) -> u32 {
        self.failed_verification_cooldown_secs
            .unwrap_or(DEFAULT_FAILED_VERIFICATION_COOLDOWN_SECS)
            .clamp(MIN_COOLDOWN_SECS, self.resend_cooldown_secs())
    }
}

/// Root configuration, one field per `settings.toml` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub verification: VerificationConfig,
}

// =============================================================================
// Serde defaults
// =============================================================================

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_margin() -> Option<f32> {
    Some(DEFAULT_TOAST_MARGIN)
}

fn default_base_offset() -> Option<f32> {
    Some(DEFAULT_TOAST_BASE_OFFSET)
}

fn default_enter_delay_ms() -> Option<u64> {
    Some(DEFAULT_ENTER_DELAY_MS)
}

fn default_exit_transition_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_TRANSITION_MS)
}

fn default_resend_cooldown_secs() -> Option<u32> {
    Some(DEFAULT_RESEND_COOLDOWN_SECS)
}

fn default_failed_verification_cooldown_secs() -> Option<u32> {
    Some(DEFAULT_FAILED_VERIFICATION_COOLDOWN_SECS)
}

/// Non-finite or negative spacing falls back to the default.
fn clamp_spacing(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v.min(MAX_TOAST_SPACING),
        _ => default,
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string())),
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration under `base_dir`, or the resolved default
/// directory when `None`.
///
/// Not called by the demo application; provided for hosts that persist
/// edited settings.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
