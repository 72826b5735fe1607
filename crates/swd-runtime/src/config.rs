#![forbid(unsafe_code)]

//! Configuration for a swipe-to-dismiss list.
//!
//! [`DismissConfig`] collects every tunable of the gesture classifier, the
//! undo coordinator and the prompt into one flat struct that can be loaded
//! from TOML or JSON at startup (with the `config` feature).
//!
//! # Loading
//!
//! ```toml
//! # swd.toml
//! undo_policy = "collapsed"
//! swipe_direction = "end"
//! auto_hide_delay_ms = 3000
//! delete_multiple_message = "%d messages archived"
//! ```
//!
//! ```rust,ignore
//! let config = DismissConfig::from_toml_file("swd.toml")?;
//! let config = DismissConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `DismissConfig::default()` matches the component defaults: 8 px slop,
//! 50..=8000 px/s fling, 200 ms animations, 5 s auto-hide, SINGLE undo,
//! BOTH directions.

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use swd_core::{SwipeConfig, SwipeDirection};

use crate::undo::{
    DEFAULT_DELETE_MESSAGE, DEFAULT_DELETE_MULTIPLE_MESSAGE, DEFAULT_UNDO_ALL_LABEL,
    DEFAULT_UNDO_LABEL, PromptMessages, UndoCoordinator, UndoPolicy,
};

/// Default duration of slide and collapse animations.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(200);

// ---------------------------------------------------------------------------
// DismissConfig
// ---------------------------------------------------------------------------

/// Every tunable of a dismiss list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct DismissConfig {
    /// Distance before a touch becomes a swipe, px.
    pub slop: f32,
    /// Minimum fling velocity, px/s.
    pub min_fling_velocity: f32,
    /// Maximum fling velocity, px/s.
    pub max_fling_velocity: f32,
    /// Slide and collapse animation length, ms.
    pub animation_duration_ms: u64,
    /// Delay before the undo prompt hides itself, ms.
    pub auto_hide_delay_ms: u64,
    /// Undo policy.
    pub undo_policy: UndoPolicy,
    /// Which way rows may be swiped.
    pub swipe_direction: SwipeDirection,
    /// Whether swiping is enabled at all.
    pub swipe_enabled: bool,
    /// Prompt text for one untitled dismissal.
    pub delete_message: String,
    /// Prompt template for several dismissals; `%d` is the count.
    pub delete_multiple_message: Option<String>,
    /// Undo button label.
    pub undo_label: String,
    /// Undo button label when one tap undoes several dismissals.
    pub undo_all_label: String,
}

impl Default for DismissConfig {
    fn default() -> Self {
        let swipe = SwipeConfig::default();
        Self {
            slop: swipe.slop,
            min_fling_velocity: swipe.min_fling_velocity,
            max_fling_velocity: swipe.max_fling_velocity,
            animation_duration_ms: millis(DEFAULT_ANIMATION_DURATION),
            auto_hide_delay_ms: 5_000,
            undo_policy: UndoPolicy::Single,
            swipe_direction: SwipeDirection::Both,
            swipe_enabled: true,
            delete_message: DEFAULT_DELETE_MESSAGE.to_owned(),
            delete_multiple_message: Some(DEFAULT_DELETE_MULTIPLE_MESSAGE.to_owned()),
            undo_label: DEFAULT_UNDO_LABEL.to_owned(),
            undo_all_label: DEFAULT_UNDO_ALL_LABEL.to_owned(),
        }
    }
}

impl DismissConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    // --- Builder setters ---

    /// Set the undo policy.
    #[must_use]
    pub fn with_undo_policy(mut self, policy: UndoPolicy) -> Self {
        self.undo_policy = policy;
        self
    }

    /// Set the swipe direction.
    #[must_use]
    pub fn with_swipe_direction(mut self, direction: SwipeDirection) -> Self {
        self.swipe_direction = direction;
        self
    }

    /// Enable or disable swiping.
    #[must_use]
    pub fn with_swipe_enabled(mut self, enabled: bool) -> Self {
        self.swipe_enabled = enabled;
        self
    }

    /// Set the auto-hide delay.
    #[must_use]
    pub fn with_auto_hide_delay(mut self, delay: Duration) -> Self {
        self.auto_hide_delay_ms = millis(delay);
        self
    }

    /// Set the single-dismissal message.
    #[must_use]
    pub fn with_delete_message(mut self, message: impl Into<String>) -> Self {
        self.delete_message = message.into();
        self
    }

    /// Set (or clear) the multiple-dismissal template.
    #[must_use]
    pub fn with_delete_multiple_message(mut self, template: Option<String>) -> Self {
        self.delete_multiple_message = template;
        self
    }

    // --- Validation ---

    /// Check every parameter is usable.
    ///
    /// Returns a list of problems; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.slop >= 0.0 && self.slop.is_finite()) {
            errors.push(format!("slop must be >= 0, got {}", self.slop));
        }
        if !(self.min_fling_velocity >= 0.0) {
            errors.push(format!(
                "min_fling_velocity must be >= 0, got {}",
                self.min_fling_velocity
            ));
        }
        if !(self.max_fling_velocity > 0.0) {
            errors.push(format!(
                "max_fling_velocity must be > 0, got {}",
                self.max_fling_velocity
            ));
        }
        if self.min_fling_velocity > self.max_fling_velocity {
            errors.push(format!(
                "min_fling_velocity ({}) must not exceed max_fling_velocity ({})",
                self.min_fling_velocity, self.max_fling_velocity
            ));
        }
        if self.auto_hide_delay_ms == 0 {
            errors.push("auto_hide_delay_ms must be > 0".into());
        }
        if let Some(template) = &self.delete_multiple_message {
            let placeholders = template.matches("%d").count();
            if placeholders != 1 {
                errors.push(format!(
                    "delete_multiple_message must contain exactly one %d, found {placeholders}"
                ));
            }
        }
        if self.undo_label.is_empty() {
            errors.push("undo_label must not be empty".into());
        }

        errors
    }

    /// Like [`validate`](Self::validate), as a `Result`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    // --- Conversions ---

    /// Gesture thresholds.
    #[must_use]
    pub fn swipe_config(&self) -> SwipeConfig {
        SwipeConfig {
            slop: self.slop,
            min_fling_velocity: self.min_fling_velocity,
            max_fling_velocity: self.max_fling_velocity,
        }
    }

    /// Slide and collapse animation length.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Auto-hide delay.
    #[must_use]
    pub fn auto_hide_delay(&self) -> Duration {
        Duration::from_millis(self.auto_hide_delay_ms)
    }

    /// Prompt strings.
    #[must_use]
    pub fn prompt_messages(&self) -> PromptMessages {
        PromptMessages {
            delete_message: self.delete_message.clone(),
            delete_multiple_message: self.delete_multiple_message.clone(),
            undo_label: self.undo_label.clone(),
            undo_all_label: self.undo_all_label.clone(),
        }
    }

    /// A coordinator configured from this policy.
    #[must_use]
    pub fn undo_coordinator(&self) -> UndoCoordinator {
        UndoCoordinator::new(self.undo_policy)
            .with_messages(self.prompt_messages())
            .with_auto_hide_delay(self.auto_hide_delay())
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
