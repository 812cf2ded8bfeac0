// ABOUTME: Coach configuration for smoothing, phase classification, and form scoring
// ABOUTME: Aggregates domain configs and provides unified validation and environment loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coach Configuration Module
//!
//! Tunable values for every per-frame component. Configuration is read once at
//! session start and never mutated afterwards.
//!
//! # Module Structure
//!
//! - `smoothing` - Keypoint smoother noise constants
//! - `phase` - Phase classifier band edges and hold timing
//! - `form` - Form analyzer deviation tiers and posture margins
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export FORM_COACH_SMOOTHING_PROCESS_NOISE=0.02
//!    export FORM_COACH_PLANK_MIN_HOLD_SECONDS=30
//!    ```
//!
//! 2. Default values (if env vars not set)

/// Configuration error types
pub mod error;
/// Form analyzer thresholds
pub mod form;
/// Phase classifier thresholds
pub mod phase;
/// Keypoint smoother noise constants
pub mod smoothing;

pub use error::ConfigError;
pub use form::FormThresholds;
pub use phase::PhaseThresholds;
pub use smoothing::SmoothingConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::{debug, warn};

/// Main coach configuration container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Keypoint smoother tuning
    #[serde(default)]
    pub smoothing: SmoothingConfig,
    /// Phase classification bands
    #[serde(default)]
    pub phase: PhaseThresholds,
    /// Form scoring thresholds
    #[serde(default)]
    pub form: FormThresholds,
}

impl CoachConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Loaded coach configuration");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a noise constant is not positive, thresholds are
    /// out of order, or the plank hold time is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let smoothing = &self.smoothing;
        if !(smoothing.process_noise > 0.0 && smoothing.process_noise.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "smoothing.process_noise must be positive",
            ));
        }
        if !(smoothing.measurement_noise > 0.0 && smoothing.measurement_noise.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "smoothing.measurement_noise must be positive",
            ));
        }

        let phase = &self.phase;
        let form = &self.form;
        let finite_checks = [
            (phase.squat_standing_angle, "squat_standing_angle must be finite"),
            (phase.squat_depth_angle, "squat_depth_angle must be finite"),
            (phase.push_up_extended_angle, "push_up_extended_angle must be finite"),
            (phase.push_up_depth_angle, "push_up_depth_angle must be finite"),
            (phase.lunge_standing_angle, "lunge_standing_angle must be finite"),
            (phase.lunge_bottom_angle, "lunge_bottom_angle must be finite"),
            (phase.lunge_returning_angle, "lunge_returning_angle must be finite"),
            (phase.plank_band_low, "plank_band_low must be finite"),
            (phase.plank_band_high, "plank_band_high must be finite"),
            (form.minor_angle_deviation, "minor_angle_deviation must be finite"),
            (form.major_angle_deviation, "major_angle_deviation must be finite"),
            (form.knee_over_toe_margin, "knee_over_toe_margin must be finite"),
            (form.plank_hip_margin, "plank_hip_margin must be finite"),
            (form.push_up_back_margin, "push_up_back_margin must be finite"),
        ];
        // NaN slips through every ordering comparison below
        if let Some(&(_, message)) = finite_checks.iter().find(|(value, _)| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(message));
        }

        if phase.squat_depth_angle >= phase.squat_standing_angle {
            return Err(ConfigError::InvalidRange(
                "squat_depth_angle must be < squat_standing_angle",
            ));
        }
        if phase.push_up_depth_angle >= phase.push_up_extended_angle {
            return Err(ConfigError::InvalidRange(
                "push_up_depth_angle must be < push_up_extended_angle",
            ));
        }
        if phase.lunge_bottom_angle >= phase.lunge_returning_angle
            || phase.lunge_returning_angle >= phase.lunge_standing_angle
        {
            return Err(ConfigError::InvalidRange(
                "lunge angles must satisfy bottom < returning < standing",
            ));
        }
        if phase.plank_band_low >= phase.plank_band_high {
            return Err(ConfigError::InvalidRange(
                "plank_band_low must be < plank_band_high",
            ));
        }
        if !(phase.plank_min_hold_seconds > 0.0 && phase.plank_min_hold_seconds.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "plank_min_hold_seconds must be positive",
            ));
        }

        if form.minor_angle_deviation < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "minor_angle_deviation must not be negative",
            ));
        }
        if form.minor_angle_deviation >= form.major_angle_deviation {
            return Err(ConfigError::InvalidRange(
                "minor_angle_deviation must be < major_angle_deviation",
            ));
        }
        if form.knee_over_toe_margin < 0.0
            || form.plank_hip_margin < 0.0
            || form.push_up_back_margin < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "posture margins must not be negative",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(e) => {
                warn!(variable = env_var_name, "Configuration override is not valid unicode");
                return Err(ConfigError::EnvVar(e));
            }
        };
        *target = val.parse().map_err(|_| {
            warn!(variable = env_var_name, value = %val, "Unusable configuration override");
            ConfigError::Parse(format!("Invalid {env_var_name}"))
        })?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Smoothing overrides
        Self::apply_env_var(
            "FORM_COACH_SMOOTHING_PROCESS_NOISE",
            &mut self.smoothing.process_noise,
        )?;
        Self::apply_env_var(
            "FORM_COACH_SMOOTHING_MEASUREMENT_NOISE",
            &mut self.smoothing.measurement_noise,
        )?;

        // Phase overrides
        Self::apply_env_var(
            "FORM_COACH_SQUAT_DEPTH_ANGLE",
            &mut self.phase.squat_depth_angle,
        )?;
        Self::apply_env_var(
            "FORM_COACH_PUSH_UP_DEPTH_ANGLE",
            &mut self.phase.push_up_depth_angle,
        )?;
        Self::apply_env_var(
            "FORM_COACH_LUNGE_BOTTOM_ANGLE",
            &mut self.phase.lunge_bottom_angle,
        )?;
        Self::apply_env_var(
            "FORM_COACH_PLANK_MIN_HOLD_SECONDS",
            &mut self.phase.plank_min_hold_seconds,
        )?;

        // Form overrides
        Self::apply_env_var(
            "FORM_COACH_MINOR_ANGLE_DEVIATION",
            &mut self.form.minor_angle_deviation,
        )?;
        Self::apply_env_var(
            "FORM_COACH_MAJOR_ANGLE_DEVIATION",
            &mut self.form.major_angle_deviation,
        )?;

        Ok(self)
    }
}
