// ABOUTME: Keypoint smoother tuning configuration
// ABOUTME: Process and measurement noise constants shared by every per-axis estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Smoother Configuration
//!
//! - Lower process noise gives smoother but laggier angle estimates.
//! - Higher measurement noise makes the filter trust its own prediction more
//!   than new samples.

use form_coach_core::constants::smoothing;
use serde::{Deserialize, Serialize};

/// Noise constants for the scalar landmark estimators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Expected drift per frame (Q)
    pub process_noise: f64,
    /// Expected detector jitter (R)
    pub measurement_noise: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            process_noise: smoothing::DEFAULT_PROCESS_NOISE,
            measurement_noise: smoothing::DEFAULT_MEASUREMENT_NOISE,
        }
    }
}
