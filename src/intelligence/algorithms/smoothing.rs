// ABOUTME: Per-landmark jitter reduction using independent scalar Kalman estimators
// ABOUTME: One constant-position estimator per (landmark, axis), stored in a fixed landmark-indexed bank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Keypoint Smoother
//!
//! Each tracked scalar (one landmark x one axis) owns a one-dimensional
//! Kalman estimator with a constant-position model:
//!
//! ```text
//! P⁻  = P + Q
//! K   = P⁻ / (P⁻ + R)
//! x̂  = x̂ + K (z - x̂)
//! P   = (1 - K) P⁻
//! ```
//!
//! The first observation seeds the estimate directly so there is no startup
//! lag. The gain decays as confidence grows; resetting an estimator (e.g.
//! after occlusion) restores full responsiveness.

use form_coach_core::constants::landmarks::LANDMARK_COUNT;
use form_coach_core::constants::smoothing::INITIAL_ERROR_VARIANCE;
use form_coach_core::models::{Landmark, LandmarkName, Skeleton};
use tracing::trace;

use crate::config::SmoothingConfig;

/// One-dimensional Kalman estimator for a single coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarKalmanFilter {
    process_noise: f64,
    measurement_noise: f64,
    estimate: f64,
    error_variance: f64,
    initialized: bool,
}

impl ScalarKalmanFilter {
    /// Create an unseeded estimator
    #[must_use]
    pub const fn new(process_noise: f64, measurement_noise: f64) -> Self {
        Self {
            process_noise,
            measurement_noise,
            estimate: 0.0,
            error_variance: INITIAL_ERROR_VARIANCE,
            initialized: false,
        }
    }

    /// Feed a measurement and return the new estimate
    pub fn filter(&mut self, measurement: f64) -> f64 {
        if !self.initialized {
            self.estimate = measurement;
            self.initialized = true;
            return measurement;
        }

        // Prediction step
        let predicted_error = self.error_variance + self.process_noise;

        // Update step
        let gain = predicted_error / (predicted_error + self.measurement_noise);
        self.estimate = gain.mul_add(measurement - self.estimate, self.estimate);
        self.error_variance = (1.0 - gain) * predicted_error;

        self.estimate
    }

    /// Forget all history; the next measurement seeds the estimate again
    pub fn reset(&mut self) {
        self.estimate = 0.0;
        self.error_variance = INITIAL_ERROR_VARIANCE;
        self.initialized = false;
    }

    /// Current estimate, once seeded
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        if self.initialized {
            Some(self.estimate)
        } else {
            None
        }
    }

    /// Current estimate-error variance
    #[must_use]
    pub const fn error_variance(&self) -> f64 {
        self.error_variance
    }

    /// Gain the next measurement would receive
    #[must_use]
    pub fn next_gain(&self) -> f64 {
        let predicted_error = self.error_variance + self.process_noise;
        predicted_error / (predicted_error + self.measurement_noise)
    }
}

/// Estimators for the x, y, and optional z axes of one landmark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeypointFilter {
    x: ScalarKalmanFilter,
    y: ScalarKalmanFilter,
    z: ScalarKalmanFilter,
}

impl KeypointFilter {
    /// Create unseeded estimators for all three axes
    #[must_use]
    pub const fn new(process_noise: f64, measurement_noise: f64) -> Self {
        Self {
            x: ScalarKalmanFilter::new(process_noise, measurement_noise),
            y: ScalarKalmanFilter::new(process_noise, measurement_noise),
            z: ScalarKalmanFilter::new(process_noise, measurement_noise),
        }
    }

    /// Smooth one observation; depth is only filtered when present
    pub fn filter(&mut self, x: f64, y: f64, z: Option<f64>) -> (f64, f64, Option<f64>) {
        (
            self.x.filter(x),
            self.y.filter(y),
            z.map(|depth| self.z.filter(depth)),
        )
    }

    /// Reset all three axes
    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.z.reset();
    }
}

/// Bank of keypoint filters indexed by [`LandmarkName`]
///
/// The landmark vocabulary is closed, so the bank is a fixed array and never
/// allocates after construction.
#[derive(Debug, Clone)]
pub struct KeypointSmoother {
    config: SmoothingConfig,
    filters: [KeypointFilter; LANDMARK_COUNT],
}

impl KeypointSmoother {
    /// Create a bank tuned by `config`
    #[must_use]
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            config,
            filters: [KeypointFilter::new(config.process_noise, config.measurement_noise);
                LANDMARK_COUNT],
        }
    }

    /// Tuning constants in use
    #[must_use]
    pub const fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Smooth one landmark's coordinates
    pub fn smooth(
        &mut self,
        name: LandmarkName,
        x: f64,
        y: f64,
        z: Option<f64>,
    ) -> (f64, f64, Option<f64>) {
        self.filters[name.index()].filter(x, y, z)
    }

    /// Smooth a landmark, keeping its identity and visibility
    pub fn smooth_landmark(&mut self, landmark: &Landmark) -> Landmark {
        let (x, y, z) = self.smooth(landmark.name, landmark.x, landmark.y, landmark.z);
        Landmark {
            x,
            y,
            z,
            ..*landmark
        }
    }

    /// Smooth a whole frame into an indexed skeleton
    pub fn smooth_frame(&mut self, landmarks: &[Landmark]) -> Skeleton {
        trace!(count = landmarks.len(), "Smoothing landmark frame");
        landmarks
            .iter()
            .map(|landmark| self.smooth_landmark(landmark))
            .collect()
    }

    /// Reset every estimator
    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }

    /// Reset the estimators of one landmark (e.g. after it was occluded)
    pub fn reset_one(&mut self, name: LandmarkName) {
        self.filters[name.index()].reset();
    }
}

impl Default for KeypointSmoother {
    fn default() -> Self {
        Self::new(SmoothingConfig::default())
    }
}
