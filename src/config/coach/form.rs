// ABOUTME: Form analyzer threshold configuration
// ABOUTME: Angle deviation tiers and normalized margins for relational posture checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use form_coach_core::constants::form;
use serde::{Deserialize, Serialize};

/// Deviation tiers and posture-check margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormThresholds {
    /// Degrees from ideal above which a minor error is raised
    pub minor_angle_deviation: f64,
    /// Degrees from ideal above which a moderate error is raised
    pub major_angle_deviation: f64,
    /// Normalized distance a knee may pass its ankle in a squat
    pub knee_over_toe_margin: f64,
    /// Normalized hip offset tolerated in a plank
    pub plank_hip_margin: f64,
    /// Normalized hip offset tolerated in a push-up
    pub push_up_back_margin: f64,
}

impl Default for FormThresholds {
    fn default() -> Self {
        Self {
            minor_angle_deviation: form::MINOR_ANGLE_DEVIATION,
            major_angle_deviation: form::MAJOR_ANGLE_DEVIATION,
            knee_over_toe_margin: form::KNEE_OVER_TOE_MARGIN,
            plank_hip_margin: form::PLANK_HIP_MARGIN,
            push_up_back_margin: form::PUSH_UP_BACK_MARGIN,
        }
    }
}
