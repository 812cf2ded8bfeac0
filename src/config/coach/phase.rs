// ABOUTME: Phase classification band configuration for each supported exercise
// ABOUTME: Angle band edges for squats, push-ups, lunges, and the plank hold window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use form_coach_core::constants::phases;
use serde::{Deserialize, Serialize};

/// Angle bands (degrees) and hold timing used by the phase classifiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseThresholds {
    /// Average knee angle above which a squatter is standing
    pub squat_standing_angle: f64,
    /// Average knee angle below which a squat is at depth
    pub squat_depth_angle: f64,
    /// Average elbow angle above which a push-up is at the top
    pub push_up_extended_angle: f64,
    /// Average elbow angle below which a push-up is at the bottom
    pub push_up_depth_angle: f64,
    /// Front-knee angle above which a lunger is standing
    pub lunge_standing_angle: f64,
    /// Front-knee angle below which a lunge is at the bottom
    pub lunge_bottom_angle: f64,
    /// Front-knee angle from which the way up counts as returning
    pub lunge_returning_angle: f64,
    /// Lower edge of the straight-body hip band (exclusive)
    pub plank_band_low: f64,
    /// Upper edge of the straight-body hip band (exclusive)
    pub plank_band_high: f64,
    /// Continuous hold (seconds) for one plank completion
    pub plank_min_hold_seconds: f64,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            squat_standing_angle: phases::SQUAT_STANDING_ANGLE,
            squat_depth_angle: phases::SQUAT_DEPTH_ANGLE,
            push_up_extended_angle: phases::PUSH_UP_EXTENDED_ANGLE,
            push_up_depth_angle: phases::PUSH_UP_DEPTH_ANGLE,
            lunge_standing_angle: phases::LUNGE_STANDING_ANGLE,
            lunge_bottom_angle: phases::LUNGE_BOTTOM_ANGLE,
            lunge_returning_angle: phases::LUNGE_RETURNING_ANGLE,
            plank_band_low: phases::PLANK_BAND_LOW,
            plank_band_high: phases::PLANK_BAND_HIGH,
            plank_min_hold_seconds: phases::PLANK_MIN_HOLD_SECONDS,
        }
    }
}
