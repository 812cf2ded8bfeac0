// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for landmark confidence, phase bands, and form scoring defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Hard limits live here as plain constants. Values that callers may tune
//! (noise constants, phase bands, deviation thresholds) are only defaults;
//! the engine reads the tunable copies from its configuration.

/// Landmark detection constants
pub mod landmarks {
    /// Number of landmarks in the body vocabulary
    pub const LANDMARK_COUNT: usize = 33;

    /// Landmarks below this visibility are treated as absent.
    /// Not exercise-specific and not configurable.
    pub const MIN_VISIBILITY: f64 = 0.5;
}

/// Keypoint smoothing defaults
pub mod smoothing {
    /// Expected drift per frame (process noise Q)
    pub const DEFAULT_PROCESS_NOISE: f64 = 0.01;
    /// Expected detector jitter (measurement noise R)
    pub const DEFAULT_MEASUREMENT_NOISE: f64 = 0.1;
    /// Estimate-error variance of a freshly created estimator
    pub const INITIAL_ERROR_VARIANCE: f64 = 1.0;
}

/// Phase classification band defaults (degrees)
pub mod phases {
    /// Knee angle above which a squatter is standing
    pub const SQUAT_STANDING_ANGLE: f64 = 160.0;
    /// Knee angle below which a squat reaches full depth
    pub const SQUAT_DEPTH_ANGLE: f64 = 90.0;
    /// Elbow angle above which the arms count as extended
    pub const PUSH_UP_EXTENDED_ANGLE: f64 = 160.0;
    /// Elbow angle below which the chest is near the ground
    pub const PUSH_UP_DEPTH_ANGLE: f64 = 90.0;
    /// Front-knee angle above which a lunger is standing
    pub const LUNGE_STANDING_ANGLE: f64 = 160.0;
    /// Front-knee angle below which a lunge is deep
    pub const LUNGE_BOTTOM_ANGLE: f64 = 100.0;
    /// Front-knee angle from which the way up counts as returning
    pub const LUNGE_RETURNING_ANGLE: f64 = 130.0;
    /// Lower edge of the straight-body hip band (exclusive)
    pub const PLANK_BAND_LOW: f64 = 160.0;
    /// Upper edge of the straight-body hip band (exclusive)
    pub const PLANK_BAND_HIGH: f64 = 200.0;
    /// Continuous hold needed for one plank completion
    pub const PLANK_MIN_HOLD_SECONDS: f64 = 10.0;
    /// Phase changes retained for repetition detection
    pub const PHASE_HISTORY_CAPACITY: usize = 16;
}

/// Form scoring defaults
pub mod form {
    /// Deviation from ideal (degrees) above which a minor error is raised
    pub const MINOR_ANGLE_DEVIATION: f64 = 10.0;
    /// Deviation from ideal (degrees) above which a moderate error is raised
    pub const MAJOR_ANGLE_DEVIATION: f64 = 20.0;
    /// Normalized distance a knee may pass its ankle during a squat
    pub const KNEE_OVER_TOE_MARGIN: f64 = 0.05;
    /// Normalized hip offset from the shoulder-ankle line tolerated in a plank
    pub const PLANK_HIP_MARGIN: f64 = 0.05;
    /// Normalized hip offset from the shoulder-ankle line tolerated in a push-up
    pub const PUSH_UP_BACK_MARGIN: f64 = 0.1;
    /// Score reported when no configured joint could be measured
    pub const UNMEASURED_SCORE: f64 = 100.0;
    /// Upper bound of the posture score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Display colors for joint status overlays
pub mod colors {
    /// Joint within tolerance
    pub const CORRECT: &str = "#00FF00";
    /// Minor deviation or unmeasurable joint
    pub const MINOR_ERROR: &str = "#FFFF00";
    /// Out of range or large deviation
    pub const MAJOR_ERROR: &str = "#FF0000";
}
