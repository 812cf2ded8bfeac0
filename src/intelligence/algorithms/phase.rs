// ABOUTME: Per-exercise phase classification and repetition completion rules
// ABOUTME: Enum-dispatched strategy pair selected once per session from the exercise profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Phase Strategies
//!
//! An exercise's motion is tracked by two cooperating rules:
//!
//! - `PhaseClassifier` maps the exercise's driving joint angle to a phase,
//!   using hysteresis in the ambiguous band between its fixed edges.
//! - `RepCompletionRule` decides when a repetition (or hold) has finished.
//!
//! Both are chosen once from the profile via [`ExerciseStrategy::for_profile`]
//! and then invoked uniformly, so adding an exercise means adding a variant
//! and its configuration.
//!
//! | Exercise | Driving angle            | Bands                                   |
//! |----------|--------------------------|-----------------------------------------|
//! | Squats   | mean of both knees       | > 160 starting, < 90 bottom             |
//! | Push-ups | mean of both elbows      | > 160 top, < 90 bottom                  |
//! | Lunges   | min of both knees        | > 160 starting, < 100 bottom            |
//! | Planks   | mean of both hips        | (160, 200) holding, otherwise starting  |

use chrono::{DateTime, Duration, Utc};
use form_coach_core::models::{ExercisePhase, ExerciseProfile, ExerciseType, Side, Skeleton};

use super::angles;
use crate::config::PhaseThresholds;

/// Maps a driving joint angle to an exercise phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseClassifier {
    /// Average knee angle; standing above `standing_angle`, bottom below `depth_angle`
    Squat {
        /// Standing band edge (degrees)
        standing_angle: f64,
        /// Depth band edge (degrees)
        depth_angle: f64,
    },

    /// Average elbow angle; top above `extended_angle`, bottom below `depth_angle`
    PushUp {
        /// Extended band edge (degrees)
        extended_angle: f64,
        /// Depth band edge (degrees)
        depth_angle: f64,
    },

    /// More-bent (front) knee angle with a returning sub-band on the way up
    Lunge {
        /// Standing band edge (degrees)
        standing_angle: f64,
        /// Bottom band edge (degrees)
        bottom_angle: f64,
        /// Angle from which ascent counts as returning (degrees)
        returning_angle: f64,
    },

    /// Average hip angle; holding strictly inside `(band_low, band_high)`
    Plank {
        /// Lower band edge (degrees)
        band_low: f64,
        /// Upper band edge (degrees)
        band_high: f64,
    },

    /// Exercises without a motion model: the phase never changes
    Permissive,
}

impl PhaseClassifier {
    /// Select the classifier for an exercise type
    #[must_use]
    pub fn for_exercise(exercise: ExerciseType, thresholds: &PhaseThresholds) -> Self {
        match exercise {
            ExerciseType::Squats => Self::Squat {
                standing_angle: thresholds.squat_standing_angle,
                depth_angle: thresholds.squat_depth_angle,
            },
            ExerciseType::PushUps => Self::PushUp {
                extended_angle: thresholds.push_up_extended_angle,
                depth_angle: thresholds.push_up_depth_angle,
            },
            ExerciseType::Lunges => Self::Lunge {
                standing_angle: thresholds.lunge_standing_angle,
                bottom_angle: thresholds.lunge_bottom_angle,
                returning_angle: thresholds.lunge_returning_angle,
            },
            ExerciseType::Planks => Self::Plank {
                band_low: thresholds.plank_band_low,
                band_high: thresholds.plank_band_high,
            },
            ExerciseType::Deadlifts
            | ExerciseType::Burpees
            | ExerciseType::JumpingJacks
            | ExerciseType::Custom => Self::Permissive,
        }
    }

    /// Phase a session starts in and each repetition returns to
    #[must_use]
    pub const fn anchor_phase(&self) -> ExercisePhase {
        match self {
            Self::PushUp { .. } => ExercisePhase::Top,
            Self::Squat { .. } | Self::Lunge { .. } | Self::Plank { .. } | Self::Permissive => {
                ExercisePhase::Starting
            }
        }
    }

    /// Driving angle for this frame, or `None` when a required joint is not measurable
    #[must_use]
    pub fn measure(&self, skeleton: &Skeleton) -> Option<f64> {
        match self {
            Self::Squat { .. } => {
                let left = angles::knee_angle(skeleton, Side::Left)?;
                let right = angles::knee_angle(skeleton, Side::Right)?;
                Some((left + right) / 2.0)
            }
            Self::PushUp { .. } => {
                let left = angles::elbow_angle(skeleton, Side::Left)?;
                let right = angles::elbow_angle(skeleton, Side::Right)?;
                Some((left + right) / 2.0)
            }
            Self::Lunge { .. } => {
                let left = angles::knee_angle(skeleton, Side::Left)?;
                let right = angles::knee_angle(skeleton, Side::Right)?;
                Some(left.min(right))
            }
            Self::Plank { .. } => {
                let left = angles::hip_angle(skeleton, Side::Left)?;
                let right = angles::hip_angle(skeleton, Side::Right)?;
                Some((left + right) / 2.0)
            }
            Self::Permissive => None,
        }
    }

    /// Classify a measured angle given the phase the machine is currently in
    #[must_use]
    pub fn classify_angle(&self, angle: f64, current: ExercisePhase) -> ExercisePhase {
        use ExercisePhase as P;

        match *self {
            Self::Squat {
                standing_angle,
                depth_angle,
            } => {
                if angle > standing_angle {
                    P::Starting
                } else if angle < depth_angle {
                    P::Bottom
                } else if matches!(current, P::Starting | P::Descending) {
                    P::Descending
                } else {
                    P::Ascending
                }
            }
            Self::PushUp {
                extended_angle,
                depth_angle,
            } => {
                if angle > extended_angle {
                    P::Top
                } else if angle < depth_angle {
                    P::Bottom
                } else if matches!(current, P::Top | P::Descending) {
                    P::Descending
                } else {
                    P::Ascending
                }
            }
            Self::Lunge {
                standing_angle,
                bottom_angle,
                returning_angle,
            } => {
                if angle > standing_angle {
                    P::Starting
                } else if angle < bottom_angle {
                    P::Bottom
                } else {
                    match current {
                        P::Starting | P::Descending => P::Descending,
                        P::Bottom => P::Ascending,
                        _ if angle >= returning_angle => P::Returning,
                        _ => P::Ascending,
                    }
                }
            }
            Self::Plank {
                band_low,
                band_high,
            } => {
                if angle > band_low && angle < band_high {
                    P::Holding
                } else {
                    P::Starting
                }
            }
            Self::Permissive => current,
        }
    }

    /// Next phase for a frame; holds the current phase when the angle is missing
    #[must_use]
    pub fn classify(&self, skeleton: &Skeleton, current: ExercisePhase) -> ExercisePhase {
        self.measure(skeleton)
            .map_or(current, |angle| self.classify_angle(angle, current))
    }

    /// Classifier name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Squat { .. } => "squat",
            Self::PushUp { .. } => "push_up",
            Self::Lunge { .. } => "lunge",
            Self::Plank { .. } => "plank",
            Self::Permissive => "permissive",
        }
    }
}

/// Decides when a repetition or hold is complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepCompletionRule {
    /// Cyclic exercises: the most recent `required.len()` phase changes must
    /// include every required phase and the machine must be back at `anchor`
    Cycle {
        /// Phases of one full cycle
        required: Vec<ExercisePhase>,
        /// Phase that closes the cycle
        anchor: ExercisePhase,
    },

    /// Isometric exercises: continuous dwell in `phase` for at least `min_hold`
    Hold {
        /// Qualifying phase
        phase: ExercisePhase,
        /// Minimum continuous hold
        min_hold: Duration,
    },

    /// Never completes
    Never,
}

impl RepCompletionRule {
    /// Whether the cycle evidence in `history` completes a repetition
    ///
    /// `history` holds phase changes, oldest first.
    #[must_use]
    pub fn cycle_complete<'a, I>(
        required: &[ExercisePhase],
        anchor: ExercisePhase,
        history: I,
        current: ExercisePhase,
    ) -> bool
    where
        I: DoubleEndedIterator<Item = &'a ExercisePhase> + ExactSizeIterator + Clone,
    {
        if current != anchor || required.is_empty() || history.len() < required.len() {
            return false;
        }

        let recent = history.rev().take(required.len());
        required
            .iter()
            .all(|phase| recent.clone().any(|seen| seen == phase))
    }

    /// Whether a hold that started at `started` is complete at `now`
    #[must_use]
    pub fn hold_complete(
        min_hold: Duration,
        started: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        started.is_some_and(|start| now - start >= min_hold)
    }
}

/// Classifier and completion rule for one exercise session
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseStrategy {
    /// Phase classifier
    pub classifier: PhaseClassifier,
    /// Completion rule
    pub completion: RepCompletionRule,
}

impl ExerciseStrategy {
    /// Select the strategy for a profile
    ///
    /// Cyclic exercises take their required phases from the profile (anchor
    /// first); planks complete on time; everything else is permissive.
    #[must_use]
    pub fn for_profile(profile: &ExerciseProfile, thresholds: &PhaseThresholds) -> Self {
        let classifier = PhaseClassifier::for_exercise(profile.exercise_type, thresholds);

        let completion = match classifier {
            PhaseClassifier::Squat { .. }
            | PhaseClassifier::PushUp { .. }
            | PhaseClassifier::Lunge { .. } => RepCompletionRule::Cycle {
                required: profile.phases.clone(),
                anchor: profile.anchor_phase(),
            },
            PhaseClassifier::Plank { .. } => RepCompletionRule::Hold {
                phase: ExercisePhase::Holding,
                min_hold: hold_duration(thresholds.plank_min_hold_seconds),
            },
            PhaseClassifier::Permissive => RepCompletionRule::Never,
        };

        Self {
            classifier,
            completion,
        }
    }
}

/// Convert fractional seconds to a millisecond-resolution duration
fn hold_duration(seconds: f64) -> Duration {
    Duration::milliseconds((seconds * 1000.0).round() as i64)
}
