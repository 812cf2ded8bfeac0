// ABOUTME: Stateless per-frame posture scorer for a configured exercise profile
// ABOUTME: Classifies each configured joint, runs posture heuristics, and aggregates a 0-100 score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form Analyzer
//!
//! Every configured joint ends a frame in exactly one state:
//!
//! | State            | Condition                         | Error severity | Status  |
//! |------------------|-----------------------------------|----------------|---------|
//! | missing          | angle not measurable              | none           | minor   |
//! | out of range     | angle <= min or angle >= max      | major          | major   |
//! | major deviation  | \|angle - ideal\| > major         | moderate       | major   |
//! | minor deviation  | \|angle - ideal\| > minor         | minor          | minor   |
//! | correct          | otherwise                         | none           | correct |
//!
//! Score is `100 - mean(|angle - ideal|)` over measured joints, clamped to
//! `[0, 100]`, and exactly 100 when no joint could be measured.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use form_coach_core::constants::form::{MAX_SCORE, UNMEASURED_SCORE};
use form_coach_core::models::{
    AngleRange, ExercisePhase, ExerciseProfile, ExerciseType, FormAnalysisResult, FormError,
    Joint, JointKind, JointStatus, LandmarkName, Severity, Side, Skeleton,
};
use tracing::trace;

use super::algorithms::angles::{angle_of, line_y_at};
use super::feedback;
use crate::config::FormThresholds;

/// Exercise-specific relational posture check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostureCheck {
    /// Knee advanced horizontally past the ankle
    KneesOverToes,
    /// Hip off the shoulder-ankle line in either direction
    BackStraight,
    /// Hip below or above the shoulder-ankle line, reported separately
    HipLine,
}

impl PostureCheck {
    /// Checks that run for `exercise`
    #[must_use]
    pub const fn for_exercise(exercise: ExerciseType) -> &'static [Self] {
        match exercise {
            ExerciseType::Squats => &[Self::KneesOverToes],
            ExerciseType::PushUps => &[Self::BackStraight],
            ExerciseType::Planks => &[Self::HipLine],
            ExerciseType::Lunges
            | ExerciseType::Deadlifts
            | ExerciseType::Burpees
            | ExerciseType::JumpingJacks
            | ExerciseType::Custom => &[],
        }
    }

    fn evaluate(
        self,
        skeleton: &Skeleton,
        thresholds: &FormThresholds,
        timestamp: DateTime<Utc>,
    ) -> Option<FormError> {
        match self {
            Self::KneesOverToes => {
                let past_toes = Side::BOTH.iter().any(|&side| {
                    let (knee, ankle) = match side {
                        Side::Left => (LandmarkName::LeftKnee, LandmarkName::LeftAnkle),
                        Side::Right => (LandmarkName::RightKnee, LandmarkName::RightAnkle),
                    };
                    match (skeleton.visible(knee), skeleton.visible(ankle)) {
                        (Some(knee), Some(ankle)) => {
                            knee.x > ankle.x + thresholds.knee_over_toe_margin
                        }
                        _ => false,
                    }
                });
                past_toes.then(|| {
                    posture_error(
                        timestamp,
                        "knees_over_toes",
                        Severity::Major,
                        feedback::KNEES_BEHIND_TOES,
                        JointKind::Knee,
                    )
                })
            }
            Self::BackStraight => {
                let offset = hip_line_offset(skeleton)?;
                (offset.abs() > thresholds.push_up_back_margin).then(|| {
                    posture_error(
                        timestamp,
                        "back_not_straight",
                        Severity::Major,
                        feedback::BACK_STRAIGHT_CORE,
                        JointKind::Hip,
                    )
                })
            }
            Self::HipLine => {
                let offset = hip_line_offset(skeleton)?;
                if offset > thresholds.plank_hip_margin {
                    Some(posture_error(
                        timestamp,
                        "hips_sagging",
                        Severity::Major,
                        feedback::RAISE_HIPS_CORE,
                        JointKind::Hip,
                    ))
                } else if offset < -thresholds.plank_hip_margin {
                    Some(posture_error(
                        timestamp,
                        "hips_too_high",
                        Severity::Moderate,
                        feedback::LOWER_HIPS,
                        JointKind::Hip,
                    ))
                } else {
                    None
                }
            }
        }
    }
}

/// Vertical offset of the hip from the shoulder-ankle line (positive = below)
///
/// Uses the left side when its three landmarks are visible, else the right.
fn hip_line_offset(skeleton: &Skeleton) -> Option<f64> {
    Side::BOTH.iter().find_map(|&side| {
        let (shoulder, hip, ankle) = match side {
            Side::Left => (
                LandmarkName::LeftShoulder,
                LandmarkName::LeftHip,
                LandmarkName::LeftAnkle,
            ),
            Side::Right => (
                LandmarkName::RightShoulder,
                LandmarkName::RightHip,
                LandmarkName::RightAnkle,
            ),
        };
        let shoulder = skeleton.visible(shoulder)?;
        let hip = skeleton.visible(hip)?;
        let ankle = skeleton.visible(ankle)?;
        Some(hip.y - line_y_at(shoulder.point(), ankle.point(), hip.x))
    })
}

fn posture_error(
    timestamp: DateTime<Utc>,
    error_type: &str,
    severity: Severity,
    message: &str,
    kind: JointKind,
) -> FormError {
    FormError {
        timestamp,
        error_type: error_type.to_owned(),
        severity,
        message: message.to_owned(),
        affected_joints: Side::BOTH
            .iter()
            .map(|&side| Joint::new(side, kind))
            .collect(),
    }
}

/// Outcome of checking one joint against its range
enum JointCheck {
    Missing,
    Measured {
        angle: f64,
        deviation: f64,
        status: JointStatus,
        error: Option<(&'static str, Severity)>,
    },
}

/// Stateless posture scorer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormAnalyzer {
    thresholds: FormThresholds,
}

impl FormAnalyzer {
    /// Create an analyzer with the given deviation thresholds and margins
    #[must_use]
    pub const fn new(thresholds: FormThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &FormThresholds {
        &self.thresholds
    }

    /// Score one frame of smoothed landmarks against `profile`
    #[must_use]
    pub fn analyze(
        &self,
        profile: &ExerciseProfile,
        skeleton: &Skeleton,
        phase: ExercisePhase,
        timestamp: DateTime<Utc>,
    ) -> FormAnalysisResult {
        let mut errors = Vec::new();
        let mut joint_status = BTreeMap::new();
        let mut feedback = Vec::new();
        let mut total_deviation = 0.0;
        let mut measured = 0_u32;

        for &(joint, ref range) in &profile.key_angles {
            match self.check_joint(angle_of(skeleton, joint), range) {
                JointCheck::Missing => {
                    joint_status.insert(joint, JointStatus::Minor);
                }
                JointCheck::Measured {
                    angle,
                    deviation,
                    status,
                    error,
                } => {
                    total_deviation += deviation;
                    measured += 1;
                    joint_status.insert(joint, status);

                    if let Some((suffix, severity)) = error {
                        let message =
                            feedback::joint_message(profile.exercise_type, joint, angle, range);
                        if severity != Severity::Minor {
                            push_unique(&mut feedback, message);
                        }
                        errors.push(FormError {
                            timestamp,
                            error_type: format!("{joint}_{suffix}"),
                            severity,
                            message: message.to_owned(),
                            affected_joints: vec![joint],
                        });
                    }
                }
            }
        }

        let score = if measured == 0 {
            UNMEASURED_SCORE
        } else {
            (MAX_SCORE - total_deviation / f64::from(measured)).clamp(0.0, MAX_SCORE)
        };

        for check in PostureCheck::for_exercise(profile.exercise_type) {
            if let Some(error) = check.evaluate(skeleton, &self.thresholds, timestamp) {
                push_unique(&mut feedback, &error.message);
                errors.push(error);
            }
        }

        let is_correct = errors.iter().all(|e| e.severity == Severity::Minor);

        trace!(
            exercise = %profile.exercise_type,
            phase = %phase,
            score,
            errors = errors.len(),
            is_correct,
            "Form analyzed"
        );

        FormAnalysisResult {
            is_correct,
            score,
            errors,
            joint_status,
            feedback,
        }
    }

    fn check_joint(&self, angle: Option<f64>, range: &AngleRange) -> JointCheck {
        let Some(angle) = angle else {
            return JointCheck::Missing;
        };
        let deviation = range.deviation(angle);

        let (status, error) = if !range.contains(angle) {
            (JointStatus::Major, Some(("out_of_range", Severity::Major)))
        } else if deviation > self.thresholds.major_angle_deviation {
            (
                JointStatus::Major,
                Some(("major_deviation", Severity::Moderate)),
            )
        } else if deviation > self.thresholds.minor_angle_deviation {
            (JointStatus::Minor, Some(("minor_deviation", Severity::Minor)))
        } else {
            (JointStatus::Correct, None)
        };

        JointCheck::Measured {
            angle,
            deviation,
            status,
            error,
        }
    }
}

fn push_unique(feedback: &mut Vec<String>, message: &str) {
    if !feedback.iter().any(|m| m == message) {
        feedback.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_out_of_range() {
        let analyzer = FormAnalyzer::default();
        let range = AngleRange::new(70.0, 170.0, 90.0);
        assert!(matches!(
            analyzer.check_joint(Some(70.0), &range),
            JointCheck::Measured {
                status: JointStatus::Major,
                error: Some(("out_of_range", Severity::Major)),
                ..
            }
        ));
        assert!(matches!(
            analyzer.check_joint(None, &range),
            JointCheck::Missing
        ));
    }

    #[test]
    fn test_push_unique_keeps_first() {
        let mut feedback = vec!["a".to_owned()];
        push_unique(&mut feedback, "b");
        push_unique(&mut feedback, "a");
        assert_eq!(feedback, vec!["a".to_owned(), "b".to_owned()]);
    }
}
