// ABOUTME: Deterministic coaching message table for joint-angle and posture errors
// ABOUTME: Message text is a contract with rendering and voice layers and must stay stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use form_coach_core::models::{AngleRange, ExerciseType, Joint, JointKind, Side};

/// Message used when no exercise-specific text applies
pub const FALLBACK: &str = "Adjust your position";

/// Squat: knee past toe
pub const KNEES_BEHIND_TOES: &str = "Keep knees behind toes";
/// Push-up: hip off the shoulder-ankle line
pub const BACK_STRAIGHT_CORE: &str = "Keep your back straight - engage core";
/// Plank: hip below the shoulder-ankle line
pub const RAISE_HIPS_CORE: &str = "Raise your hips - engage your core";
/// Plank: hip above the shoulder-ankle line
pub const LOWER_HIPS: &str = "Lower your hips slightly";

/// Coaching text for a joint angle that missed its configured target
///
/// Keyed by exercise, joint kind, side, and the sign of `angle - ideal`.
#[must_use]
pub fn joint_message(
    exercise: ExerciseType,
    joint: Joint,
    angle: f64,
    range: &AngleRange,
) -> &'static str {
    let above_ideal = angle > range.ideal;

    match (exercise, joint.kind) {
        (ExerciseType::Squats, JointKind::Knee) => {
            if above_ideal {
                "Go deeper - squat down more"
            } else {
                "Good depth! Keep it up"
            }
        }
        (ExerciseType::Squats, JointKind::Hip) => "Keep your back straight",
        (ExerciseType::PushUps, JointKind::Elbow) => {
            if above_ideal {
                "Lower your chest closer to the ground"
            } else {
                "Good depth!"
            }
        }
        (ExerciseType::PushUps, JointKind::Shoulder) => "Keep your body in a straight line",
        (ExerciseType::Lunges, JointKind::Knee) => match joint.side {
            Side::Left => "Front knee should be at 90 degrees",
            Side::Right => "Back knee should lower towards ground",
        },
        (ExerciseType::Planks, JointKind::Hip) => {
            if angle < range.ideal {
                "Raise your hips - avoid sagging"
            } else {
                LOWER_HIPS
            }
        }
        _ => FALLBACK,
    }
}
