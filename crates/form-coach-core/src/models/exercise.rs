// ABOUTME: Exercise type enumeration, phase vocabulary, and immutable exercise profiles
// ABOUTME: Profiles carry display metadata, per-joint angle ranges, and the ordered phase cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::joint::Joint;
use crate::errors::{AppError, AppResult};

/// Exercises the engine knows about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Bodyweight squat
    Squats,
    /// Push-up
    PushUps,
    /// Forward lunge
    Lunges,
    /// Forearm plank (isometric)
    Planks,
    /// Deadlift
    Deadlifts,
    /// Burpee
    Burpees,
    /// Jumping jack
    JumpingJacks,
    /// User-defined pattern
    Custom,
}

impl ExerciseType {
    /// Every exercise type
    pub const ALL: [Self; 8] = [
        Self::Squats,
        Self::PushUps,
        Self::Lunges,
        Self::Planks,
        Self::Deadlifts,
        Self::Burpees,
        Self::JumpingJacks,
        Self::Custom,
    ];

    /// Canonical snake_case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squats => "squats",
            Self::PushUps => "push_ups",
            Self::Lunges => "lunges",
            Self::Planks => "planks",
            Self::Deadlifts => "deadlifts",
            Self::Burpees => "burpees",
            Self::JumpingJacks => "jumping_jacks",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|exercise| exercise.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown exercise type: '{s}'. Valid options: squats, push_ups, lunges, planks, deadlifts, burpees, jumping_jacks, custom"
                ))
            })
    }
}

/// Discrete stage of an exercise's motion cycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExercisePhase {
    /// Rest/standing position
    Starting,
    /// Moving toward the bottom
    Descending,
    /// Deepest point of the movement
    Bottom,
    /// Moving back up
    Ascending,
    /// Extended position (push-ups)
    Top,
    /// Isometric hold
    Holding,
    /// Final stretch back to standing (lunges)
    Returning,
}

impl ExercisePhase {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Descending => "descending",
            Self::Bottom => "bottom",
            Self::Ascending => "ascending",
            Self::Top => "top",
            Self::Holding => "holding",
            Self::Returning => "returning",
        }
    }
}

impl fmt::Display for ExercisePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exercise difficulty tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Suitable for anyone
    Beginner,
    /// Requires some base strength or balance
    Intermediate,
    /// Requires technique coaching
    Advanced,
}

/// Muscle groups an exercise targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Back
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps and triceps
    Arms,
    /// Abdominals and obliques
    Core,
    /// Quads, hamstrings, calves
    Legs,
    /// Glutes
    Glutes,
    /// Whole body
    FullBody,
}

/// Acceptable and ideal angle for one joint (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    /// Minimum acceptable angle
    pub min: f64,
    /// Maximum acceptable angle
    pub max: f64,
    /// Angle for perfect form
    pub ideal: f64,
}

impl AngleRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: f64, max: f64, ideal: f64) -> Self {
        Self { min, max, ideal }
    }

    /// Whether an angle lies strictly inside the acceptable range.
    /// Boundary values are out of range.
    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        angle > self.min && angle < self.max
    }

    /// Absolute distance from the ideal angle
    #[must_use]
    pub fn deviation(&self, angle: f64) -> f64 {
        (angle - self.ideal).abs()
    }
}

/// Per-joint angle tolerances in the order the profile lists them
///
/// Serialized as a JSON object; document order is preserved so form errors
/// are reported in configured order. A joint may appear only once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyAngles {
    entries: Vec<(Joint, AngleRange)>,
}

impl KeyAngles {
    /// Empty set of tolerances
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the range for `joint`, keeping its position if already present
    pub fn insert(&mut self, joint: Joint, range: AngleRange) {
        match self.entries.iter_mut().find(|(j, _)| *j == joint) {
            Some(entry) => entry.1 = range,
            None => self.entries.push((joint, range)),
        }
    }

    /// Range configured for `joint`
    #[must_use]
    pub fn get(&self, joint: Joint) -> Option<&AngleRange> {
        self.entries
            .iter()
            .find_map(|(j, range)| (*j == joint).then_some(range))
    }

    /// Configured joints and ranges, in order
    pub fn iter(&self) -> std::slice::Iter<'_, (Joint, AngleRange)> {
        self.entries.iter()
    }

    /// Configured joints, in order
    pub fn joints(&self) -> impl Iterator<Item = Joint> + '_ {
        self.entries.iter().map(|(joint, _)| *joint)
    }

    /// Number of configured joints
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no joint is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a KeyAngles {
    type Item = &'a (Joint, AngleRange);
    type IntoIter = std::slice::Iter<'a, (Joint, AngleRange)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(Joint, AngleRange)> for KeyAngles {
    fn from_iter<I: IntoIterator<Item = (Joint, AngleRange)>>(iter: I) -> Self {
        let mut angles = Self::new();
        for (joint, range) in iter {
            angles.insert(joint, range);
        }
        angles
    }
}

impl Serialize for KeyAngles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (joint, range) in &self.entries {
            map.serialize_entry(joint, range)?;
        }
        map.end()
    }
}

struct KeyAnglesVisitor;

impl<'de> Visitor<'de> for KeyAnglesVisitor {
    type Value = KeyAngles;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of joint names to angle ranges")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut angles = KeyAngles::new();
        while let Some((joint, range)) = access.next_entry::<Joint, AngleRange>()? {
            if angles.get(joint).is_some() {
                return Err(de::Error::custom(format!("duplicate joint '{joint}'")));
            }
            angles.entries.push((joint, range));
        }
        Ok(angles)
    }
}

impl<'de> Deserialize<'de> for KeyAngles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(KeyAnglesVisitor)
    }
}

/// Immutable per-exercise configuration, loaded once per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProfile {
    /// Stable identifier
    pub id: String,
    /// Exercise this profile configures
    pub exercise_type: ExerciseType,
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Targeted muscle groups
    #[serde(default)]
    pub target_muscles: Vec<MuscleGroup>,
    /// Step-by-step coaching instructions
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Angle tolerances per joint, in evaluation order
    #[serde(default)]
    pub key_angles: KeyAngles,
    /// Phases of one repetition cycle, anchor phase first
    pub phases: Vec<ExercisePhase>,
}

impl ExerciseProfile {
    /// Phase a repetition starts from and returns to
    #[must_use]
    pub fn anchor_phase(&self) -> ExercisePhase {
        self.phases.first().copied().unwrap_or(ExercisePhase::Starting)
    }

    /// Whether the profile targets a muscle group
    #[must_use]
    pub fn targets(&self, muscle: MuscleGroup) -> bool {
        self.target_muscles.contains(&muscle)
    }

    /// Check internal consistency
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if:
    /// - the phase list is empty
    /// - an angle range has `min >= max`
    /// - an ideal angle is not strictly inside `(min, max)`; the acceptable
    ///   range is open, so an ideal on a bound would itself be out of range
    /// - an angle bound is not finite
    pub fn validate(&self) -> AppResult<()> {
        if self.phases.is_empty() {
            return Err(AppError::invalid_input(format!(
                "Exercise '{}' must define at least one phase",
                self.id
            )));
        }

        for (joint, range) in &self.key_angles {
            if !(range.min.is_finite() && range.max.is_finite() && range.ideal.is_finite()) {
                return Err(AppError::invalid_input(format!(
                    "Exercise '{}': {joint} angles must be finite",
                    self.id
                )));
            }
            if range.min >= range.max {
                return Err(AppError::invalid_input(format!(
                    "Exercise '{}': {joint} min ({}) must be < max ({})",
                    self.id, range.min, range.max
                )));
            }
            if !range.contains(range.ideal) {
                return Err(AppError::invalid_input(format!(
                    "Exercise '{}': {joint} ideal ({}) must lie strictly within ({}, {})",
                    self.id, range.ideal, range.min, range.max
                )));
            }
        }

        Ok(())
    }
}
