// ABOUTME: Anatomical joint identifiers used for angle configuration and joint coloring
// ABOUTME: Binds each (side, joint kind) pair to its three-landmark angle pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::landmark::LandmarkName;
use crate::errors::AppError;

/// Body side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Subject's left
    Left,
    /// Subject's right
    Right,
}

impl Side {
    /// Both sides, left first
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Joints whose angle the engine knows how to measure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum JointKind {
    /// Hip-knee-ankle
    Knee,
    /// Shoulder-elbow-wrist
    Elbow,
    /// Shoulder-hip-knee
    Hip,
    /// Hip-shoulder-elbow
    Shoulder,
}

impl JointKind {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Knee => "knee",
            Self::Elbow => "elbow",
            Self::Hip => "hip",
            Self::Shoulder => "shoulder",
        }
    }
}

/// A sided joint such as `left_knee`
///
/// Serialized as its canonical `"<side>_<kind>"` string so it can key JSON maps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Joint {
    /// Body side
    pub side: Side,
    /// Joint kind
    pub kind: JointKind,
}

impl Joint {
    /// Create a joint identifier
    #[must_use]
    pub const fn new(side: Side, kind: JointKind) -> Self {
        Self { side, kind }
    }

    /// The `(a, vertex, c)` landmarks whose angle at the vertex is this joint's angle
    #[must_use]
    pub const fn landmarks(self) -> (LandmarkName, LandmarkName, LandmarkName) {
        use LandmarkName as L;
        match (self.side, self.kind) {
            (Side::Left, JointKind::Knee) => (L::LeftHip, L::LeftKnee, L::LeftAnkle),
            (Side::Right, JointKind::Knee) => (L::RightHip, L::RightKnee, L::RightAnkle),
            (Side::Left, JointKind::Elbow) => (L::LeftShoulder, L::LeftElbow, L::LeftWrist),
            (Side::Right, JointKind::Elbow) => (L::RightShoulder, L::RightElbow, L::RightWrist),
            (Side::Left, JointKind::Hip) => (L::LeftShoulder, L::LeftHip, L::LeftKnee),
            (Side::Right, JointKind::Hip) => (L::RightShoulder, L::RightHip, L::RightKnee),
            (Side::Left, JointKind::Shoulder) => (L::LeftHip, L::LeftShoulder, L::LeftElbow),
            (Side::Right, JointKind::Shoulder) => (L::RightHip, L::RightShoulder, L::RightElbow),
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.side.as_str(), self.kind.as_str())
    }
}

impl FromStr for Joint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || AppError::invalid_format(format!("Unknown joint name: '{s}'"));
        let (side, kind) = s.split_once('_').ok_or_else(unknown)?;

        let side = match side {
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(unknown()),
        };
        let kind = match kind {
            "knee" => JointKind::Knee,
            "elbow" => JointKind::Elbow,
            "hip" => JointKind::Hip,
            "shoulder" => JointKind::Shoulder,
            _ => return Err(unknown()),
        };

        Ok(Self::new(side, kind))
    }
}

impl TryFrom<String> for Joint {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Joint> for String {
    fn from(joint: Joint) -> Self {
        joint.to_string()
    }
}
