// ABOUTME: Body landmark vocabulary and per-frame landmark records
// ABOUTME: Defines the closed 33-point LandmarkName set, Landmark, Point2, and the indexed Skeleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::landmarks::{LANDMARK_COUNT, MIN_VISIBILITY};
use crate::errors::AppError;

/// Named anatomical points produced by the pose detector
///
/// The order matches the detector's output indices, so `index()` doubles as
/// the slot of the landmark inside a [`Skeleton`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkName {
    /// Tip of the nose
    Nose,
    /// Inner corner of the left eye
    LeftEyeInner,
    /// Center of the left eye
    LeftEye,
    /// Outer corner of the left eye
    LeftEyeOuter,
    /// Inner corner of the right eye
    RightEyeInner,
    /// Center of the right eye
    RightEye,
    /// Outer corner of the right eye
    RightEyeOuter,
    /// Left ear
    LeftEar,
    /// Right ear
    RightEar,
    /// Left mouth corner
    MouthLeft,
    /// Right mouth corner
    MouthRight,
    /// Left shoulder
    LeftShoulder,
    /// Right shoulder
    RightShoulder,
    /// Left elbow
    LeftElbow,
    /// Right elbow
    RightElbow,
    /// Left wrist
    LeftWrist,
    /// Right wrist
    RightWrist,
    /// Left pinky knuckle
    LeftPinky,
    /// Right pinky knuckle
    RightPinky,
    /// Left index knuckle
    LeftIndex,
    /// Right index knuckle
    RightIndex,
    /// Left thumb
    LeftThumb,
    /// Right thumb
    RightThumb,
    /// Left hip
    LeftHip,
    /// Right hip
    RightHip,
    /// Left knee
    LeftKnee,
    /// Right knee
    RightKnee,
    /// Left ankle
    LeftAnkle,
    /// Right ankle
    RightAnkle,
    /// Left heel
    LeftHeel,
    /// Right heel
    RightHeel,
    /// Tip of the left foot
    LeftFootIndex,
    /// Tip of the right foot
    RightFootIndex,
}

impl LandmarkName {
    /// Every landmark, in detector index order
    pub const ALL: [Self; LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Detector index of this landmark (0..33)
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

impl fmt::Display for LandmarkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandmarkName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| AppError::invalid_format(format!("Unknown landmark name: '{s}'")))
    }
}

/// A planar point in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downward)
    pub y: f64,
}

impl Point2 {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single detected body point for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Which body point this is
    pub name: LandmarkName,
    /// Normalized horizontal position (0-1)
    pub x: f64,
    /// Normalized vertical position (0-1)
    pub y: f64,
    /// Relative depth, when the detector provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Detection confidence (0-1)
    pub visibility: f64,
}

impl Landmark {
    /// Create a planar landmark
    #[must_use]
    pub const fn new(name: LandmarkName, x: f64, y: f64, visibility: f64) -> Self {
        Self {
            name,
            x,
            y,
            z: None,
            visibility,
        }
    }

    /// Attach a depth value
    #[must_use]
    pub const fn with_depth(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Whether the detector was confident enough for geometry to be trusted
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility >= MIN_VISIBILITY
    }

    /// Planar position
    #[must_use]
    pub const fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// One frame of landmarks indexed by [`LandmarkName`]
///
/// Lookup is O(1) and the storage never grows: the vocabulary is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct Skeleton {
    slots: [Option<Landmark>; LANDMARK_COUNT],
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            slots: [None; LANDMARK_COUNT],
        }
    }
}

impl Skeleton {
    /// Build a skeleton from an unordered landmark list (later duplicates win)
    #[must_use]
    pub fn from_landmarks(landmarks: &[Landmark]) -> Self {
        landmarks.iter().copied().collect()
    }

    /// Store a landmark in its slot, replacing any previous value
    pub fn insert(&mut self, landmark: Landmark) {
        self.slots[landmark.name.index()] = Some(landmark);
    }

    /// Landmark by name, regardless of confidence
    #[must_use]
    pub fn get(&self, name: LandmarkName) -> Option<&Landmark> {
        self.slots[name.index()].as_ref()
    }

    /// Landmark by name, only when it meets the visibility floor
    #[must_use]
    pub fn visible(&self, name: LandmarkName) -> Option<&Landmark> {
        self.get(name).filter(|landmark| landmark.is_visible())
    }

    /// Present landmarks in index order
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.slots.iter().flatten()
    }

    /// Number of present landmarks
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no landmark is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Present landmarks as a list, in index order
    #[must_use]
    pub fn to_landmarks(&self) -> Vec<Landmark> {
        self.iter().copied().collect()
    }
}

impl FromIterator<Landmark> for Skeleton {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        let mut skeleton = Self::default();
        for landmark in iter {
            skeleton.insert(landmark);
        }
        skeleton
    }
}

impl From<Vec<Landmark>> for Skeleton {
    fn from(landmarks: Vec<Landmark>) -> Self {
        landmarks.into_iter().collect()
    }
}

impl From<Skeleton> for Vec<Landmark> {
    fn from(skeleton: Skeleton) -> Self {
        skeleton.to_landmarks()
    }
}
