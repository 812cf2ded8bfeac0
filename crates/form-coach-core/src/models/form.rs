// ABOUTME: Per-frame posture assessment records produced by the form analyzer
// ABOUTME: Defines FormError severities, traffic-light joint status, and FormAnalysisResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::joint::Joint;
use crate::constants::colors;

/// How serious a posture problem is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Small deviation, not surfaced as coaching feedback
    Minor,
    /// Large deviation from ideal
    Moderate,
    /// Out of range or unsafe posture
    Major,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Major => "major",
        })
    }
}

/// Traffic-light classification of one joint for overlay rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum JointStatus {
    /// Within tolerance
    Correct,
    /// Minor deviation or not measurable this frame
    Minor,
    /// Out of range or large deviation
    Major,
}

impl JointStatus {
    /// Overlay color for this status
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Correct => colors::CORRECT,
            Self::Minor => colors::MINOR_ERROR,
            Self::Major => colors::MAJOR_ERROR,
        }
    }
}

/// A single posture problem detected in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormError {
    /// Frame time
    pub timestamp: DateTime<Utc>,
    /// Machine-readable tag, e.g. `left_knee_out_of_range` or `hips_sagging`
    pub error_type: String,
    /// Severity
    pub severity: Severity,
    /// Coaching text
    pub message: String,
    /// Joints involved
    pub affected_joints: Vec<Joint>,
}

/// Posture assessment of one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormAnalysisResult {
    /// No error above minor severity was found
    pub is_correct: bool,
    /// Posture score (0-100)
    pub score: f64,
    /// Errors in detection order: per-joint checks first, then posture checks
    pub errors: Vec<FormError>,
    /// Status of every configured joint
    pub joint_status: BTreeMap<Joint, JointStatus>,
    /// De-duplicated coaching messages
    pub feedback: Vec<String>,
}
