// ABOUTME: Repetition tracking state exposed to renderers and persistence layers
// ABOUTME: Snapshot of the phase machine: current/previous phase, rep and set counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::exercise::ExercisePhase;

/// Phase machine state for one exercise session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepetitionState {
    /// Phase the subject is in now
    pub current_phase: ExercisePhase,
    /// Phase before the most recent transition
    pub previous_phase: Option<ExercisePhase>,
    /// Completed repetitions (or holds) in the current set
    pub rep_count: u32,
    /// Set number, starting at 1
    pub set_count: u32,
    /// Whether the repetition in progress has stayed free of significant form
    /// errors. On the frame that completes a repetition it describes the
    /// completed one, and resets on the next update.
    pub is_valid_rep: bool,
    /// Whether this update completed a repetition (or hold)
    #[serde(default)]
    pub rep_completed: bool,
    /// Completed repetitions in the current set that were valid
    #[serde(default)]
    pub valid_rep_count: u32,
    /// When the current phase was entered
    pub phase_start_time: DateTime<Utc>,
}

impl RepetitionState {
    /// Session-initial state anchored at `phase`
    #[must_use]
    pub const fn initial(phase: ExercisePhase, now: DateTime<Utc>) -> Self {
        Self {
            current_phase: phase,
            previous_phase: None,
            rep_count: 0,
            set_count: 1,
            is_valid_rep: true,
            rep_completed: false,
            valid_rep_count: 0,
            phase_start_time: now,
        }
    }
}
