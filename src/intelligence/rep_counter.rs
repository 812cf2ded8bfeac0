// ABOUTME: Exercise phase state machine that detects completed repetitions and holds
// ABOUTME: Tracks current/previous phase, a bounded phase history, hold timing, and set boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repetition Counter
//!
//! One instance per user per exercise session. Each frame the counter asks its
//! [`PhaseClassifier`] for the next phase, records any transition, and then
//! evaluates its [`RepCompletionRule`].
//!
//! A completed repetition's validity stays readable for the whole frame that
//! completed it, so a fault recorded after [`RepCounter::update`] in that frame
//! still counts against it. The flag resets at the start of the next update.
//!
//! When the driving angle cannot be measured the phase is held (and a running
//! hold timer keeps running), so occlusion never causes spurious transitions.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use form_coach_core::constants::phases::PHASE_HISTORY_CAPACITY;
use form_coach_core::models::{ExercisePhase, ExerciseProfile, RepetitionState, Skeleton};
use tracing::{debug, info};

use super::algorithms::{ExerciseStrategy, PhaseClassifier, RepCompletionRule};
use crate::config::PhaseThresholds;

/// Phase detector and repetition counter for one exercise session
#[derive(Debug, Clone)]
pub struct RepCounter {
    strategy: ExerciseStrategy,
    state: RepetitionState,
    phase_history: VecDeque<ExercisePhase>,
    history_capacity: usize,
    hold_started_at: Option<DateTime<Utc>>,
}

impl RepCounter {
    /// Create a counter for `profile`, starting at its anchor phase at `now`
    #[must_use]
    pub fn new(profile: &ExerciseProfile, thresholds: &PhaseThresholds, now: DateTime<Utc>) -> Self {
        Self::with_strategy(ExerciseStrategy::for_profile(profile, thresholds), now)
    }

    /// Create a counter from an explicit strategy
    #[must_use]
    pub fn with_strategy(strategy: ExerciseStrategy, now: DateTime<Utc>) -> Self {
        let capacity = match &strategy.completion {
            RepCompletionRule::Cycle { required, .. } => required.len().max(PHASE_HISTORY_CAPACITY),
            RepCompletionRule::Hold { .. } | RepCompletionRule::Never => PHASE_HISTORY_CAPACITY,
        };
        let state = RepetitionState::initial(strategy.classifier.anchor_phase(), now);

        Self {
            strategy,
            state,
            phase_history: VecDeque::with_capacity(capacity),
            history_capacity: capacity,
            hold_started_at: None,
        }
    }

    /// Process one frame of smoothed landmarks
    pub fn update(&mut self, skeleton: &Skeleton, now: DateTime<Utc>) -> &RepetitionState {
        if self.state.rep_completed {
            self.state.rep_completed = false;
            self.state.is_valid_rep = true;
        }

        let current = self.state.current_phase;
        let classifier = self.strategy.classifier;

        let new_phase = match classifier.measure(skeleton) {
            Some(angle) => {
                let phase = classifier.classify_angle(angle, current);
                self.track_hold(phase, now);
                phase
            }
            None => current,
        };

        if new_phase != current {
            self.on_phase_change(new_phase, now);
        }

        if self.is_rep_complete(now) {
            self.complete_rep(now);
        }

        &self.state
    }

    /// Start or clear the hold timer for isometric exercises
    fn track_hold(&mut self, phase: ExercisePhase, now: DateTime<Utc>) {
        if let RepCompletionRule::Hold {
            phase: hold_phase, ..
        } = self.strategy.completion
        {
            if phase == hold_phase {
                self.hold_started_at.get_or_insert(now);
            } else if self.hold_started_at.take().is_some() {
                debug!("Hold interrupted");
            }
        }
    }

    fn on_phase_change(&mut self, new_phase: ExercisePhase, now: DateTime<Utc>) {
        debug!(
            from = %self.state.current_phase,
            to = %new_phase,
            classifier = self.strategy.classifier.name(),
            "Phase transition"
        );

        self.state.previous_phase = Some(self.state.current_phase);
        self.state.current_phase = new_phase;
        self.state.phase_start_time = now;

        if self.phase_history.len() >= self.history_capacity {
            self.phase_history.pop_front();
        }
        self.phase_history.push_back(new_phase);
    }

    fn is_rep_complete(&self, now: DateTime<Utc>) -> bool {
        match &self.strategy.completion {
            RepCompletionRule::Cycle { required, anchor } => RepCompletionRule::cycle_complete(
                required,
                *anchor,
                self.phase_history.iter(),
                self.state.current_phase,
            ),
            RepCompletionRule::Hold { min_hold, .. } => {
                RepCompletionRule::hold_complete(*min_hold, self.hold_started_at, now)
            }
            RepCompletionRule::Never => false,
        }
    }

    fn complete_rep(&mut self, now: DateTime<Utc>) {
        self.state.rep_count += 1;
        self.state.rep_completed = true;
        if self.state.is_valid_rep {
            self.state.valid_rep_count += 1;
        }
        self.phase_history.clear();

        if matches!(self.strategy.completion, RepCompletionRule::Hold { .. }) {
            // Each further full interval of continuous holding counts again
            self.hold_started_at = Some(now);
        }

        info!(
            rep_count = self.state.rep_count,
            set_count = self.state.set_count,
            valid = self.state.is_valid_rep,
            "Repetition completed"
        );
    }

    /// Mark the repetition in progress as having a significant form error.
    /// Right after a completing update this is the repetition just completed.
    pub fn record_form_fault(&mut self) {
        if self.state.rep_completed && self.state.is_valid_rep {
            self.state.valid_rep_count = self.state.valid_rep_count.saturating_sub(1);
        }
        self.state.is_valid_rep = false;
    }

    /// Current state snapshot
    #[must_use]
    pub const fn state(&self) -> &RepetitionState {
        &self.state
    }

    /// Completed repetitions in the current set
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.state.rep_count
    }

    /// Current phase
    #[must_use]
    pub const fn current_phase(&self) -> ExercisePhase {
        self.state.current_phase
    }

    /// Phase changes since the last completed repetition, oldest first
    #[must_use]
    pub const fn phase_history(&self) -> &VecDeque<ExercisePhase> {
        &self.phase_history
    }

    /// When the running hold started, if one is running
    #[must_use]
    pub const fn hold_started_at(&self) -> Option<DateTime<Utc>> {
        self.hold_started_at
    }

    /// Length of the running hold at `now` (zero when not holding)
    #[must_use]
    pub fn hold_duration(&self, now: DateTime<Utc>) -> Duration {
        self.hold_started_at
            .map_or_else(Duration::zero, |start| now - start)
    }

    /// Strategy in use
    #[must_use]
    pub const fn strategy(&self) -> &ExerciseStrategy {
        &self.strategy
    }

    /// Phase classifier in use
    #[must_use]
    pub const fn classifier(&self) -> &PhaseClassifier {
        &self.strategy.classifier
    }

    /// Start a new set: bump the set number and zero the repetition count.
    /// The current phase and its start time are kept.
    pub fn next_set(&mut self) {
        self.state.set_count += 1;
        self.state.rep_count = 0;
        self.state.valid_rep_count = 0;
        self.state.rep_completed = false;
        self.state.is_valid_rep = true;
        self.phase_history.clear();
        info!(set_count = self.state.set_count, "Started next set");
    }

    /// Restore session-initial state
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.state = RepetitionState::initial(self.strategy.classifier.anchor_phase(), now);
        self.phase_history.clear();
        self.hold_started_at = None;
        debug!("Repetition counter reset");
    }
}
