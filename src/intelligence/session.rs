// ABOUTME: Per-frame pipeline for one user performing one exercise
// ABOUTME: Chains keypoint smoothing, phase tracking, and form scoring into a single FrameReport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Session
//!
//! Per frame: raw landmarks are smoothed, the smoothed skeleton drives the
//! repetition counter, and the same skeleton is scored by the form analyzer.
//! Non-minor form errors mark the repetition in progress as invalid; on the
//! frame that completes a repetition they mark the completed one.

use chrono::{DateTime, Utc};
use form_coach_core::models::{
    ExerciseProfile, FormAnalysisResult, Landmark, RepetitionState, Skeleton,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::algorithms::KeypointSmoother;
use super::form_analyzer::FormAnalyzer;
use super::rep_counter::RepCounter;
use crate::config::CoachConfig;

/// Everything produced for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Frame time
    pub timestamp: DateTime<Utc>,
    /// Smoothed landmarks used for every decision in this frame
    pub landmarks: Skeleton,
    /// Repetition state after this frame
    pub repetition: RepetitionState,
    /// Posture assessment of this frame
    pub form: FormAnalysisResult,
}

/// One exercise session: smoother bank, repetition counter, and form analyzer
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    profile: ExerciseProfile,
    smoother: KeypointSmoother,
    counter: RepCounter,
    analyzer: FormAnalyzer,
}

impl ExerciseSession {
    /// Start a session for `profile` at `now`
    #[must_use]
    pub fn new(profile: ExerciseProfile, config: &CoachConfig, now: DateTime<Utc>) -> Self {
        let counter = RepCounter::new(&profile, &config.phase, now);
        info!(
            exercise = %profile.exercise_type,
            classifier = counter.classifier().name(),
            "Exercise session started"
        );

        Self {
            smoother: KeypointSmoother::new(config.smoothing),
            analyzer: FormAnalyzer::new(config.form),
            counter,
            profile,
        }
    }

    /// Run the full pipeline on one frame of raw landmarks
    pub fn process_frame(&mut self, landmarks: &[Landmark], now: DateTime<Utc>) -> FrameReport {
        let skeleton = self.smoother.smooth_frame(landmarks);
        let phase = self.counter.update(&skeleton, now).current_phase;
        let form = self.analyzer.analyze(&self.profile, &skeleton, phase, now);

        if !form.is_correct {
            self.counter.record_form_fault();
        }

        FrameReport {
            timestamp: now,
            landmarks: skeleton,
            repetition: self.counter.state().clone(),
            form,
        }
    }

    /// Exercise profile in use
    #[must_use]
    pub const fn profile(&self) -> &ExerciseProfile {
        &self.profile
    }

    /// Current repetition state
    #[must_use]
    pub const fn state(&self) -> &RepetitionState {
        self.counter.state()
    }

    /// Repetition counter
    #[must_use]
    pub const fn counter(&self) -> &RepCounter {
        &self.counter
    }

    /// Begin the next set
    pub fn next_set(&mut self) {
        self.counter.next_set();
    }

    /// Restore session-initial state and clear the smoother bank
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.counter.reset(now);
        self.smoother.reset();
    }
}
