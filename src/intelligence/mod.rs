// ABOUTME: Pose intelligence engine: smoothing, angles, phase tracking, and form scoring
// ABOUTME: Wires the per-frame components and the exercise catalog into one public surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Turns a stream of body-landmark frames into repetition counts and posture
//! feedback.
//!
//! Data flow per frame:
//!
//! ```text
//! raw landmarks -> KeypointSmoother -> Skeleton -+-> RepCounter   -> RepetitionState
//!                                                +-> FormAnalyzer -> FormAnalysisResult
//! ```
//!
//! Both consumers read joint angles through [`algorithms::angles`], so phase
//! detection and scoring always agree on what a joint angle is.

pub mod algorithms;
/// Exercise profile library
pub mod exercise_catalog;
/// Coaching message table
pub mod feedback;
/// Per-frame posture scoring
pub mod form_analyzer;
/// Phase state machine and repetition counting
pub mod rep_counter;
/// Per-frame pipeline
pub mod session;

pub use algorithms::{
    ExerciseStrategy, KeypointFilter, KeypointSmoother, PhaseClassifier, RepCompletionRule,
    ScalarKalmanFilter,
};
pub use exercise_catalog::ExerciseCatalog;
pub use form_analyzer::{FormAnalyzer, PostureCheck};
pub use rep_counter::RepCounter;
pub use session::{ExerciseSession, FrameReport};
