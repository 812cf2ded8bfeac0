// ABOUTME: Core data models for pose landmarks, exercises, repetitions, and form assessment
// ABOUTME: Re-exports every model type so consumers can import from one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared by every engine component.

/// Exercise types, phases, and profiles
pub mod exercise;
/// Per-frame form assessment records
pub mod form;
/// Sided joint identifiers
pub mod joint;
/// Landmark vocabulary and skeleton storage
pub mod landmark;
/// Repetition counter snapshot
pub mod repetition;

pub use exercise::{
    AngleRange, Difficulty, ExercisePhase, ExerciseProfile, ExerciseType, KeyAngles, MuscleGroup,
};
pub use form::{FormAnalysisResult, FormError, JointStatus, Severity};
pub use joint::{Joint, JointKind, Side};
pub use landmark::{Landmark, LandmarkName, Point2, Skeleton};
pub use repetition::RepetitionState;
