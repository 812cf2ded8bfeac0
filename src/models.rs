// ABOUTME: Core data models re-exported from the form-coach-core crate
// ABOUTME: Landmarks, joints, exercise profiles, repetition state, and form results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Landmark` / `Skeleton`: one frame of body points
//! - `Joint`: a side plus an anatomical joint kind
//! - `ExerciseProfile`: per-exercise angle ranges and phase cycle
//! - `RepetitionState`: phase machine output
//! - `FormAnalysisResult`: posture scoring output

pub use form_coach_core::models::*;
