// ABOUTME: Algorithm layer for pose analysis: geometry, smoothing, and phase strategies
// ABOUTME: Provides enum-based dispatch for per-exercise phase classification and completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Module
//!
//! Stateless or tightly scoped numeric building blocks used by the per-frame
//! pipeline.
//!
//! # Design Philosophy
//!
//! - **Type Safety**: Exercise strategies are enums, not strings or switches
//! - **Performance**: Enum dispatch, fixed-size estimator banks
//! - **Sharing**: One angle engine feeds both phase detection and scoring

pub mod angles;
pub mod phase;
pub mod smoothing;

// Re-export algorithm types
pub use phase::{ExerciseStrategy, PhaseClassifier, RepCompletionRule};
pub use smoothing::{KeypointFilter, KeypointSmoother, ScalarKalmanFilter};
