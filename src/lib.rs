// ABOUTME: Main library entry point for the form coaching engine
// ABOUTME: Turns per-frame body landmarks into smoothed skeletons, repetition counts, and form scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Form Coach
//!
//! A real-time exercise form engine. Each video frame's body landmarks are
//! smoothed, converted to joint angles, and fed to two consumers: a phase
//! state machine that counts repetitions and holds, and a posture analyzer
//! that scores the frame and produces coaching feedback.
//!
//! ## Features
//!
//! - **Keypoint smoothing**: One scalar Kalman filter per landmark axis
//! - **Phase tracking**: Hysteresis-based phase classification per exercise
//! - **Repetition counting**: Cycle completion and timed holds
//! - **Form scoring**: Per-joint angle tiers plus posture heuristics
//! - **Exercise catalog**: Validated JSON profiles with a bundled library
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use form_coach::config::CoachConfig;
//! use form_coach::intelligence::{ExerciseCatalog, ExerciseSession};
//! use form_coach::models::ExerciseType;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = CoachConfig::load()?;
//!     let catalog = ExerciseCatalog::builtin()?;
//!     let profile = catalog.get(ExerciseType::Squats)?.clone();
//!
//!     let mut session = ExerciseSession::new(profile, &config, Utc::now());
//!     let report = session.process_frame(&[], Utc::now());
//!     println!("reps: {}, score: {}", report.repetition.rep_count, report.form.score);
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Pose analysis engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;
