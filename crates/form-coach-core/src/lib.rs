// ABOUTME: Core types and constants for the form coach pose-analysis engine
// ABOUTME: Foundation crate with landmark vocabulary, exercise models, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Form Coach Core
//!
//! Foundation crate providing the shared vocabulary of the form coach engine.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Hard limits and default thresholds organized by domain
//! - **models**: Landmarks, skeletons, exercise profiles, repetition and form records

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (Landmark, Skeleton, ExerciseProfile, FormAnalysisResult, etc.)
pub mod models;
