// ABOUTME: Configuration module root for the form coach engine
// ABOUTME: Re-exports coach configuration types and their validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Smoothing, phase, and form configuration
pub mod coach;

pub use coach::{CoachConfig, ConfigError, FormThresholds, PhaseThresholds, SmoothingConfig};
