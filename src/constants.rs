// ABOUTME: Application constants re-exported from the form-coach-core crate
// ABOUTME: Landmark confidence floor, smoothing defaults, phase bands, and scoring tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use form_coach_core::constants::*;
