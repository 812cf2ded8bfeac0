// ABOUTME: Unified error handling re-exported from the form-coach-core crate
// ABOUTME: Keeps crate::errors import paths stable for the engine and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types live in `form-coach-core` so data models can return them.

pub use form_coach_core::errors::*;
