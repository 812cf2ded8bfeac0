// ABOUTME: Immutable exercise profile collection loaded from JSON or the bundled dataset
// ABOUTME: Validates profiles at load time and provides lookup by type, difficulty, and muscle group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use form_coach_core::errors::{AppError, AppResult, ErrorCode};
use form_coach_core::models::{Difficulty, ExerciseProfile, ExerciseType, MuscleGroup};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Bundled exercise library
const BUILTIN_EXERCISES: &str = include_str!("../../data/exercises.json");

/// On-disk catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    exercises: Vec<ExerciseProfile>,
}

/// Validated, read-only set of exercise profiles keyed by type
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseCatalog {
    profiles: BTreeMap<ExerciseType, ExerciseProfile>,
}

impl ExerciseCatalog {
    /// Build a catalog from profiles, validating each one
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if a profile fails validation, or
    /// `AppError::ResourceAlreadyExists` if two profiles share an exercise type
    pub fn from_profiles(profiles: impl IntoIterator<Item = ExerciseProfile>) -> AppResult<Self> {
        let mut by_type = BTreeMap::new();

        for profile in profiles {
            profile.validate()?;
            let exercise_type = profile.exercise_type;
            if by_type.insert(exercise_type, profile).is_some() {
                return Err(AppError::already_exists(format!(
                    "Exercise type '{exercise_type}' is defined more than once"
                )));
            }
        }

        debug!(count = by_type.len(), "Exercise catalog built");
        Ok(Self { profiles: by_type })
    }

    /// Parse a catalog from a JSON document of the form `{"exercises": [...]}`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidFormat` on malformed JSON or unknown joint or
    /// phase names, and any validation error from [`Self::from_profiles`]
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_profiles(document.exercises)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `AppError::IoError` if the file cannot be read, and any error
    /// from [`Self::from_json_str`]
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCode::IoError,
                format!("Failed to read catalog {}: {e}", path.display()),
            )
            .with_source(e)
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), count = catalog.len(), "Loaded exercise catalog");
        Ok(catalog)
    }

    /// The bundled exercise library
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled dataset is corrupt
    pub fn builtin() -> AppResult<Self> {
        Self::from_json_str(BUILTIN_EXERCISES)
    }

    /// Profile for an exercise type
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` if the catalog has no such profile
    pub fn get(&self, exercise_type: ExerciseType) -> AppResult<&ExerciseProfile> {
        self.profiles
            .get(&exercise_type)
            .ok_or_else(|| AppError::not_found(format!("Exercise '{exercise_type}'")))
    }

    /// All selectable profiles (the `custom` placeholder is excluded)
    pub fn all(&self) -> impl Iterator<Item = &ExerciseProfile> {
        self.profiles
            .values()
            .filter(|p| p.exercise_type != ExerciseType::Custom)
    }

    /// Selectable profiles of a difficulty tier
    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &ExerciseProfile> {
        self.all().filter(move |p| p.difficulty == difficulty)
    }

    /// Selectable profiles targeting a muscle group
    pub fn by_muscle_group(&self, muscle: MuscleGroup) -> impl Iterator<Item = &ExerciseProfile> {
        self.all().filter(move |p| p.targets(muscle))
    }

    /// Number of profiles, including `custom`
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
