// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Stored workout record in Firestore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    /// Opaque workout ID (also used as document ID)
    pub id: String,
    /// Owning user ID, never changes after creation
    pub user_id: String,
    /// Workout title
    pub name: String,
    /// Free-form notes
    #[serde(default)]
    pub description: Option<String>,
    /// Exercises in the order they were entered
    pub exercises: Vec<Exercise>,
    /// Creation time (RFC3339, used for newest-first listing)
    pub created_at: String,
    /// Last modification time (RFC3339)
    pub updated_at: String,
}

/// A single exercise entry embedded in a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    #[validate(length(min = 1, message = "Exercise name is required"))]
    pub name: String,
    #[validate(range(min = 1, message = "Sets must be a positive integer"))]
    pub sets: u32,
    #[validate(range(min = 1, message = "Reps must be a positive integer"))]
    pub reps: u32,
}

/// Request body for creating a workout.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewWorkout {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "At least one exercise is required"))]
    #[validate(nested)]
    pub exercises: Vec<Exercise>,
}

/// Request body for a partial workout update.
///
/// Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WorkoutPatch {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "At least one exercise is required"))]
    #[validate(nested)]
    pub exercises: Option<Vec<Exercise>>,
}

impl Workout {
    /// Apply the fields present in `patch`, stamping `updated_at`.
    pub fn apply_patch(&mut self, patch: WorkoutPatch, updated_at: String) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(exercises) = patch.exercises {
            self.exercises = exercises;
        }
        self.updated_at = updated_at;
    }
}
