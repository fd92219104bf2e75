// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout CRUD with per-user ownership checks.
//!
//! Every by-ID operation looks the workout up first (`NotFound` for unknown
//! IDs, whoever asks) and only then compares owners (`Forbidden`).

use crate::db::Database;
use crate::error::AppError;
use crate::models::workout::{NewWorkout, WorkoutPatch};
use crate::models::Workout;
use crate::time_utils::now_rfc3339;
use std::sync::Arc;
use validator::Validate;

#[derive(Clone)]
pub struct WorkoutService {
    db: Arc<dyn Database>,
}

impl WorkoutService {
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self { db }
    }

    /// Workouts owned by `user_id`, newest first.
    pub async fn list(&self, user_id: &str) -> Result<Vec<Workout>, AppError> {
        self.db.get_workouts_for_user(user_id).await
    }

    /// A single workout, if `user_id` owns it.
    pub async fn get(&self, user_id: &str, workout_id: &str) -> Result<Workout, AppError> {
        self.load_owned(user_id, workout_id).await
    }

    pub async fn create(&self, user_id: &str, input: NewWorkout) -> Result<Workout, AppError> {
        input.validate()?;

        let now = now_rfc3339();
        let workout = Workout {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: input.name,
            description: input.description,
            exercises: input.exercises,
            created_at: now.clone(),
            updated_at: now,
        };

        self.db.set_workout(&workout).await?;

        tracing::info!(
            user_id,
            workout_id = %workout.id,
            exercises = workout.exercises.len(),
            "Workout created"
        );

        Ok(workout)
    }

    /// Apply a partial update. Fields absent from `patch` keep their values.
    pub async fn update(
        &self,
        user_id: &str,
        workout_id: &str,
        patch: WorkoutPatch,
    ) -> Result<Workout, AppError> {
        let mut workout = self.load_owned(user_id, workout_id).await?;
        patch.validate()?;

        workout.apply_patch(patch, now_rfc3339());
        self.db.set_workout(&workout).await?;

        tracing::info!(user_id, workout_id, "Workout updated");

        Ok(workout)
    }

    pub async fn delete(&self, user_id: &str, workout_id: &str) -> Result<(), AppError> {
        self.load_owned(user_id, workout_id).await?;
        self.db.delete_workout(workout_id).await?;

        tracing::info!(user_id, workout_id, "Workout deleted");

        Ok(())
    }

    async fn load_owned(&self, user_id: &str, workout_id: &str) -> Result<Workout, AppError> {
        let workout = self
            .db
            .get_workout(workout_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;

        if workout.user_id != user_id {
            tracing::warn!(
                user_id,
                workout_id,
                "Rejected access to workout owned by another user"
            );
            return Err(AppError::Forbidden);
        }

        Ok(workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDb;
    use crate::models::Exercise;

    fn service() -> (WorkoutService, MemoryDb) {
        let db = MemoryDb::new();
        (WorkoutService::new(Arc::new(db.clone())), db)
    }

    fn leg_day() -> NewWorkout {
        NewWorkout {
            name: "Leg Day".to_string(),
            description: None,
            exercises: vec![Exercise {
                name: "Squat".to_string(),
                sets: 3,
                reps: 10,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (service, _) = service();
        assert!(service.list("alice").await.unwrap().is_empty());

        let created = service.create("alice", leg_day()).await.unwrap();
        assert_eq!(created.user_id, "alice");
        assert_eq!(created.created_at, created.updated_at);

        let listed = service.list("alice").await.unwrap();
        assert_eq!(listed, vec![created]);
        assert!(service.list("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_back_to_back_creates_list_newest_first() {
        let (service, _) = service();

        let mut created = Vec::new();
        for i in 0..20 {
            let input = NewWorkout {
                name: format!("Workout {}", i),
                ..leg_day()
            };
            created.push(service.create("alice", input).await.unwrap().id);
        }
        created.reverse();

        let listed: Vec<String> = service
            .list("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn test_create_without_exercises_persists_nothing() {
        let (service, db) = service();
        let input = NewWorkout {
            exercises: vec![],
            ..leg_day()
        };

        let err = service.create("alice", input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(db.workout_count(), 0);
    }

    #[tokio::test]
    async fn test_create_without_name() {
        let (service, db) = service();
        let input = NewWorkout {
            name: String::new(),
            ..leg_day()
        };

        let err = service.create("alice", input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(db.workout_count(), 0);
    }

    #[tokio::test]
    async fn test_other_user_is_forbidden() {
        let (service, _) = service();
        let created = service.create("alice", leg_day()).await.unwrap();

        let err = service.get("bob", &created.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden));

        let err = service
            .update("bob", &created.id, WorkoutPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));

        let err = service.delete("bob", &created.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden));

        // Still there for the owner
        assert_eq!(service.get("alice", &created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_workout_is_not_found_for_anyone() {
        let (service, _) = service();

        for user in ["alice", "bob"] {
            let err = service.get(user, "missing").await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));

            let err = service
                .update(user, "missing", WorkoutPatch::default())
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));

            let err = service.delete(user, "missing").await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn test_ownership_checked_before_patch_validation() {
        let (service, _) = service();
        let created = service.create("alice", leg_day()).await.unwrap();
        let bad_patch = WorkoutPatch {
            exercises: Some(vec![]),
            ..Default::default()
        };

        let err = service
            .update("bob", &created.id, bad_patch.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));

        let err = service
            .update("alice", &created.id, bad_patch)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(
            service.get("alice", &created.id).await.unwrap().exercises,
            created.exercises
        );
    }

    #[tokio::test]
    async fn test_partial_update() {
        let (service, _) = service();
        let created = service.create("alice", leg_day()).await.unwrap();

        let patch = WorkoutPatch {
            description: Some("heavy".to_string()),
            ..Default::default()
        };
        let updated = service.update("alice", &created.id, patch).await.unwrap();

        assert_eq!(updated.name, "Leg Day");
        assert_eq!(updated.description.as_deref(), Some("heavy"));
        assert_eq!(updated.exercises, created.exercises);
        assert_eq!(updated.user_id, "alice");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(service.get("alice", &created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (service, _) = service();
        let created = service.create("alice", leg_day()).await.unwrap();

        service.delete("alice", &created.id).await.unwrap();
        let err = service.delete("alice", &created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(service.list("alice").await.unwrap().is_empty());
    }
}
