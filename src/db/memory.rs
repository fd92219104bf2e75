// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store.
//!
//! Backs the test suite and `STORAGE_BACKEND=memory` local runs. Mirrors the
//! Firestore layout: users, an email index, and workouts keyed by ID.

use crate::db::Database;
use crate::error::AppError;
use crate::models::{User, Workout};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory database. Clones share the same underlying maps.
#[derive(Clone, Default)]
pub struct MemoryDb {
    users: Arc<DashMap<String, User>>,
    user_emails: Arc<DashMap<String, String>>,
    workouts: Arc<DashMap<String, Workout>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored workouts across all users.
    pub fn workout_count(&self) -> usize {
        self.workouts.len()
    }
}

#[async_trait]
impl Database for MemoryDb {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(user_id).map(|u| u.value().clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user_id = match self.user_emails.get(email) {
            Some(id) => id.value().clone(),
            None => return Ok(None),
        };
        self.get_user(&user_id).await
    }

    async fn create_user(&self, user: &User) -> Result<(), AppError> {
        match self.user_emails.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::DuplicateEmail),
            Entry::Vacant(slot) => {
                // Insert the user before releasing the shard lock held by `slot`,
                // so a reader never sees an index entry without its user.
                self.users.insert(user.id.clone(), user.clone());
                slot.insert(user.id.clone());
                Ok(())
            }
        }
    }

    async fn get_workout(&self, workout_id: &str) -> Result<Option<Workout>, AppError> {
        Ok(self.workouts.get(workout_id).map(|w| w.value().clone()))
    }

    async fn get_workouts_for_user(&self, user_id: &str) -> Result<Vec<Workout>, AppError> {
        let mut workouts: Vec<Workout> = self
            .workouts
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();

        workouts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(workouts)
    }

    async fn set_workout(&self, workout: &Workout) -> Result<(), AppError> {
        self.workouts.insert(workout.id.clone(), workout.clone());
        Ok(())
    }

    async fn delete_workout(&self, workout_id: &str) -> Result<(), AppError> {
        self.workouts.remove(workout_id);
        Ok(())
    }
}
