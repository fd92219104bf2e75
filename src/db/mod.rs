//! Database layer (Firestore, plus an in-memory store for tests and local runs).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::error::AppError;
use crate::models::{User, Workout};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Email -> user ID index used to enforce unique emails
    pub const USER_EMAILS: &str = "user_emails";
    pub const WORKOUTS: &str = "workouts";
}

/// Document store operations used by the services.
///
/// Each write touches a single document, so it is atomic at the store.
#[async_trait]
pub trait Database: Send + Sync {
    /// Get a user by ID.
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError>;

    /// Find a user by exact (case-sensitive) email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Create a new user. Fails with [`AppError::DuplicateEmail`] if the email is taken.
    async fn create_user(&self, user: &User) -> Result<(), AppError>;

    /// Get a workout by ID regardless of owner.
    async fn get_workout(&self, workout_id: &str) -> Result<Option<Workout>, AppError>;

    /// All workouts owned by a user, newest first.
    async fn get_workouts_for_user(&self, user_id: &str) -> Result<Vec<Workout>, AppError>;

    /// Create or overwrite a workout.
    async fn set_workout(&self, workout: &Workout) -> Result<(), AppError>;

    /// Delete a workout by ID.
    async fn delete_workout(&self, workout_id: &str) -> Result<(), AppError>;
}
