// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (accounts, plus the `user_emails` uniqueness index)
//! - Workouts (per-user workout records)

use crate::db::{collections, Database};
use crate::error::AppError;
use crate::models::user::EmailIndex;
use crate::models::{User, Workout};
use async_trait::async_trait;
use firestore::errors::FirestoreError;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: firestore::FirestoreDb,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self { client })
    }

    /// Document ID for an email index entry.
    ///
    /// Emails may contain characters Firestore rejects in IDs (`/`), so encode them.
    fn email_doc_id(email: &str) -> String {
        urlencoding::encode(email).into_owned()
    }
}

#[async_trait]
impl Database for FirestoreDb {
    // ─── User Operations ─────────────────────────────────────────

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let index: Option<EmailIndex> = self
            .client
            .fluent()
            .select()
            .by_id_in(collections::USER_EMAILS)
            .obj()
            .one(&Self::email_doc_id(email))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        match index {
            Some(index) => self.get_user(&index.user_id).await,
            None => Ok(None),
        }
    }

    async fn create_user(&self, user: &User) -> Result<(), AppError> {
        let email_doc_id = Self::email_doc_id(&user.email);
        let index = EmailIndex {
            user_id: user.id.clone(),
        };

        // Claim the email first; insert fails if the document already exists.
        let claimed: Result<EmailIndex, FirestoreError> = self
            .client
            .fluent()
            .insert()
            .into(collections::USER_EMAILS)
            .document_id(&email_doc_id)
            .object(&index)
            .execute()
            .await;

        match claimed {
            Ok(_) => {}
            Err(FirestoreError::DataConflictError(_)) => return Err(AppError::DuplicateEmail),
            Err(e) => return Err(AppError::Database(e.to_string())),
        }

        let inserted: Result<User, FirestoreError> = self
            .client
            .fluent()
            .insert()
            .into(collections::USERS)
            .document_id(&user.id)
            .object(user)
            .execute()
            .await;

        if let Err(e) = inserted {
            // Release the email so the user can retry registration.
            if let Err(cleanup) = self
                .client
                .fluent()
                .delete()
                .from(collections::USER_EMAILS)
                .document_id(&email_doc_id)
                .execute()
                .await
            {
                tracing::warn!(error = %cleanup, "Failed to release email index after user insert failure");
            }
            return Err(AppError::Database(e.to_string()));
        }

        Ok(())
    }

    // ─── Workout Operations ──────────────────────────────────────

    async fn get_workout(&self, workout_id: &str) -> Result<Option<Workout>, AppError> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::WORKOUTS)
            .obj()
            .one(workout_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn get_workouts_for_user(&self, user_id: &str) -> Result<Vec<Workout>, AppError> {
        self.client
            .fluent()
            .select()
            .from(collections::WORKOUTS)
            .filter(|q| q.for_all([q.field("user_id").eq(user_id)]))
            .order_by([("created_at", firestore::FirestoreQueryDirection::Descending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn set_workout(&self, workout: &Workout) -> Result<(), AppError> {
        let _: Workout = self
            .client
            .fluent()
            .update()
            .in_col(collections::WORKOUTS)
            .document_id(&workout.id)
            .object(workout)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn delete_workout(&self, workout_id: &str) -> Result<(), AppError> {
        self.client
            .fluent()
            .delete()
            .from(collections::WORKOUTS)
            .document_id(workout_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_doc_id_has_no_slashes() {
        let id = FirestoreDb::email_doc_id("a/b@x.com");
        assert!(!id.contains('/'));
        assert_eq!(id, "a%2Fb%40x.com");
    }
}
