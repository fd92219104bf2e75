// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account registration and login.

use crate::db::Database;
use crate::error::AppError;
use crate::models::user::UserResponse;
use crate::models::User;
use crate::services::password::{hash_password, verify_password};
use crate::services::token::TokenService;
use crate::time_utils::now_rfc3339;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidateEmail};

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Registration {
    #[serde(default)]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Login {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful registration or login.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Registers users, checks passwords, and hands out session tokens.
#[derive(Clone)]
pub struct CredentialService {
    db: Arc<dyn Database>,
    tokens: TokenService,
}

impl CredentialService {
    pub fn new(db: Arc<dyn Database>, tokens: TokenService) -> Self {
        Self { db, tokens }
    }

    /// Create an account and return it with a fresh token.
    pub async fn register(&self, registration: Registration) -> Result<AuthResponse, AppError> {
        registration.validate()?;

        let Registration {
            email,
            password,
            name,
        } = registration;

        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(anyhow::Error::from)??;

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            password_hash,
            name,
            created_at: now_rfc3339(),
        };

        self.db.create_user(&user).await.inspect_err(|e| {
            if matches!(e, AppError::DuplicateEmail) {
                tracing::info!("Registration rejected: email already registered");
            }
        })?;

        tracing::info!(user_id = %user.id, "User registered");

        let token = self.tokens.issue(&user.id)?;
        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    /// Check credentials and return the user with a fresh token.
    pub async fn login(&self, login: Login) -> Result<AuthResponse, AppError> {
        login.validate()?;

        // No account can exist under a malformed address, and the raw value
        // must not reach the store as a document ID.
        if !login.email.validate_email() {
            return Err(AppError::InvalidCredentials);
        }

        let user = self
            .db
            .find_user_by_email(&login.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let hash = user.password_hash.clone();
        let password = login.password;
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(anyhow::Error::from)??;

        if !matches {
            tracing::info!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "User logged in");

        let token = self.tokens.issue(&user.id)?;
        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    /// Profile of an authenticated user.
    pub async fn current_user(&self, user_id: &str) -> Result<UserResponse, AppError> {
        self.db
            .get_user(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}
