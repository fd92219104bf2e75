// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Tracker: personal workout logging behind a JWT-protected REST API.
//!
//! Users register and log in to receive a bearer token, then create, list,
//! update and delete their own workouts. Every workout is owned by exactly
//! one user and only that user may read or change it.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Database;
use services::{CredentialService, TokenService, WorkoutService};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub token_service: TokenService,
    pub credential_service: CredentialService,
    pub workout_service: WorkoutService,
}

impl AppState {
    /// Wire up services over the given database.
    pub fn new(config: Config, db: Arc<dyn Database>) -> Self {
        let token_service = TokenService::new(
            &config.jwt_signing_key,
            chrono::Duration::hours(config.jwt_ttl_hours),
        );
        let credential_service = CredentialService::new(db.clone(), token_service.clone());
        let workout_service = WorkoutService::new(db);

        Self {
            config,
            token_service,
            credential_service,
            workout_service,
        }
    }
}
