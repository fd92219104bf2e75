// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::user::UserResponse;
use crate::models::workout::{NewWorkout, WorkoutPatch};
use crate::models::Workout;
use crate::routes::extract::JsonBody;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route(
            "/api/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

// ─── User Profile ────────────────────────────────────────────

/// Get current user profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    Ok(Json(
        state.credential_service.current_user(&user.user_id).await?,
    ))
}

// ─── Workouts ────────────────────────────────────────────────

/// Confirmation body for deletes.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MessageResponse {
    pub message: String,
}

/// List the caller's workouts, newest first.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Workout>>> {
    tracing::debug!(user_id = %user.user_id, "Fetching workouts");
    Ok(Json(state.workout_service.list(&user.user_id).await?))
}

async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    JsonBody(input): JsonBody<NewWorkout>,
) -> Result<(StatusCode, Json<Workout>)> {
    let workout = state
        .workout_service
        .create(&user.user_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Workout>> {
    Ok(Json(state.workout_service.get(&user.user_id, &id).await?))
}

/// Partially update a workout; absent fields are left unchanged.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<WorkoutPatch>,
) -> Result<Json<Workout>> {
    Ok(Json(
        state
            .workout_service
            .update(&user.user_id, &id, patch)
            .await?,
    ))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.workout_service.delete(&user.user_id, &id).await?;
    Ok(Json(MessageResponse {
        message: "Workout removed".to_string(),
    }))
}
