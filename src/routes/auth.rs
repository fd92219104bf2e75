// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration and login routes.

use crate::error::Result;
use crate::routes::extract::JsonBody;
use crate::services::{AuthResponse, Login, Registration};
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Create an account; responds 201 with the user and a session token.
async fn register(
    State(state): State<Arc<AppState>>,
    JsonBody(registration): JsonBody<Registration>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let response = state.credential_service.register(registration).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(login): JsonBody<Login>,
) -> Result<Json<AuthResponse>> {
    Ok(Json(state.credential_service.login(login).await?))
}
