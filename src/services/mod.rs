// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod credentials;
pub mod password;
pub mod token;
pub mod workouts;

pub use credentials::{AuthResponse, CredentialService, Login, Registration};
pub use token::{Claims, TokenService};
pub use workouts::WorkoutService;
