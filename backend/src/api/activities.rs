//! Activity API handlers
//!
//! Listing, signup and unregister endpoints over the shared activity registry.

use crate::error::AppError;
use crate::state::{Activity, ActivityName, SharedRegistry};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// Query string of the signup endpoint
#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    /// Email of the participant to sign up
    pub email: String,
}

/// GET /activities - List all activities
pub async fn list_activities(
    State(state): State<SharedRegistry>,
) -> Result<Json<BTreeMap<ActivityName, Activity>>, AppError> {
    let registry = state.read().await;
    Ok(Json(registry.list().clone()))
}

/// POST /activities/:activity/signup?email=... - Sign a participant up
pub async fn signup(
    State(state): State<SharedRegistry>,
    Path(activity): Path<ActivityName>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut registry = state.write().await;
    registry.signup(&activity, &query.email).map_err(|e| {
        warn!(activity = %activity, email = %query.email, error = %e, "Signup rejected");
        AppError::Signup(e)
    })?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity),
    }))
}

/// DELETE /activities/:activity/participants/:email - Remove a participant
pub async fn unregister(
    State(state): State<SharedRegistry>,
    Path((activity, email)): Path<(ActivityName, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut registry = state.write().await;
    registry.unregister(&activity, &email).map_err(|e| {
        warn!(activity = %activity, email = %email, error = %e, "Unregister rejected");
        AppError::Unregister(e)
    })?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity),
    }))
}
