//! Authentication API Endpoints
//! Mission: Exchange form credentials for a bearer token

use crate::api::error::ApiError;
use crate::auth::{
    models::{LoginRequest, LoginResponse},
    service::AuthService,
};
use anyhow::Context;
use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use std::sync::Arc;
use tracing::info;

/// Login endpoint - POST /login
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    form: Result<Form<LoginRequest>, FormRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Form(payload) = form.map_err(|e| ApiError::rejected("form", e))?;
    info!("🔐 Login attempt: {}", payload.username);

    // bcrypt is CPU-bound; keep it off the async workers.
    let token = tokio::task::spawn_blocking(move || {
        auth.login(&payload.username, &payload.password)
    })
    .await
    .context("Login task failed")??;

    Ok(Json(LoginResponse::bearer(token)))
}
