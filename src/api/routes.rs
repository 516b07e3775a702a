use axum::{
    extract::FromRef,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{
    auth::{api as auth_api, auth_middleware, AuthService},
    employees::{api as employees_api, EmployeeStore},
    middleware::request_logging,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub employees: Arc<EmployeeStore>,
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<EmployeeStore> {
    fn from_ref(state: &AppState) -> Self {
        state.employees.clone()
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(
            "/employees",
            get(employees_api::list_employees).post(employees_api::add_employee),
        )
        .route(
            "/employees/",
            get(employees_api::list_employees).post(employees_api::add_employee),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth_middleware,
        ))
        .with_state(state.clone());

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/login", post(auth_api::login))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

// ===== Route Handlers =====

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Backend is running".to_string(),
    })
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ===== Response Types =====

#[derive(Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
