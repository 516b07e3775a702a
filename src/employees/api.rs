//! Employee API Endpoints
//! Mission: Searchable, paginated listing for any signed-in user; creation for admins

use crate::api::error::ApiError;
use crate::auth::{models::Identity, service::AuthService, UserRole};
use crate::employees::{
    models::{Employee, EmployeePage, NewEmployee},
    query::{EmployeeQuery, ListParams},
    store::EmployeeStore,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Extension, Json,
};
use std::sync::Arc;
use tracing::{debug, info};

/// List employees - GET /employees/
pub async fn list_employees(
    State(store): State<Arc<EmployeeStore>>,
    Extension(identity): Extension<Identity>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<EmployeePage>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::rejected("query", e))?;
    let query = EmployeeQuery::from_params(params)?;

    debug!(
        "{} listing employees: page {} limit {}",
        identity.username,
        query.page(),
        query.limit()
    );

    let page = store.list(&query)?;
    Ok(Json(page))
}

/// Add employee - POST /employees/ (Admin only)
pub async fn add_employee(
    State(auth): State<Arc<AuthService>>,
    State(store): State<Arc<EmployeeStore>>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    auth.require_role(&identity, UserRole::Admin, "Only admins can add employees")?;

    let Json(new_employee) = payload.map_err(|e| ApiError::rejected("body", e))?;
    new_employee.validate()?;

    let employee = store.add(&new_employee)?;
    info!(
        "✅ Employee {} ({}) added by {}",
        employee.id, employee.name, identity.username
    );

    Ok(Json(employee))
}
