//! Employee Models

use crate::api::error::FieldError;
use crate::auth::models::UserRole;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored employee record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String, // job title, free text
    pub date_joined: NaiveDate,
}

/// `POST /employees/` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub role: String,
    /// Access role sent by clients; checked against the closed set but not stored.
    #[serde(default)]
    pub userrole: Option<UserRole>,
    pub date_joined: NaiveDate,
}

impl NewEmployee {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [("name", &self.name), ("email", &self.email), ("role", &self.role)] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "must not be empty"));
            }
        }

        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.push(FieldError::new("email", "must be a valid email address"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// One page of a listing plus the unpaginated match count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePage {
    pub data: Vec<Employee>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}
