//! Authentication Models
//! Mission: Define users, roles, token claims and the auth error taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential store entry
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String, // bcrypt hash - never serialize
    pub role: UserRole,
}

/// Closed set of access roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,    // May add employees
    Employee, // Read-only directory access
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Employee => "Employee",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub role: UserRole,
    pub exp: usize, // expiration timestamp
}

/// Authenticated caller, attached to request extensions by the auth middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: UserRole,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            role: claims.role,
        }
    }
}

/// A freshly signed access token and the claim it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub claims: Claims,
}

/// Login form body (`application/x-www-form-urlencoded`)
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
    pub userrole: UserRole,
}

impl LoginResponse {
    pub fn bearer(token: IssuedToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: "bearer".to_string(),
            username: token.claims.sub,
            userrole: token.claims.role,
        }
    }
}

/// Authentication and authorization failures
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown user or wrong password; the two are never distinguished
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Missing, malformed, forged or expired token
    #[error("invalid token")]
    InvalidToken,
    /// Valid identity lacking the required role; carries the client-facing reason
    #[error("forbidden: {0}")]
    Forbidden(&'static str),
    #[error("authentication backend failure: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_serialization() {
        let admin = UserRole::Admin;
        let json = serde_json::to_string(&admin).unwrap();
        assert_eq!(json, r#""Admin""#);

        let employee: UserRole = serde_json::from_str(r#""Employee""#).unwrap();
        assert_eq!(employee, UserRole::Employee);

        assert!(serde_json::from_str::<UserRole>(r#""Manager""#).is_err());
    }

    #[test]
    fn test_identity_from_claims() {
        let claims = Claims {
            sub: "admin".to_string(),
            role: UserRole::Admin,
            exp: 1234567890,
        };

        let identity = Identity::from(claims);
        assert_eq!(identity.username, "admin");
        assert_eq!(identity.role, UserRole::Admin);
    }

    #[test]
    fn test_login_response_shape() {
        let token = IssuedToken {
            access_token: "abc".to_string(),
            claims: Claims {
                sub: "user".to_string(),
                role: UserRole::Employee,
                exp: 0,
            },
        };

        let json = serde_json::to_value(LoginResponse::bearer(token)).unwrap();
        assert_eq!(json["access_token"], "abc");
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["username"], "user");
        assert_eq!(json["userrole"], "Employee");
    }
}
