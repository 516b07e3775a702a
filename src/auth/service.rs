//! Authentication Flow
//! Mission: Turn credentials into tokens, tokens into identities, and gate by role

use crate::auth::{
    jwt::JwtHandler,
    models::{AuthError, Identity, IssuedToken, UserRole},
    password::{hash_password, verify_password},
    user_store::UserLookup,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Composes the credential store, password verifier and token handler
pub struct AuthService {
    users: Arc<dyn UserLookup>,
    jwt_handler: Arc<JwtHandler>,
    // Verified against when the username is unknown so both failure paths pay for one bcrypt check.
    decoy_hash: String,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserLookup>, jwt_handler: Arc<JwtHandler>, cost: u32) -> Result<Self> {
        Ok(Self {
            users,
            jwt_handler,
            decoy_hash: hash_password("decoy-password", cost)?,
        })
    }

    /// Verify a username/password pair and issue an access token.
    ///
    /// Unknown users and wrong passwords both yield [`AuthError::InvalidCredentials`].
    pub fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let user = self.users.find_by_username(username);

        let hash = user
            .as_ref()
            .map(|u| u.password_hash.as_str())
            .unwrap_or(self.decoy_hash.as_str());
        let valid = verify_password(password, hash)?;

        let user = match user {
            Some(user) if valid => user,
            _ => {
                warn!("❌ Failed login attempt: {}", username);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.jwt_handler.generate_token(&user)?;
        info!("✅ Login successful: {} ({})", user.username, user.role);

        Ok(token)
    }

    /// Validate a bearer token and return the identity it carries.
    pub fn authorize(&self, token: &str) -> Result<Identity, AuthError> {
        self.jwt_handler
            .validate_token(token)
            .map(Identity::from)
            .map_err(|e| {
                debug!("Rejected token: {:#}", e);
                AuthError::InvalidToken
            })
    }

    /// Role gate; `reason` becomes the 403 detail when the caller lacks `role`.
    pub fn require_role(
        &self,
        identity: &Identity,
        role: UserRole,
        reason: &'static str,
    ) -> Result<(), AuthError> {
        if identity.role == role {
            Ok(())
        } else {
            warn!(
                "⛔ {} ({}) denied: requires {}",
                identity.username, identity.role, role
            );
            Err(AuthError::Forbidden(reason))
        }
    }
}
