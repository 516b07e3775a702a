//! Credential Store
//! Mission: Resolve usernames to password hashes and roles

use crate::auth::models::{User, UserRole};
use crate::auth::password::hash_password;
use anyhow::Result;
use std::collections::HashMap;
use tracing::info;

/// Identity lookup capability used by the authentication flow.
pub trait UserLookup: Send + Sync {
    fn find_by_username(&self, username: &str) -> Option<User>;
}

/// Fixed, read-only credential set built once at startup
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, User>,
}

impl InMemoryUserStore {
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.username.clone(), user))
                .collect(),
        }
    }

    /// The directory's built-in accounts: `admin` (Admin) and `user` (Employee).
    pub fn with_default_users(cost: u32) -> Result<Self> {
        let seeds = [
            ("admin", "admin123", UserRole::Admin),
            ("user", "user123", UserRole::Employee),
        ];

        let mut users = Vec::with_capacity(seeds.len());
        for (username, password, role) in seeds {
            users.push(User {
                username: username.to_string(),
                password_hash: hash_password(password, cost)?,
                role,
            });
        }

        info!("🔐 Credential store seeded with {} users", users.len());
        Ok(Self::from_users(users))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserLookup for InMemoryUserStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;

    #[test]
    fn test_default_users_created() {
        let store = InMemoryUserStore::with_default_users(4).unwrap();
        assert_eq!(store.len(), 2);

        let admin = store.find_by_username("admin").unwrap();
        assert_eq!(admin.role, UserRole::Admin);
        assert!(verify_password("admin123", &admin.password_hash).unwrap());

        let user = store.find_by_username("user").unwrap();
        assert_eq!(user.role, UserRole::Employee);
        assert!(verify_password("user123", &user.password_hash).unwrap());
    }

    #[test]
    fn test_lookup_is_exact() {
        let store = InMemoryUserStore::with_default_users(4).unwrap();
        assert!(store.find_by_username("Admin").is_none());
        assert!(store.find_by_username("nonexistent").is_none());
        assert!(store.find_by_username("").is_none());
    }
}
