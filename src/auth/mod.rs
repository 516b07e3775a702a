//! Authentication Module
//! Mission: Verify credentials, issue bearer tokens and gate access by role

pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;
pub mod user_store;

pub use jwt::JwtHandler;
pub use middleware::auth_middleware;
pub use models::{AuthError, Identity, UserRole};
pub use service::AuthService;
pub use user_store::{InMemoryUserStore, UserLookup};
