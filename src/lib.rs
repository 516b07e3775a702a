//! Crewzy Employee Directory Backend
//!
//! Bearer-token authentication over a fixed credential set, plus a searchable,
//! paginated employee table. `main.rs` wires these modules into a server; the
//! integration tests drive the same router in-process.

pub mod api;
pub mod auth;
pub mod config;
pub mod employees;
pub mod middleware;

pub use api::{create_router, AppState};
pub use config::{AuthConfig, Config};
