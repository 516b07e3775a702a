pub mod error;
pub mod routes;

pub use error::{ApiError, FieldError};
pub use routes::{create_router, AppState};
