//! Employee Directory Module
//! Mission: Store employees and serve filtered, paginated listings

pub mod api;
pub mod models;
pub mod query;
pub mod store;

pub use models::{Employee, EmployeePage, NewEmployee};
pub use query::{EmployeeQuery, FilterBy};
pub use store::EmployeeStore;
