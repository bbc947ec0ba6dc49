//! # Students API
//!
//! A small CRUD service for student records built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate keeps the usual layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `Student` entity and the repository trait
//! - **Application Layer** ([`application`]) - Service turning storage outcomes into typed errors
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors and middleware
//!
//! ## Endpoints
//!
//! - `POST   /api/students`       - create, returns `{ "id": ... }`
//! - `GET    /api/students`       - list
//! - `GET    /api/students/{id}`  - fetch one
//! - `PUT    /api/students/{id}`  - replace all fields
//! - `DELETE /api/students/{id}`  - delete
//! - `GET    /health`             - health check
//!
//! Errors always use the envelope `{ "status": "Error", "error": ... }`, see
//! [`error::AppError`].
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="storage/storage.db"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::StudentService;
    pub use crate::domain::entities::{NewStudent, Student};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
