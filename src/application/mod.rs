//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single entry point per operation.
//!
//! # Available Services
//!
//! - [`services::student_service::StudentService`] - Student CRUD and not-found mapping

pub mod services;
