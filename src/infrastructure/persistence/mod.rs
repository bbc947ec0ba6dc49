//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-checked queries.
//!
//! # Repositories
//!
//! - [`SqliteStudentRepository`] - Student storage and retrieval

pub mod sqlite_student_repository;

pub use sqlite_student_repository::SqliteStudentRepository;
