//! Core domain entities.
//!
//! The service manages a single entity, [`Student`]. Input for create and
//! update travels as [`NewStudent`], which carries no id.

pub mod student;

pub use student::{NewStudent, Student};
