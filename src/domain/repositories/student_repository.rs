//! Repository trait for student data access.

use crate::domain::entities::{NewStudent, Student};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the `students` table.
///
/// Each operation maps to a single SQL statement. Absence is reported as
/// `Option`/`bool` so the caller decides how to surface it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStudentRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_student.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Inserts a new student and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_student: NewStudent) -> Result<i64, AppError>;

    /// Finds a student by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Student))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Lists every student. Row order is whatever storage returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    /// Replaces name, email and age of an existing student.
    ///
    /// Returns `false` if no row has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, student: NewStudent) -> Result<bool, AppError>;

    /// Hard-deletes a student.
    ///
    /// Returns `false` if no row has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips a trivial query to prove the connection works.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
