//! Student management service.

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for creating, reading, replacing and deleting students.
///
/// Converts "no such row" outcomes from the repository into
/// [`AppError::NotFound`] so handlers can map them to 404.
pub struct StudentService<R: StudentRepository> {
    repository: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a new student service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new student and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_student(&self, new_student: NewStudent) -> Result<i64, AppError> {
        let id = self.repository.create(new_student).await?;
        tracing::info!(student_id = id, "Student created");
        Ok(id)
    }

    /// Retrieves a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_student(&self, id: i64) -> Result<Student, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Lists all students in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.repository.list().await
    }

    /// Replaces every field of an existing student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_student(&self, id: i64, student: NewStudent) -> Result<(), AppError> {
        if !self.repository.update(id, student).await? {
            return Err(not_found(id));
        }

        tracing::info!(student_id = id, "Student updated");
        Ok(())
    }

    /// Permanently removes a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(student_id = id, "Student deleted");
        Ok(())
    }

    /// Number of stored students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_students(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that storage is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be queried.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("no student found with id {id}"))
}
