//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::StudentService;
use crate::infrastructure::persistence::SqliteStudentRepository;

#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<StudentService<SqliteStudentRepository>>,
    /// Environment name reported by the health endpoint.
    pub env: String,
}

impl AppState {
    pub fn new(student_service: Arc<StudentService<SqliteStudentRepository>>, env: String) -> Self {
        Self {
            student_service,
            env,
        }
    }
}
