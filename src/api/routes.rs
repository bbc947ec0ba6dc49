//! API route configuration.

use crate::api::handlers::{
    create_student_handler, delete_student_handler, get_student_handler, list_students_handler,
    method_not_allowed_handler, update_student_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Student CRUD routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /students`       - List all students
/// - `POST   /students`       - Create a student
/// - `GET    /students/{id}`  - Fetch one student
/// - `PUT    /students/{id}`  - Replace a student (`PATCH` is an alias)
/// - `DELETE /students/{id}`  - Delete a student
///
/// Any other method on these paths is a 405 in the JSON error envelope.
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route(
            "/students/{id}",
            get(get_student_handler)
                .put(update_student_handler)
                .patch(update_student_handler)
                .delete(delete_student_handler),
        )
        .method_not_allowed_fallback(method_not_allowed_handler)
}
