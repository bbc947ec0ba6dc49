//! Handlers for student CRUD endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::student::{
    CreatedResponse, MessageResponse, StudentRequest, StudentResponse,
};
use crate::api::extract::{JsonBody, StudentId};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a student.
///
/// # Endpoint
///
/// `POST /api/students`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada Lovelace", "email": "ada@example.com", "age": 36 }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "id": 1 }`.
///
/// # Errors
///
/// Returns 400 on an empty or malformed body, or if validation fails.
/// Returns 500 on storage errors.
pub async fn create_student_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<StudentRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    tracing::info!("Creating a student");

    let new_student = payload.into_new_student()?;
    let id = state.student_service.create_student(new_student).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Returns a single student.
///
/// # Endpoint
///
/// `GET /api/students/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if the student does not exist.
pub async fn get_student_handler(
    StudentId(id): StudentId,
    State(state): State<AppState>,
) -> Result<Json<StudentResponse>, AppError> {
    tracing::info!(student_id = id, "Getting a student");

    let student = state.student_service.get_student(id).await?;

    Ok(Json(student.into()))
}

/// Lists all students. Order is not specified.
///
/// # Endpoint
///
/// `GET /api/students`
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    tracing::info!("Listing students");

    let students = state.student_service.list_students().await?;

    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// Replaces every field of a student.
///
/// # Endpoint
///
/// `PUT /api/students/{id}` (also bound to `PATCH`)
///
/// Full-replace semantics: `name`, `email` and `age` are all required.
///
/// # Errors
///
/// Returns 400 if `id` is not an integer, the body is empty or malformed,
/// or validation fails.
/// Returns 404 if the student does not exist.
pub async fn update_student_handler(
    StudentId(id): StudentId,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<StudentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::info!(student_id = id, "Updating a student");

    let student = payload.into_new_student()?;
    state.student_service.update_student(id, student).await?;

    Ok(Json(MessageResponse::ok(format!("student {id} updated"))))
}

/// Permanently deletes a student.
///
/// # Endpoint
///
/// `DELETE /api/students/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if the student does not exist or was already deleted.
pub async fn delete_student_handler(
    StudentId(id): StudentId,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::info!(student_id = id, "Deleting a student");

    state.student_service.delete_student(id).await?;

    Ok(Json(MessageResponse::ok(format!("student {id} deleted"))))
}

/// Fallback for unmatched routes, so they also get the JSON envelope.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("route not found")
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed()
}
