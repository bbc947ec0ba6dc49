//! DTOs for the student endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewStudent, Student};
use crate::error::AppError;

/// Request body for `POST /api/students` and `PUT /api/students/{id}`.
///
/// Fields are optional at the serde level so that a missing field becomes a
/// validation violation instead of an opaque decode error.
#[derive(Debug, Deserialize, Validate)]
pub struct StudentRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "age is required"),
        range(min = 0, message = "age must be zero or greater")
    )]
    pub age: Option<i64>,
}

impl StudentRequest {
    /// Validates the payload and converts it into domain input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every failed field.
    pub fn into_new_student(self) -> Result<NewStudent, AppError> {
        self.validate()?;

        match (self.name, self.email, self.age) {
            (Some(name), Some(email), Some(age)) => Ok(NewStudent { name, email, age }),
            _ => Err(AppError::bad_request("name, email and age are required")),
        }
    }
}

/// Student as returned by the API.
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            age: s.age,
        }
    }
}

/// Response for a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Confirmation returned by update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "OK",
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> StudentRequest {
        serde_json::from_value(value).unwrap()
    }

    fn violated_fields(err: AppError) -> Vec<String> {
        match err {
            AppError::Validation { violations } => {
                violations.into_iter().map(|v| v.field).collect()
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let request = parse(json!({ "name": "Ada", "email": "ada@example.com", "age": 36 }));

        let student = request.into_new_student().unwrap();

        assert_eq!(student.name, "Ada");
        assert_eq!(student.email, "ada@example.com");
        assert_eq!(student.age, 36);
    }

    #[test]
    fn test_zero_age_is_allowed() {
        let request = parse(json!({ "name": "Baby", "email": "b@example.com", "age": 0 }));

        assert!(request.into_new_student().is_ok());
    }

    #[test]
    fn test_empty_name_and_bad_email() {
        let request = parse(json!({ "name": "", "email": "not-an-email", "age": 5 }));

        let fields = violated_fields(request.into_new_student().unwrap_err());

        assert_eq!(fields, vec!["email", "name"]);
    }

    #[test]
    fn test_missing_fields_are_violations() {
        let request = parse(json!({}));

        let fields = violated_fields(request.into_new_student().unwrap_err());

        assert_eq!(fields, vec!["age", "email", "name"]);
    }

    #[test]
    fn test_negative_age_rejected() {
        let request = parse(json!({ "name": "Old", "email": "o@example.com", "age": -1 }));

        let fields = violated_fields(request.into_new_student().unwrap_err());

        assert_eq!(fields, vec!["age"]);
    }

    #[test]
    fn test_wrong_age_type_fails_to_decode() {
        let result: Result<StudentRequest, _> =
            serde_json::from_value(json!({ "name": "A", "email": "a@example.com", "age": "ten" }));

        assert!(result.is_err());
    }

    #[test]
    fn test_response_serialization() {
        let student = Student::new(4, "Ada".into(), "ada@example.com".into(), 36);

        let value = serde_json::to_value(StudentResponse::from(student)).unwrap();

        assert_eq!(
            value,
            json!({ "id": 4, "name": "Ada", "email": "ada@example.com", "age": 36 })
        );
    }
}
