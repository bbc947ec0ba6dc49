#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use students_api::application::services::StudentService;
use students_api::infrastructure::database::MIGRATOR;
use students_api::infrastructure::persistence::SqliteStudentRepository;
use students_api::state::AppState;

/// In-memory database with the schema applied.
///
/// A single never-expiring connection: every `sqlite::memory:` connection is
/// its own database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

pub async fn insert_student(pool: &SqlitePool, name: &str, email: &str, age: i64) -> i64 {
    sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
        .bind(name)
        .bind(email)
        .bind(age)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_students(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_repository(pool: SqlitePool) -> SqliteStudentRepository {
    SqliteStudentRepository::new(Arc::new(pool))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(create_test_repository(pool));
    let student_service = Arc::new(StudentService::new(repository));

    AppState::new(student_service, "test".to_string())
}
