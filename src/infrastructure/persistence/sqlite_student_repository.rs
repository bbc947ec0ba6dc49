//! SQLite implementation of the student repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    email: String,
    age: i64,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Student::new(r.id, r.name, r.email, r.age)
    }
}

/// SQLite repository for student records.
///
/// Every method is one statement, so SQLite's statement atomicity is the only
/// concurrency guarantee needed.
pub struct SqliteStudentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn create(&self, new_student: NewStudent) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO students (name, email, age)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&new_student.name)
        .bind(&new_student.email)
        .bind(new_student.age)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, name, email, age
            FROM students
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Student::from))
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        // No ORDER BY: callers must not rely on row order.
        let rows = sqlx::query_as::<_, StudentRow>("SELECT id, name, email, age FROM students")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn update(&self, id: i64, student: NewStudent) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE students SET
                name  = ?,
                email = ?,
                age   = ?
            WHERE id = ?
            "#,
        )
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.age)
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
