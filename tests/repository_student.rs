mod common;

use students_api::domain::entities::NewStudent;
use students_api::domain::repositories::StudentRepository;

fn new_student(name: &str, email: &str, age: i64) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let pool = common::create_test_pool().await;
    let repo = common::create_test_repository(pool.clone());

    let first = repo
        .create(new_student("Ada", "ada@example.com", 36))
        .await
        .unwrap();
    let second = repo
        .create(new_student("Alan", "alan@example.com", 41))
        .await
        .unwrap();

    assert!(first > 0);
    assert!(second > first);
    assert_eq!(common::count_students(&pool).await, 2);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let pool = common::create_test_pool().await;
    let repo = common::create_test_repository(pool);

    let id = repo
        .create(new_student("Ada", "ada@example.com", 36))
        .await
        .unwrap();
    assert!(repo.delete(id).await.unwrap());

    let next = repo
        .create(new_student("Alan", "alan@example.com", 41))
        .await
        .unwrap();

    assert!(next > id);
}

#[tokio::test]
async fn test_find_by_id_success() {
    let pool = common::create_test_pool().await;
    let id = common::insert_student(&pool, "Grace", "grace@example.com", 85).await;
    let repo = common::create_test_repository(pool);

    let student = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(student.id, id);
    assert_eq!(student.name, "Grace");
    assert_eq!(student.email, "grace@example.com");
    assert_eq!(student.age, 85);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let pool = common::create_test_pool().await;
    let repo = common::create_test_repository(pool);

    let result = repo.find_by_id(12345).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_returns_all_rows() {
    let pool = common::create_test_pool().await;
    common::insert_student(&pool, "A", "a@example.com", 20).await;
    common::insert_student(&pool, "B", "b@example.com", 21).await;
    common::insert_student(&pool, "C", "c@example.com", 22).await;
    let repo = common::create_test_repository(pool);

    let students = repo.list().await.unwrap();

    assert_eq!(students.len(), 3);
    let mut names: Vec<_> = students.into_iter().map(|s| s.name).collect();
    names.sort();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_list_empty() {
    let pool = common::create_test_pool().await;
    let repo = common::create_test_repository(pool);

    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let pool = common::create_test_pool().await;
    let id = common::insert_student(&pool, "Old", "old@example.com", 10).await;
    let repo = common::create_test_repository(pool);

    let updated = repo
        .update(id, new_student("New", "new@example.com", 11))
        .await
        .unwrap();
    assert!(updated);

    let student = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(student.id, id);
    assert_eq!(student.name, "New");
    assert_eq!(student.email, "new@example.com");
    assert_eq!(student.age, 11);
}

#[tokio::test]
async fn test_update_missing_row() {
    let pool = common::create_test_pool().await;
    let repo = common::create_test_repository(pool);

    let updated = repo
        .update(77, new_student("New", "new@example.com", 11))
        .await
        .unwrap();

    assert!(!updated);
}

#[tokio::test]
async fn test_delete_twice() {
    let pool = common::create_test_pool().await;
    let id = common::insert_student(&pool, "Gone", "gone@example.com", 30).await;
    let repo = common::create_test_repository(pool.clone());

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert_eq!(common::count_students(&pool).await, 0);
}

#[tokio::test]
async fn test_count_and_ping() {
    let pool = common::create_test_pool().await;
    common::insert_student(&pool, "A", "a@example.com", 20).await;
    common::insert_student(&pool, "B", "b@example.com", 21).await;
    let repo = common::create_test_repository(pool);

    assert_eq!(repo.count().await.unwrap(), 2);
    assert!(repo.ping().await.is_ok());
}

#[tokio::test]
async fn test_closed_pool_is_internal_error() {
    let pool = common::create_test_pool().await;
    let repo = common::create_test_repository(pool.clone());
    pool.close().await;

    let result = repo.list().await;

    assert!(matches!(
        result.unwrap_err(),
        students_api::AppError::Internal { .. }
    ));
}
