use super::SeaOrmStorage;
use crate::config::DatabaseConfig;
use crate::models::{
    assignments::requests::CreateAssignmentRequest,
    grades::requests::CreateGradeRequest,
    predictions::requests::CreatePredictionRequest,
    students::requests::{CreateStudentRequest, UpdateStudentRequest},
    users::requests::CreateUserRequest,
};
use crate::storage::Storage;
use crate::utils::parse_date;

async fn memory_storage() -> SeaOrmStorage {
    let config = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    SeaOrmStorage::connect(&config).await.unwrap()
}

fn user_request(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        email: email.to_string(),
        name: Some("Ann".to_string()),
        password: "$argon2id$fake".to_string(),
    }
}

#[test]
fn test_build_database_url() {
    assert_eq!(
        SeaOrmStorage::build_database_url(":memory:").unwrap(),
        "sqlite::memory:"
    );
    assert_eq!(
        SeaOrmStorage::build_database_url("data/app.db").unwrap(),
        "sqlite://data/app.db?mode=rwc"
    );
    assert_eq!(
        SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").unwrap(),
        "postgres://u:p@localhost/db"
    );
    assert_eq!(
        SeaOrmStorage::build_database_url("redis://localhost")
            .unwrap_err()
            .code(),
        "DATABASE_CONFIG"
    );
}

#[tokio::test]
async fn test_user_lookup_and_unique_email() {
    let storage = memory_storage().await;

    let user = storage.create_user(user_request("a@x.com")).await.unwrap();
    assert_eq!(user.email, "a@x.com");

    let by_email = storage.get_user_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);
    assert!(storage.get_user_by_email("b@x.com").await.unwrap().is_none());

    let err = storage
        .create_user(user_request("a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "DUPLICATE_EMAIL");

    assert_eq!(storage.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_student_update_and_delete() {
    let storage = memory_storage().await;
    let user = storage.create_user(user_request("a@x.com")).await.unwrap();

    let student = storage
        .create_student(CreateStudentRequest {
            user_id: user.id,
            name: "S1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(student.user_id, user.id);

    let renamed = storage
        .update_student(
            student.id,
            UpdateStudentRequest {
                name: Some("S2".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "S2");

    assert!(
        storage
            .update_student(9999, UpdateStudentRequest::default())
            .await
            .unwrap()
            .is_none()
    );

    assert_eq!(
        storage.list_students_by_user(user.id).await.unwrap().len(),
        1
    );
    assert!(storage.delete_student(student.id).await.unwrap());
    assert!(!storage.delete_student(student.id).await.unwrap());
    assert!(storage.list_students().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_student_delete_cascades_to_children() {
    let storage = memory_storage().await;
    let user = storage.create_user(user_request("a@x.com")).await.unwrap();
    let student = storage
        .create_student(CreateStudentRequest {
            user_id: user.id,
            name: "S1".to_string(),
        })
        .await
        .unwrap();

    let grade = storage
        .create_grade(CreateGradeRequest {
            student_id: student.id,
            value: 85.0,
            date: parse_date("2024-01-01").unwrap(),
        })
        .await
        .unwrap();
    let assignment = storage
        .create_assignment(CreateAssignmentRequest {
            student_id: student.id,
            file_url: "https://files/a.pdf".to_string(),
        })
        .await
        .unwrap();
    storage
        .create_prediction(CreatePredictionRequest {
            student_id: student.id,
            predicted_grade: 88.0,
            feedback: "Keep going".to_string(),
        })
        .await
        .unwrap();

    assert!(storage.delete_student(student.id).await.unwrap());

    assert!(storage.get_grade_by_id(grade.id).await.unwrap().is_none());
    assert!(
        storage
            .get_assignment_by_id(assignment.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        storage
            .list_predictions_by_student(student.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_child_requires_existing_student() {
    let storage = memory_storage().await;

    let err = storage
        .create_grade(CreateGradeRequest {
            student_id: 404,
            value: 70.0,
            date: parse_date("2024-01-01").unwrap(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "DATABASE_OPERATION");
}

#[tokio::test]
async fn test_grades_are_ordered_by_date() {
    let storage = memory_storage().await;
    let user = storage.create_user(user_request("a@x.com")).await.unwrap();
    let student = storage
        .create_student(CreateStudentRequest {
            user_id: user.id,
            name: "S1".to_string(),
        })
        .await
        .unwrap();

    for (value, date) in [(70.0, "2024-03-01"), (90.0, "2024-01-01")] {
        storage
            .create_grade(CreateGradeRequest {
                student_id: student.id,
                value,
                date: parse_date(date).unwrap(),
            })
            .await
            .unwrap();
    }

    let grades = storage.list_grades_by_student(student.id).await.unwrap();
    let values: Vec<f64> = grades.iter().map(|g| g.value).collect();
    assert_eq!(values, vec![90.0, 70.0]);

    assert!(storage.delete_grade(grades[0].id).await.unwrap());
    assert!(!storage.delete_grade(grades[0].id).await.unwrap());
}
