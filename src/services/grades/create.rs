use tracing::info;

use super::GradeService;
use crate::errors::{GradecastError, Result};
use crate::models::grades::{entities::Grade, requests::CreateGradeRequest};
use crate::services::{Access, access::load_student_for};
use crate::utils::parse_date;

pub async fn add_grade(
    service: &GradeService,
    access: Access,
    student_id: i64,
    value: f64,
    date: &str,
) -> Result<Grade> {
    let storage = service.storage();
    load_student_for(storage, student_id, access).await?;

    if !value.is_finite() {
        return Err(GradecastError::validation("Grade value must be a finite number"));
    }
    let date = parse_date(date)?;

    let grade = storage
        .create_grade(CreateGradeRequest {
            student_id,
            value,
            date,
        })
        .await?;

    info!("Grade {} recorded for student {}", grade.id, student_id);
    Ok(grade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::users::requests::CreateUserRequest;
    use crate::services::auth::test_support::memory_storage;
    use crate::utils::format_datetime;

    async fn setup() -> (GradeService, i64, i64) {
        let storage = memory_storage().await;
        let user = storage
            .create_user(CreateUserRequest {
                email: "a@x.com".to_string(),
                name: None,
                password: "hash".to_string(),
            })
            .await
            .unwrap();
        let student = storage
            .create_student(CreateStudentRequest {
                user_id: user.id,
                name: "S1".to_string(),
            })
            .await
            .unwrap();
        (GradeService::new(storage), user.id, student.id)
    }

    #[tokio::test]
    async fn test_add_grade_parses_date() {
        let (service, owner, student_id) = setup().await;

        let grade = service
            .add_grade(Access::Owner(owner), student_id, 85.0, "2024-01-01")
            .await
            .unwrap();
        assert_eq!(grade.value, 85.0);
        assert_eq!(format_datetime(&grade.date), "2024-01-01T00:00:00.000Z");

        let grades = service.list_by_student(student_id).await.unwrap();
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].id, grade.id);
    }

    #[tokio::test]
    async fn test_add_grade_rejects_bad_input() {
        let (service, owner, student_id) = setup().await;

        let err = service
            .add_grade(Access::Owner(owner), student_id, 85.0, "yesterday")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_DATE");

        let err = service
            .add_grade(Access::Owner(owner), student_id, f64::NAN, "2024-01-01")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION");

        let err = service
            .add_grade(Access::Owner(owner), 9999, 85.0, "2024-01-01")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");

        assert!(service.list_by_student(student_id).await.unwrap().is_empty());
    }
}
