use tracing::info;

use super::AssignmentService;
use crate::errors::{GradecastError, Result};
use crate::services::{Access, access::load_student_for};

pub async fn delete_assignment(
    service: &AssignmentService,
    access: Access,
    id: i64,
) -> Result<bool> {
    let storage = service.storage();

    let assignment = storage
        .get_assignment_by_id(id)
        .await?
        .ok_or_else(|| GradecastError::not_found(format!("Assignment {id} not found")))?;
    load_student_for(storage, assignment.student_id, access).await?;

    if !storage.delete_assignment(id).await? {
        return Err(GradecastError::not_found(format!(
            "Assignment {id} not found"
        )));
    }

    info!("Assignment {} deleted", id);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::users::requests::CreateUserRequest;
    use crate::services::auth::test_support::memory_storage;

    async fn setup() -> (AssignmentService, i64, i64) {
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
        (AssignmentService::new(storage), user.id, student.id)
    }

    #[tokio::test]
    async fn test_submit_and_delete_assignment() {
        let (service, owner, student_id) = setup().await;

        let before = chrono::Utc::now() - chrono::Duration::seconds(1);
        let assignment = service
            .create_assignment(Access::Owner(owner), student_id, "https://files/a.pdf")
            .await
            .unwrap();
        assert_eq!(assignment.student_id, student_id);
        assert_eq!(assignment.file_url, "https://files/a.pdf");
        assert!(assignment.submitted_at >= before);

        assert_eq!(service.list_by_student(student_id).await.unwrap().len(), 1);

        assert!(
            service
                .delete_assignment(Access::Owner(owner), assignment.id)
                .await
                .unwrap()
        );
        let err = service
            .delete_assignment(Access::Owner(owner), assignment.id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_assignment_requires_existing_owned_student() {
        let (service, owner, student_id) = setup().await;

        let err = service
            .create_assignment(Access::Owner(owner), 9999, "https://files/a.pdf")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");

        let err = service
            .create_assignment(Access::Owner(owner + 1), student_id, "https://files/a.pdf")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");

        let err = service
            .create_assignment(Access::Unchecked, student_id, " ")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
    }

    #[tokio::test]
    async fn test_delete_assignment_checks_owner() {
        let (service, owner, student_id) = setup().await;
        let assignment = service
            .create_assignment(Access::Owner(owner), student_id, "https://files/a.pdf")
            .await
            .unwrap();

        let err = service
            .delete_assignment(Access::Owner(owner + 1), assignment.id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");

        // 未被删除
        assert_eq!(service.list_by_student(student_id).await.unwrap().len(), 1);

        let err = service
            .delete_assignment(Access::Owner(owner + 1), 9999)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }
}
