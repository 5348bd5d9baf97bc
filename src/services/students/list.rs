use super::StudentService;
use crate::errors::Result;
use crate::models::students::entities::Student;

pub async fn list_students(service: &StudentService) -> Result<Vec<Student>> {
    service.storage().list_students().await
}

pub async fn list_students_by_user(
    service: &StudentService,
    user_id: i64,
) -> Result<Vec<Student>> {
    service.storage().list_students_by_user(user_id).await
}
