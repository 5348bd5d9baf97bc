use tracing::info;

use super::StudentService;
use crate::errors::{GradecastError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::utils::validate::validate_student_name;

pub async fn create_student(
    service: &StudentService,
    owner_id: i64,
    name: &str,
) -> Result<Student> {
    validate_student_name(name).map_err(GradecastError::validation)?;

    let student = service
        .storage()
        .create_student(CreateStudentRequest {
            user_id: owner_id,
            name: name.trim().to_string(),
        })
        .await?;

    info!("Student {} created for user {}", student.id, owner_id);
    Ok(student)
}
