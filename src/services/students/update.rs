use super::StudentService;
use crate::errors::{GradecastError, Result};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};
use crate::services::{Access, access::load_student_for};
use crate::utils::validate::validate_student_name;

pub async fn update_student(
    service: &StudentService,
    access: Access,
    id: i64,
    name: &str,
) -> Result<Student> {
    let storage = service.storage();
    load_student_for(storage, id, access).await?;

    validate_student_name(name).map_err(GradecastError::validation)?;

    storage
        .update_student(
            id,
            UpdateStudentRequest {
                name: Some(name.trim().to_string()),
            },
        )
        .await?
        .ok_or_else(|| GradecastError::not_found(format!("Student {id} not found")))
}
