use tracing::info;

use super::GradeService;
use crate::errors::{GradecastError, Result};
use crate::services::{Access, access::load_student_for};

pub async fn delete_grade(service: &GradeService, access: Access, id: i64) -> Result<bool> {
    let storage = service.storage();

    let grade = storage
        .get_grade_by_id(id)
        .await?
        .ok_or_else(|| GradecastError::not_found(format!("Grade {id} not found")))?;
    load_student_for(storage, grade.student_id, access).await?;

    if !storage.delete_grade(id).await? {
        return Err(GradecastError::not_found(format!("Grade {id} not found")));
    }

    info!("Grade {} deleted", id);
    Ok(true)
}
