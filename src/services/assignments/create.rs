use tracing::info;

use super::AssignmentService;
use crate::errors::{GradecastError, Result};
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::services::{Access, access::load_student_for};
use crate::utils::validate::validate_file_url;

pub async fn create_assignment(
    service: &AssignmentService,
    access: Access,
    student_id: i64,
    file_url: &str,
) -> Result<Assignment> {
    let storage = service.storage();
    load_student_for(storage, student_id, access).await?;

    validate_file_url(file_url).map_err(GradecastError::validation)?;

    let assignment = storage
        .create_assignment(CreateAssignmentRequest {
            student_id,
            file_url: file_url.trim().to_string(),
        })
        .await?;

    info!(
        "Assignment {} submitted for student {}",
        assignment.id, student_id
    );
    Ok(assignment)
}
