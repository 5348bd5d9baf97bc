use tracing::info;

use super::StudentService;
use crate::errors::{GradecastError, Result};
use crate::services::{Access, access::load_student_for};

// 作业、成绩与预测由外键级联删除
pub async fn delete_student(service: &StudentService, access: Access, id: i64) -> Result<bool> {
    let storage = service.storage();
    load_student_for(storage, id, access).await?;

    if !storage.delete_student(id).await? {
        return Err(GradecastError::not_found(format!("Student {id} not found")));
    }

    info!("Student {} deleted", id);
    Ok(true)
}
