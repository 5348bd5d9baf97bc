//! 学生数据的归属校验

use std::sync::Arc;

use crate::errors::{GradecastError, Result};
use crate::models::students::entities::Student;
use crate::storage::Storage;

/// 调用者对学生数据的访问方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// 已认证用户，只能操作自己名下的学生
    Owner(i64),
    /// 不做归属校验（open 策略）
    Unchecked,
}

impl Access {
    pub fn ensure_owns(&self, student: &Student) -> Result<()> {
        match self {
            Access::Owner(user_id) if student.is_owned_by(*user_id) => Ok(()),
            Access::Owner(_) => Err(GradecastError::forbidden(
                "Not authorized: student belongs to another user",
            )),
            Access::Unchecked => Ok(()),
        }
    }
}

/// 加载学生并校验归属：不存在为 NotFound，不属于调用者为 Forbidden
pub(crate) async fn load_student_for(
    storage: &Arc<dyn Storage>,
    student_id: i64,
    access: Access,
) -> Result<Student> {
    let student = storage
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| GradecastError::not_found(format!("Student {student_id} not found")))?;

    access.ensure_owns(&student)?;
    Ok(student)
}
