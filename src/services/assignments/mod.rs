pub mod create;
pub mod delete;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::services::Access;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Arc<dyn Storage>,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn list_by_student(&self, student_id: i64) -> Result<Vec<Assignment>> {
        self.storage.list_assignments_by_student(student_id).await
    }

    // 提交作业，submitted_at 取当前时间
    pub async fn create_assignment(
        &self,
        access: Access,
        student_id: i64,
        file_url: &str,
    ) -> Result<Assignment> {
        create::create_assignment(self, access, student_id, file_url).await
    }

    pub async fn delete_assignment(&self, access: Access, id: i64) -> Result<bool> {
        delete::delete_assignment(self, access, id).await
    }
}
