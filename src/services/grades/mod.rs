pub mod create;
pub mod delete;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::grades::entities::Grade;
use crate::services::Access;
use crate::storage::Storage;

pub struct GradeService {
    storage: Arc<dyn Storage>,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 按日期升序
    pub async fn list_by_student(&self, student_id: i64) -> Result<Vec<Grade>> {
        self.storage.list_grades_by_student(student_id).await
    }

    pub async fn add_grade(
        &self,
        access: Access,
        student_id: i64,
        value: f64,
        date: &str,
    ) -> Result<Grade> {
        create::add_grade(self, access, student_id, value, date).await
    }

    pub async fn delete_grade(&self, access: Access, id: i64) -> Result<bool> {
        delete::delete_grade(self, access, id).await
    }
}
