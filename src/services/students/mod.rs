pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::entities::Student;
use crate::services::Access;
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 所有学生（不区分用户）
    pub async fn list_students(&self) -> Result<Vec<Student>> {
        list::list_students(self).await
    }

    // 某个用户名下的学生
    pub async fn list_students_by_user(&self, user_id: i64) -> Result<Vec<Student>> {
        list::list_students_by_user(self, user_id).await
    }

    pub async fn create_student(&self, owner_id: i64, name: &str) -> Result<Student> {
        create::create_student(self, owner_id, name).await
    }

    pub async fn update_student(&self, access: Access, id: i64, name: &str) -> Result<Student> {
        update::update_student(self, access, id, name).await
    }

    pub async fn delete_student(&self, access: Access, id: i64) -> Result<bool> {
        delete::delete_student(self, access, id).await
    }
}
