pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct UserService {
    storage: Arc<dyn Storage>,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 列出所有用户
    pub async fn list_users(&self) -> Result<Vec<User>> {
        list::list_users(self).await
    }

    // 按 ID 获取用户
    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        self.storage.get_user_by_id(user_id).await
    }
}
