use super::AuthService;
use crate::errors::Result;
use crate::models::users::entities::User;

// 令牌合法但用户已不存在时返回 None
pub async fn handle_current_user(service: &AuthService, user_id: i64) -> Result<Option<User>> {
    service.storage().get_user_by_id(user_id).await
}
