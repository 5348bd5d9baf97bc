use async_graphql::SimpleObject;

use crate::models::users::entities::User;

// 注册/登录成功后返回的令牌与用户
#[derive(Debug, Clone, SimpleObject)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}
