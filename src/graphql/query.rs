use async_graphql::{Context, Object, Result, ResultExt};

use super::auth::require_user_id;
use crate::models::{students::entities::Student, users::entities::User};
use crate::services::{AuthService, StudentService, UserService};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// 所有用户
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        ctx.data_unchecked::<UserService>()
            .list_users()
            .await
            .extend()
    }

    /// 所有学生
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        ctx.data_unchecked::<StudentService>()
            .list_students()
            .await
            .extend()
    }

    /// 当前令牌对应的用户，用户已被删除时为 null
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let user_id = require_user_id(ctx).extend()?;
        ctx.data_unchecked::<AuthService>()
            .current_user(user_id)
            .await
            .extend()
    }
}
