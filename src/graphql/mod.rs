//! GraphQL schema 与 resolver
//!
//! - `query`：用户、学生与当前用户
//! - `mutation`：注册登录、学生/作业/成绩维护与成绩预测
//! - `types`：实体的 ID、时间与关联字段
//! - `auth`：Bearer 令牌解析与归属策略

pub mod auth;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

#[cfg(test)]
mod tests;

pub use auth::BearerToken;
pub use schema::{GradecastSchema, build_schema};

use async_graphql::ID;

use crate::errors::{GradecastError, Result};

/// GraphQL ID 转为数据库主键
pub(crate) fn parse_id(id: &ID) -> Result<i64> {
    id.parse::<i64>()
        .map_err(|_| GradecastError::validation(format!("Invalid ID: {}", id.as_str())))
}
