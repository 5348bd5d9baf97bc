//! 请求级认证
//!
//! HTTP 层把 `Authorization` 头解析为 [`BearerToken`] 放入请求数据，
//! resolver 通过 [`require_user_id`] / [`student_access`] 取得调用者身份。

use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;
use async_graphql::Context;
use tracing::debug;

use crate::config::OwnershipPolicy;
use crate::errors::{GradecastError, Result};
use crate::services::{Access, AuthService};

const BEARER_PREFIX: &str = "Bearer ";

/// 请求携带的令牌
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerToken {
    Missing,
    /// 有 Authorization 头但不是 Bearer 方案
    Malformed,
    Token(String),
}

impl BearerToken {
    pub fn from_request(request: &HttpRequest) -> Self {
        match request.headers().get(AUTHORIZATION) {
            None => Self::Missing,
            Some(value) => match value.to_str() {
                Ok(value) => Self::parse(value),
                Err(_) => Self::Malformed,
            },
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.strip_prefix(BEARER_PREFIX).map(str::trim) {
            Some(token) if !token.is_empty() => Self::Token(token.to_string()),
            _ => Self::Malformed,
        }
    }
}

/// 要求调用者已认证，返回令牌中的用户 ID
pub fn require_user_id(ctx: &Context<'_>) -> Result<i64> {
    let token = match ctx.data_opt::<BearerToken>() {
        Some(BearerToken::Token(token)) => token,
        Some(BearerToken::Malformed) => {
            return Err(GradecastError::unauthenticated(
                "Authorization header must use the Bearer scheme",
            ));
        }
        Some(BearerToken::Missing) | None => {
            return Err(GradecastError::unauthenticated("Not authenticated"));
        }
    };

    // 令牌服务的 InvalidToken 只记录日志，对外统一为 Unauthenticated
    ctx.data_unchecked::<AuthService>()
        .authenticate(token)
        .map_err(|e| {
            debug!("Token rejected: {}", e);
            GradecastError::unauthenticated("Invalid or expired token")
        })
}

/// 按归属策略决定学生相关 mutation 的访问方式
pub fn student_access(ctx: &Context<'_>) -> Result<Access> {
    match ctx.data_unchecked::<OwnershipPolicy>() {
        OwnershipPolicy::Strict => require_user_id(ctx).map(Access::Owner),
        OwnershipPolicy::Open => Ok(Access::Unchecked),
    }
}
