pub mod login;
pub mod profile;
pub mod register;

use std::sync::Arc;

use crate::config::Argon2Config;
use crate::errors::Result;
use crate::models::auth::{AuthPayload, LoginRequest, RegisterRequest};
use crate::models::users::entities::User;
use crate::storage::Storage;
use crate::utils::JwtUtils;

pub struct AuthService {
    storage: Arc<dyn Storage>,
    jwt: JwtUtils,
    argon2: Argon2Config,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>, jwt: JwtUtils, argon2: Argon2Config) -> Self {
        Self {
            storage,
            jwt,
            argon2,
        }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn jwt(&self) -> &JwtUtils {
        &self.jwt
    }

    pub(crate) fn argon2(&self) -> &Argon2Config {
        &self.argon2
    }

    // 用户注册
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthPayload> {
        register::handle_register(self, request).await
    }

    // 登录验证
    pub async fn login(&self, request: LoginRequest) -> Result<AuthPayload> {
        login::handle_login(self, request).await
    }

    // 校验令牌并返回用户 ID
    pub fn authenticate(&self, token: &str) -> Result<i64> {
        self.jwt.verify(token)?.user_id()
    }

    // 当前用户信息
    pub async fn current_user(&self, user_id: i64) -> Result<Option<User>> {
        profile::handle_current_user(self, user_id).await
    }
}

/// 邮箱统一去除首尾空白并转为小写
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
