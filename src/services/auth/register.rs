use tracing::info;

use super::{AuthService, normalize_email};
use crate::errors::{GradecastError, Result};
use crate::models::auth::{AuthPayload, RegisterRequest};
use crate::models::users::requests::CreateUserRequest;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password};

pub async fn handle_register(service: &AuthService, request: RegisterRequest) -> Result<AuthPayload> {
    let email = normalize_email(&request.email);
    validate_email(&email).map_err(GradecastError::validation)?;
    validate_password(&request.password).map_err(GradecastError::validation)?;

    let storage = service.storage();

    // 邮箱唯一，存储层的唯一约束兜底并发注册
    if storage.get_user_by_email(&email).await?.is_some() {
        return Err(GradecastError::duplicate_email("Email already in use"));
    }

    let password_hash = hash_password(&request.password, service.argon2())?;

    let name = request
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let user = storage
        .create_user(CreateUserRequest {
            email,
            name,
            password: password_hash,
        })
        .await?;

    let token = service.jwt().issue(user.id)?;
    info!("User {} registered", user.id);

    Ok(AuthPayload { token, user })
}
