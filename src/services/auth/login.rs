use tracing::{info, warn};

use super::{AuthService, normalize_email};
use crate::errors::{GradecastError, Result};
use crate::models::auth::{AuthPayload, LoginRequest};
use crate::utils::password::verify_password;

pub async fn handle_login(service: &AuthService, request: LoginRequest) -> Result<AuthPayload> {
    let email = normalize_email(&request.email);

    // 用户不存在与密码错误返回同一错误
    let Some(user) = service.storage().get_user_by_email(&email).await? else {
        warn!("Login attempt for unknown email");
        return Err(GradecastError::invalid_credentials("Invalid credentials"));
    };

    if !verify_password(&request.password, &user.password_hash) {
        warn!("Login failed for user {}", user.id);
        return Err(GradecastError::invalid_credentials("Invalid credentials"));
    }

    let token = service.jwt().issue(user.id)?;
    info!("User {} logged in successfully", user.id);

    Ok(AuthPayload { token, user })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::models::auth::RegisterRequest;

    async fn registered_service() -> AuthService {
        let service = auth_service(memory_storage().await);
        service
            .register(RegisterRequest {
                email: "a@x.com".to_string(),
                name: None,
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        service
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = registered_service().await;

        let payload = service.login(login("a@x.com", "pw")).await.unwrap();
        assert_eq!(payload.user.email, "a@x.com");
        assert_eq!(service.authenticate(&payload.token).unwrap(), payload.user.id);
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_look_the_same() {
        let service = registered_service().await;

        let wrong = service.login(login("a@x.com", "nope")).await.unwrap_err();
        let unknown = service.login(login("z@x.com", "pw")).await.unwrap_err();

        assert_eq!(wrong.code(), "INVALID_CREDENTIALS");
        assert_eq!(wrong.message(), "Invalid credentials");
        assert_eq!(unknown.code(), wrong.code());
        assert_eq!(unknown.message(), wrong.message());
    }
}
