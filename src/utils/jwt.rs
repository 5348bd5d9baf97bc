use crate::config::JwtConfig;
use crate::errors::{GradecastError, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: usize,  // Expiration time (时间戳)
    pub iat: usize,  // Issued at (签发时间)
}

impl Claims {
    /// 解析 sub 中的用户 ID
    pub fn user_id(&self) -> Result<i64> {
        self.sub
            .parse::<i64>()
            .map_err(|_| GradecastError::invalid_token("Invalid user ID in token subject"))
    }
}

/// 令牌签发与校验
///
/// 启动时构造一次，之后作为进程级句柄共享。密钥只保存在编解码 key 中。
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: chrono::Duration,
}

impl JwtUtils {
    pub fn new(secret: &str, expiry_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            // 超出范围时取上限，签发时再报错
            expiry: chrono::Duration::try_minutes(expiry_minutes).unwrap_or(chrono::Duration::MAX),
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.token_expiry)
    }

    // 为用户签发令牌
    pub fn issue(&self, user_id: i64) -> Result<String> {
        self.issue_with_expiry(user_id, self.expiry)
    }

    // 生成带自定义过期时间的 Token
    pub fn issue_with_expiry(&self, user_id: i64, expiry: chrono::Duration) -> Result<String> {
        let now = chrono::Utc::now();
        let expiration = now.checked_add_signed(expiry).ok_or_else(|| {
            GradecastError::serialization("Token expiry is out of the representable range")
        })?;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| GradecastError::serialization(format!("Failed to sign token: {e}")))
    }

    // 验证 JWT token：签名、格式与过期时间
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| GradecastError::invalid_token(e.to_string()))
    }
}
