//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! GraphQL 层通过 [`ErrorExtensions`] 把 `code` 与 `type` 写入错误扩展字段。

use async_graphql::ErrorExtensions;
use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_gradecast_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum GradecastError {
            $($variant(String),)*
        }

        impl GradecastError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GradecastError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GradecastError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GradecastError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GradecastError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GradecastError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gradecast_errors! {
    DatabaseConfig("DATABASE_CONFIG", "Database Configuration Error"),
    DatabaseConnection("DATABASE_CONNECTION", "Database Connection Error"),
    DatabaseOperation("DATABASE_OPERATION", "Database Operation Error"),
    Validation("VALIDATION", "Validation Error"),
    InvalidDate("INVALID_DATE", "Invalid Date"),
    DuplicateEmail("DUPLICATE_EMAIL", "Duplicate Email"),
    InvalidCredentials("INVALID_CREDENTIALS", "Invalid Credentials"),
    Unauthenticated("UNAUTHENTICATED", "Unauthenticated"),
    InvalidToken("INVALID_TOKEN", "Invalid Token"),
    Forbidden("FORBIDDEN", "Forbidden"),
    NotFound("NOT_FOUND", "Resource Not Found"),
    Upstream("UPSTREAM_ERROR", "Upstream Error"),
    Serialization("SERIALIZATION", "Serialization Error"),
}

impl GradecastError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GradecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GradecastError {}

impl ErrorExtensions for GradecastError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.format_simple()).extend_with(|_, ext| {
            ext.set("code", self.code());
            ext.set("type", self.error_type());
        })
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for GradecastError {
    fn from(err: sea_orm::DbErr) -> Self {
        GradecastError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GradecastError {
    fn from(err: serde_json::Error) -> Self {
        GradecastError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for GradecastError {
    fn from(err: chrono::ParseError) -> Self {
        GradecastError::InvalidDate(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GradecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            GradecastError::duplicate_email("test").code(),
            "DUPLICATE_EMAIL"
        );
        assert_eq!(
            GradecastError::unauthenticated("test").code(),
            "UNAUTHENTICATED"
        );
        assert_eq!(GradecastError::upstream("test").code(), "UPSTREAM_ERROR");
        assert_eq!(GradecastError::not_found("test").code(), "NOT_FOUND");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            GradecastError::invalid_credentials("test").error_type(),
            "Invalid Credentials"
        );
        assert_eq!(
            GradecastError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = GradecastError::forbidden("Not authorized");
        assert_eq!(err.message(), "Not authorized");
    }

    #[test]
    fn test_format_simple() {
        let err = GradecastError::invalid_date("bad date");
        let formatted = err.format_simple();
        assert!(formatted.contains("Invalid Date"));
        assert!(formatted.contains("bad date"));
    }

    #[test]
    fn test_graphql_extensions() {
        let err = GradecastError::forbidden("Not authorized").extend();
        assert_eq!(err.message, "Forbidden: Not authorized");

        let pos = async_graphql::Pos { line: 1, column: 1 };
        let json = serde_json::to_value(err.into_server_error(pos)).unwrap();
        assert_eq!(json["extensions"]["code"], "FORBIDDEN");
        assert_eq!(json["extensions"]["type"], "Forbidden");
    }
}
