use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password must not be empty");
    }
    Ok(())
}

/// 学生姓名：去除首尾空白后非空，且不超过 100 个字符
pub fn validate_student_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Student name must not be empty");
    }
    if trimmed.chars().count() > 100 {
        return Err("Student name must be at most 100 characters");
    }
    Ok(())
}

pub fn validate_file_url(url: &str) -> Result<(), &'static str> {
    if url.trim().is_empty() {
        return Err("File URL must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last+tag@school.edu").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("a@x").is_err());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_password_not_empty() {
        assert!(validate_password("pw1").is_ok());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_student_name() {
        assert!(validate_student_name("S1").is_ok());
        assert!(validate_student_name("   ").is_err());
        assert!(validate_student_name(&"x".repeat(101)).is_err());
    }
}
