//! 日期解析与输出格式

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::errors::{GradecastError, Result};

/// 解析客户端传入的日期
///
/// 支持 RFC 3339（`2024-01-01T10:00:00Z`）、无时区的日期时间（按 UTC）
/// 以及纯日期（当天 00:00 UTC）。
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        && let Some(naive) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(naive.and_utc());
    }

    Err(GradecastError::invalid_date(format!(
        "Cannot parse date '{input}', expected YYYY-MM-DD or RFC 3339"
    )))
}

/// 以毫秒精度的 RFC 3339 UTC 字符串输出，例如 `2024-01-01T00:00:00.000Z`
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
