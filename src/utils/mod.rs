pub mod date;
pub mod jwt;
pub mod password;
pub mod validate;

pub use date::{format_datetime, parse_date};
pub use jwt::JwtUtils;
