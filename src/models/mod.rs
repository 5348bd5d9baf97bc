pub mod assignments;
pub mod auth;
pub mod grades;
pub mod predictions;
pub mod students;
pub mod users;

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
