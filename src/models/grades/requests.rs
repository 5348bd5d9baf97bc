// 创建成绩请求（date 已在服务层解析）
#[derive(Debug, Clone)]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub value: f64,
    pub date: chrono::DateTime<chrono::Utc>,
}
