// 创建学生请求
#[derive(Debug, Clone)]
pub struct CreateStudentRequest {
    pub user_id: i64,
    pub name: String,
}

// 更新学生请求
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
}
