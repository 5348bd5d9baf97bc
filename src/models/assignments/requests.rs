// 创建作业提交请求
#[derive(Debug, Clone)]
pub struct CreateAssignmentRequest {
    pub student_id: i64,
    pub file_url: String,
}
