// 创建用户请求（用于存储层，password 已是哈希值）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}
