// 用户注册请求
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub name: Option<String>,
    /// 明文密码，仅在服务层内短暂存在
    pub password: String,
}

// 用户登录请求
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
