// 保存预测结果请求
#[derive(Debug, Clone)]
pub struct CreatePredictionRequest {
    pub student_id: i64,
    pub predicted_grade: f64,
    pub feedback: String,
}
