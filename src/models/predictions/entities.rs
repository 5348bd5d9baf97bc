use async_graphql::SimpleObject;

// 成绩预测实体
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Prediction {
    #[graphql(skip)]
    pub id: i64,
    #[graphql(skip)]
    pub student_id: i64,
    pub predicted_grade: f64,
    pub feedback: String,
    #[graphql(skip)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
