use async_graphql::SimpleObject;

// 作业提交实体
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Assignment {
    #[graphql(skip)]
    pub id: i64,
    #[graphql(skip)]
    pub student_id: i64,
    pub file_url: String,
    #[graphql(skip)]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
