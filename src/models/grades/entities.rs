use async_graphql::SimpleObject;

// 成绩实体
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Grade {
    #[graphql(skip)]
    pub id: i64,
    #[graphql(skip)]
    pub student_id: i64,
    pub value: f64,
    #[graphql(skip)]
    pub date: chrono::DateTime<chrono::Utc>,
}
