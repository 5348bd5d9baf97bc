use async_graphql::SimpleObject;

// 学生实体，归属于唯一的用户
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Student {
    #[graphql(skip)]
    pub id: i64,
    pub name: String,
    #[graphql(skip)]
    pub user_id: i64,
    #[graphql(skip)]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[graphql(skip)]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
