use async_graphql::SimpleObject;

// 用户实体
//
// id 与时间字段由 graphql::types 中的 ComplexObject 输出，
// password_hash 永远不出现在 GraphQL schema 中。
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct User {
    #[graphql(skip)]
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    #[graphql(skip)]
    pub password_hash: String,
    #[graphql(skip)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
