use async_graphql::{EmptySubscription, Schema};

use super::{mutation::MutationRoot, query::QueryRoot};
use crate::config::AppConfig;
use crate::services::Services;

pub type GradecastSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// 注册全部服务与归属策略，并应用查询深度/复杂度限制
pub fn build_schema(services: Services, config: &AppConfig) -> GradecastSchema {
    let Services {
        auth,
        users,
        students,
        assignments,
        grades,
        predictions,
    } = services;

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(auth)
        .data(users)
        .data(students)
        .data(assignments)
        .data(grades)
        .data(predictions)
        .data(config.auth.ownership_policy)
        .limit_depth(config.graphql.depth_limit)
        .limit_complexity(config.graphql.complexity_limit)
        .finish()
}
