use actix_web::{HttpRequest, HttpResponse, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::config::AppConfig;
use crate::graphql::{BearerToken, GradecastSchema};

// 执行 GraphQL 请求，令牌随请求数据传入 resolver
pub async fn graphql(
    schema: web::Data<GradecastSchema>,
    request: HttpRequest,
    gql_request: GraphQLRequest,
) -> GraphQLResponse {
    let token = BearerToken::from_request(&request);
    schema
        .execute(gql_request.into_inner().data(token))
        .await
        .into()
}

// GraphiQL 调试页面
pub async fn graphiql() -> HttpResponse {
    let config = AppConfig::get();
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            GraphiQLSource::build()
                .endpoint(&config.graphql.path)
                .finish(),
        )
}

// 配置路由
pub fn configure_graphql_routes(cfg: &mut web::ServiceConfig) {
    let config = AppConfig::get();

    let mut resource = web::resource(config.graphql.path.as_str()).route(web::post().to(graphql));
    if config.graphql.playground {
        resource = resource.route(web::get().to(graphiql));
    }
    cfg.service(resource);
}
