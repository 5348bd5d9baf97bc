pub mod graphql;

pub mod health;

pub use graphql::configure_graphql_routes;
pub use health::configure_health_routes;
