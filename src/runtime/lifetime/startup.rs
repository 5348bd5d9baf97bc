use crate::config::AppConfig;
use crate::errors::Result;
use crate::graphql::{GradecastSchema, build_schema};
use crate::prediction::HttpPredictionClient;
use crate::services::Services;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub schema: GradecastSchema,
}

/// 准备服务器启动的上下文
/// 包括存储、预测客户端与 GraphQL schema
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    // reqwest 与 sqlx 共用 ring 作为 rustls 后端
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    let predictor = HttpPredictionClient::new(&config.prediction)?;
    warn!("Prediction client targets {}", predictor.endpoint());

    let services = Services::new(storage.clone(), Arc::new(predictor), config);
    let schema = build_schema(services, config);
    debug!(
        "GraphQL schema built (depth limit {}, complexity limit {}, ownership policy {:?})",
        config.graphql.depth_limit, config.graphql.complexity_limit, config.auth.ownership_policy
    );

    Ok(StartupContext { storage, schema })
}
