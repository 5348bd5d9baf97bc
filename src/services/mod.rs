pub mod access;
pub mod assignments;
pub mod auth;
pub mod grades;
pub mod predictions;
pub mod students;
pub mod users;

use std::sync::Arc;

pub use access::Access;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use grades::GradeService;
pub use predictions::PredictionService;
pub use students::StudentService;
pub use users::UserService;

use crate::config::AppConfig;
use crate::prediction::PredictionClient;
use crate::storage::Storage;
use crate::utils::JwtUtils;

/// 启动时构造一次，注册到 GraphQL schema 中
pub struct Services {
    pub auth: AuthService,
    pub users: UserService,
    pub students: StudentService,
    pub assignments: AssignmentService,
    pub grades: GradeService,
    pub predictions: PredictionService,
}

impl Services {
    pub fn new(
        storage: Arc<dyn Storage>,
        predictor: Arc<dyn PredictionClient>,
        config: &AppConfig,
    ) -> Self {
        Self {
            auth: AuthService::new(
                storage.clone(),
                JwtUtils::from_config(&config.jwt),
                config.argon2.clone(),
            ),
            users: UserService::new(storage.clone()),
            students: StudentService::new(storage.clone()),
            assignments: AssignmentService::new(storage.clone()),
            grades: GradeService::new(storage.clone()),
            predictions: PredictionService::new(storage, predictor, &config.prediction),
        }
    }
}
