pub mod create;

use std::sync::Arc;

use crate::config::PredictionConfig;
use crate::errors::Result;
use crate::models::predictions::entities::Prediction;
use crate::prediction::PredictionClient;
use crate::storage::Storage;

pub struct PredictionService {
    storage: Arc<dyn Storage>,
    client: Arc<dyn PredictionClient>,
    // 占位指标，随请求一并发送
    assignments: f64,
    attendance: f64,
}

impl PredictionService {
    pub fn new(
        storage: Arc<dyn Storage>,
        client: Arc<dyn PredictionClient>,
        config: &PredictionConfig,
    ) -> Self {
        Self {
            storage,
            client,
            assignments: config.placeholder_assignments,
            attendance: config.placeholder_attendance,
        }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn list_by_student(&self, student_id: i64) -> Result<Vec<Prediction>> {
        self.storage.list_predictions_by_student(student_id).await
    }

    /// 请求预测服务并保存结果，调用者必须是学生的所有者
    pub async fn create_prediction(&self, user_id: i64, student_id: i64) -> Result<Prediction> {
        create::create_prediction(self, user_id, student_id).await
    }
}
