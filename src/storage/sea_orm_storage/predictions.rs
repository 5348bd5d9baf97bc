//! 成绩预测存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{PredictionActiveModel, Predictions};
use crate::entity::predictions::Column;
use crate::errors::{GradecastError, Result};
use crate::models::predictions::{entities::Prediction, requests::CreatePredictionRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 保存预测结果
    pub async fn create_prediction_impl(&self, req: CreatePredictionRequest) -> Result<Prediction> {
        let now = chrono::Utc::now().timestamp();

        let model = PredictionActiveModel {
            student_id: Set(req.student_id),
            predicted_grade: Set(req.predicted_grade),
            feedback: Set(req.feedback),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradecastError::database_operation(format!("保存预测结果失败: {e}")))?;

        Ok(result.into_prediction())
    }

    /// 列出学生的预测记录
    pub async fn list_predictions_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Prediction>> {
        let predictions = Predictions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradecastError::database_operation(format!("查询预测记录失败: {e}")))?;

        Ok(predictions
            .into_iter()
            .map(|m| m.into_prediction())
            .collect())
    }
}
