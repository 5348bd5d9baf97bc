use tracing::{info, warn};

use super::PredictionService;
use crate::errors::Result;
use crate::models::predictions::{entities::Prediction, requests::CreatePredictionRequest};
use crate::prediction::{GradeRecord, PredictionInput};
use crate::services::{Access, access::load_student_for};

pub async fn create_prediction(
    service: &PredictionService,
    user_id: i64,
    student_id: i64,
) -> Result<Prediction> {
    let storage = service.storage();

    // 无论归属策略如何，预测都只允许所有者发起
    let student = load_student_for(storage, student_id, Access::Owner(user_id)).await?;

    let grades = storage.list_grades_by_student(student.id).await?;
    let input = PredictionInput {
        grades: grades.iter().map(GradeRecord::from).collect(),
        assignments: service.assignments,
        attendance: service.attendance,
    };

    // 预测失败时不写入任何记录
    let outcome = service.client.predict(&input).await.inspect_err(|e| {
        warn!("Prediction for student {} failed: {}", student.id, e);
    })?;

    let prediction = storage
        .create_prediction(CreatePredictionRequest {
            student_id: student.id,
            predicted_grade: outcome.predicted_grade,
            feedback: outcome.feedback,
        })
        .await?;

    info!(
        "Prediction {} stored for student {} from {} grades",
        prediction.id,
        student.id,
        input.grades.len()
    );
    Ok(prediction)
}
