//! 外部成绩预测服务
//!
//! 服务层只依赖 [`PredictionClient`]，生产环境使用 [`HttpPredictionClient`]，
//! 测试中可以替换为任意实现。

mod http;

pub use http::HttpPredictionClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::models::grades::entities::Grade;
use crate::utils::format_datetime;

/// 发送给预测服务的单条成绩
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub id: i64,
    pub value: f64,
    pub date: String,
    pub student_id: i64,
}

impl From<&Grade> for GradeRecord {
    fn from(grade: &Grade) -> Self {
        Self {
            id: grade.id,
            value: grade.value,
            date: format_datetime(&grade.date),
            student_id: grade.student_id,
        }
    }
}

/// 预测请求体：`{ grades, assignments, attendance }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionInput {
    pub grades: Vec<GradeRecord>,
    pub assignments: f64,
    pub attendance: f64,
}

/// 预测服务响应：`{ predictedGrade, feedback }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
    pub predicted_grade: f64,
    pub feedback: String,
}

#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn predict(&self, input: &PredictionInput) -> Result<PredictionOutcome>;
}
