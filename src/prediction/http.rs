use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{PredictionClient, PredictionInput, PredictionOutcome};
use crate::config::PredictionConfig;
use crate::errors::{GradecastError, Result};

/// 通过 HTTP POST 调用预测服务，不做重试
pub struct HttpPredictionClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPredictionClient {
    pub fn new(config: &PredictionConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        let client = builder.build().map_err(|e| {
            GradecastError::upstream(format!("Failed to build prediction HTTP client: {e}"))
        })?;

        Ok(Self {
            endpoint: config.url.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, input: &PredictionInput) -> Result<PredictionOutcome> {
        debug!(
            "Requesting prediction from {} with {} grades",
            self.endpoint,
            input.grades.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(input)
            .send()
            .await
            .map_err(|e| {
                warn!("Prediction service unreachable: {}", e);
                GradecastError::upstream(format!("Prediction service unreachable: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Prediction service returned {}: {}", status, body);
            return Err(GradecastError::upstream(format!(
                "Prediction service returned {status}"
            )));
        }

        let outcome = response.json::<PredictionOutcome>().await.map_err(|e| {
            GradecastError::upstream(format!("Malformed prediction response: {e}"))
        })?;

        if !outcome.predicted_grade.is_finite() {
            return Err(GradecastError::upstream(
                "Malformed prediction response: predictedGrade is not a finite number",
            ));
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::GradeRecord;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpPredictionClient {
        HttpPredictionClient::new(&PredictionConfig {
            url: format!("{}/predict", server.uri()),
            ..PredictionConfig::default()
        })
        .unwrap()
    }

    fn sample_input() -> PredictionInput {
        PredictionInput {
            grades: vec![GradeRecord {
                id: 1,
                value: 85.0,
                date: "2024-01-01T00:00:00.000Z".to_string(),
                student_id: 7,
            }],
            assignments: 5.0,
            attendance: 92.0,
        }
    }

    #[tokio::test]
    async fn successful_prediction() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(body_partial_json(serde_json::json!({
                "grades": [{"id": 1, "value": 85.0, "date": "2024-01-01T00:00:00.000Z", "studentId": 7}],
                "assignments": 5.0,
                "attendance": 92.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "predictedGrade": 88.5,
                "feedback": "Steady improvement"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server).predict(&sample_input()).await.unwrap();
        assert_eq!(outcome.predicted_grade, 88.5);
        assert_eq!(outcome.feedback, "Steady improvement");
    }

    #[tokio::test]
    async fn server_error_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .predict(&sample_input())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "UPSTREAM_ERROR");
        assert!(err.message().contains("500"));
    }

    #[tokio::test]
    async fn malformed_body_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"grade": "A"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .predict(&sample_input())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "UPSTREAM_ERROR");
        assert!(err.message().contains("Malformed"));
    }

    #[tokio::test]
    async fn unreachable_service_is_upstream_error() {
        let client = HttpPredictionClient::new(&PredictionConfig {
            url: "http://127.0.0.1:1/predict".to_string(),
            ..PredictionConfig::default()
        })
        .unwrap();

        let err = client.predict(&sample_input()).await.unwrap_err();
        assert_eq!(err.code(), "UPSTREAM_ERROR");
    }
}
