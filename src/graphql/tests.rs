use std::sync::Arc;

use async_graphql::Request;
use async_trait::async_trait;
use serde_json::Value;

use super::{BearerToken, GradecastSchema, build_schema};
use crate::config::{AppConfig, OwnershipPolicy};
use crate::errors::{GradecastError, Result};
use crate::prediction::{PredictionClient, PredictionInput, PredictionOutcome};
use crate::services::Services;
use crate::services::auth::test_support::{fast_argon2, memory_storage};
use crate::storage::Storage;

/// 按成绩数量给出固定预测
struct StubPredictor;

#[async_trait]
impl PredictionClient for StubPredictor {
    async fn predict(&self, input: &PredictionInput) -> Result<PredictionOutcome> {
        if input.grades.is_empty() {
            return Err(GradecastError::upstream("Prediction service returned 422"));
        }
        Ok(PredictionOutcome {
            predicted_grade: 80.0 + input.grades.len() as f64,
            feedback: format!("Based on {} grades", input.grades.len()),
        })
    }
}

struct TestApp {
    schema: GradecastSchema,
    storage: Arc<dyn Storage>,
}

impl TestApp {
    async fn new(policy: OwnershipPolicy) -> Self {
        let mut config = AppConfig::default();
        config.jwt.secret = "test-secret".to_string();
        config.argon2 = fast_argon2();
        config.auth.ownership_policy = policy;

        let storage = memory_storage().await;
        let services = Services::new(storage.clone(), Arc::new(StubPredictor), &config);
        Self {
            schema: build_schema(services, &config),
            storage,
        }
    }

    async fn exec(&self, query: &str, token: Option<&str>) -> Value {
        let mut request = Request::new(query);
        if let Some(token) = token {
            request = request.data(BearerToken::Token(token.to_string()));
        }
        serde_json::to_value(self.schema.execute(request).await).unwrap()
    }

    /// 注册并返回 (token, user id)
    async fn register(&self, email: &str) -> (String, String) {
        let json = self
            .exec(
                &format!(
                    r#"mutation {{ register(email: "{email}", name: "Ann", password: "pw") {{ token user {{ id }} }} }}"#
                ),
                None,
            )
            .await;
        let payload = &json["data"]["register"];
        (
            payload["token"].as_str().unwrap().to_string(),
            payload["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    async fn create_student(&self, token: &str, name: &str) -> String {
        let json = self
            .exec(
                &format!(r#"mutation {{ createStudent(name: "{name}") {{ id }} }}"#),
                Some(token),
            )
            .await;
        json["data"]["createStudent"]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }
}

fn error_code(json: &Value) -> &str {
    json["errors"][0]["extensions"]["code"].as_str().unwrap()
}

#[tokio::test]
async fn test_register_login_and_me() {
    let app = TestApp::new(OwnershipPolicy::Strict).await;
    let (token, user_id) = app.register("a@x.com").await;

    let json = app.exec("{ me { id email name } }", Some(&token)).await;
    assert_eq!(json["data"]["me"]["id"], user_id.as_str());
    assert_eq!(json["data"]["me"]["email"], "a@x.com");
    assert_eq!(json["data"]["me"]["name"], "Ann");

    let json = app
        .exec(
            r#"mutation { login(email: "a@x.com", password: "pw") { token user { email } } }"#,
            None,
        )
        .await;
    assert_eq!(json["data"]["login"]["user"]["email"], "a@x.com");
    let login_token = json["data"]["login"]["token"].as_str().unwrap();
    let json = app.exec("{ me { id } }", Some(login_token)).await;
    assert_eq!(json["data"]["me"]["id"], user_id.as_str());
}

#[tokio::test]
async fn test_auth_failures() {
    let app = TestApp::new(OwnershipPolicy::Strict).await;
    app.register("a@x.com").await;

    let json = app
        .exec(
            r#"mutation { register(email: "a@x.com", password: "other") { token } }"#,
            None,
        )
        .await;
    assert_eq!(error_code(&json), "DUPLICATE_EMAIL");
    assert_eq!(
        json["errors"][0]["message"],
        "Duplicate Email: Email already in use"
    );

    let json = app
        .exec(
            r#"mutation { login(email: "a@x.com", password: "wrong") { token } }"#,
            None,
        )
        .await;
    assert_eq!(error_code(&json), "INVALID_CREDENTIALS");

    let json = app.exec("{ me { id } }", None).await;
    assert_eq!(error_code(&json), "UNAUTHENTICATED");

    let json = app.exec("{ me { id } }", Some("garbage")).await;
    assert_eq!(error_code(&json), "UNAUTHENTICATED");

    let json = app
        .exec(r#"mutation { createStudent(name: "S1") { id } }"#, None)
        .await;
    assert_eq!(error_code(&json), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_student_lifecycle() {
    let app = TestApp::new(OwnershipPolicy::Strict).await;
    let (token, user_id) = app.register("a@x.com").await;
    let student_id = app.create_student(&token, "S1").await;

    let json = app
        .exec(
            &format!(r#"mutation {{ updateStudent(id: "{student_id}", name: "S2") {{ name }} }}"#),
            Some(&token),
        )
        .await;
    assert_eq!(json["data"]["updateStudent"]["name"], "S2");

    let json = app
        .exec(
            &format!(
                r#"mutation {{ addGrade(studentId: "{student_id}", value: 85, date: "2024-01-01") {{ value date }} }}"#
            ),
            Some(&token),
        )
        .await;
    assert_eq!(json["data"]["addGrade"]["value"], 85.0);
    assert_eq!(json["data"]["addGrade"]["date"], "2024-01-01T00:00:00.000Z");

    let json = app
        .exec(
            &format!(
                r#"mutation {{ createAssignment(studentId: "{student_id}", fileUrl: "https://files/a.pdf") {{ id fileUrl submittedAt }} }}"#
            ),
            Some(&token),
        )
        .await;
    assert_eq!(
        json["data"]["createAssignment"]["fileUrl"],
        "https://files/a.pdf"
    );
    assert!(
        json["data"]["createAssignment"]["submittedAt"]
            .as_str()
            .unwrap()
            .ends_with('Z')
    );

    let json = app
        .exec(
            "{ students { id name user { id } grades { value } assignments { fileUrl } } users { email students { name } } }",
            None,
        )
        .await;
    let student = &json["data"]["students"][0];
    assert_eq!(student["name"], "S2");
    assert_eq!(student["user"]["id"], user_id.as_str());
    assert_eq!(student["grades"][0]["value"], 85.0);
    assert_eq!(student["assignments"][0]["fileUrl"], "https://files/a.pdf");
    assert_eq!(json["data"]["users"][0]["students"][0]["name"], "S2");

    let delete = format!(r#"mutation {{ deleteStudent(id: "{student_id}") }}"#);
    let json = app.exec(&delete, Some(&token)).await;
    assert_eq!(json["data"]["deleteStudent"], true);

    let json = app.exec(&delete, Some(&token)).await;
    assert_eq!(error_code(&json), "NOT_FOUND");

    // 级联删除
    let id: i64 = student_id.parse().unwrap();
    assert!(app.storage.list_grades_by_student(id).await.unwrap().is_empty());
    assert!(
        app.storage
            .list_assignments_by_student(id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_delete_assignment_and_grade() {
    let app = TestApp::new(OwnershipPolicy::Strict).await;
    let (token, _) = app.register("a@x.com").await;
    let student_id = app.create_student(&token, "S1").await;

    let json = app
        .exec(
            &format!(
                r#"mutation {{
                    createAssignment(studentId: "{student_id}", fileUrl: "https://files/a.pdf") {{ id }}
                    addGrade(studentId: "{student_id}", value: 70, date: "2024-01-01") {{ id }}
                }}"#
            ),
            Some(&token),
        )
        .await;
    let assignment_id = json["data"]["createAssignment"]["id"].as_str().unwrap();
    let grade_id = json["data"]["addGrade"]["id"].as_str().unwrap();

    let delete_assignment = format!(r#"mutation {{ deleteAssignment(id: "{assignment_id}") }}"#);
    let json = app.exec(&delete_assignment, Some(&token)).await;
    assert_eq!(json["data"]["deleteAssignment"], true);
    let json = app.exec(&delete_assignment, Some(&token)).await;
    assert_eq!(error_code(&json), "NOT_FOUND");

    let delete_grade = format!(r#"mutation {{ deleteGrade(id: "{grade_id}") }}"#);
    let json = app.exec(&delete_grade, Some(&token)).await;
    assert_eq!(json["data"]["deleteGrade"], true);
    let json = app.exec(&delete_grade, Some(&token)).await;
    assert_eq!(error_code(&json), "NOT_FOUND");

    let json = app
        .exec(
            "{ students { id assignments { id } grades { id } } }",
            None,
        )
        .await;
    let student = &json["data"]["students"][0];
    assert_eq!(student["id"], student_id.as_str());
    assert_eq!(student["assignments"], serde_json::json!([]));
    assert_eq!(student["grades"], serde_json::json!([]));
}

#[tokio::test]
async fn test_invalid_input() {
    let app = TestApp::new(OwnershipPolicy::Strict).await;
    let (token, _) = app.register("a@x.com").await;
    let student_id = app.create_student(&token, "S1").await;

    let json = app
        .exec(
            &format!(
                r#"mutation {{ addGrade(studentId: "{student_id}", value: 85, date: "not-a-date") {{ id }} }}"#
            ),
            Some(&token),
        )
        .await;
    assert_eq!(error_code(&json), "INVALID_DATE");

    let json = app
        .exec(
            r#"mutation { deleteGrade(id: "abc") }"#,
            Some(&token),
        )
        .await;
    assert_eq!(error_code(&json), "VALIDATION");

    let json = app
        .exec(r#"mutation { createStudent(name: "  ") { id } }"#, Some(&token))
        .await;
    assert_eq!(error_code(&json), "VALIDATION");
}

#[tokio::test]
async fn test_strict_policy_blocks_other_users() {
    let app = TestApp::new(OwnershipPolicy::Strict).await;
    let (owner, _) = app.register("a@x.com").await;
    let (intruder, _) = app.register("b@x.com").await;
    let student_id = app.create_student(&owner, "S1").await;

    let rename = format!(r#"mutation {{ updateStudent(id: "{student_id}", name: "Mine") {{ id }} }}"#);
    let grade = format!(
        r#"mutation {{ addGrade(studentId: "{student_id}", value: 10, date: "2024-01-01") {{ id }} }}"#
    );
    let delete = format!(r#"mutation {{ deleteStudent(id: "{student_id}") }}"#);
    let submit = format!(
        r#"mutation {{ createAssignment(studentId: "{student_id}", fileUrl: "https://files/a.pdf") {{ id }} }}"#
    );

    let assignment_id = app.exec(&submit, Some(&owner)).await["data"]["createAssignment"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let grade_id = app.exec(&grade, Some(&owner)).await["data"]["addGrade"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let delete_assignment = format!(r#"mutation {{ deleteAssignment(id: "{assignment_id}") }}"#);
    let delete_grade = format!(r#"mutation {{ deleteGrade(id: "{grade_id}") }}"#);

    for query in [
        &rename,
        &grade,
        &submit,
        &delete_assignment,
        &delete_grade,
        &delete,
    ] {
        let json = app.exec(query, Some(&intruder)).await;
        assert_eq!(error_code(&json), "FORBIDDEN");

        let json = app.exec(query, None).await;
        assert_eq!(error_code(&json), "UNAUTHENTICATED");
    }

    // 拒绝后记录仍在
    let id: i64 = student_id.parse().unwrap();
    assert_eq!(app.storage.list_grades_by_student(id).await.unwrap().len(), 1);
    assert_eq!(
        app.storage
            .list_assignments_by_student(id)
            .await
            .unwrap()
            .len(),
        1
    );

    let json = app
        .exec(
            r#"mutation { updateStudent(id: "9999", name: "X") { id } }"#,
            Some(&intruder),
        )
        .await;
    assert_eq!(error_code(&json), "NOT_FOUND");
}

#[tokio::test]
async fn test_open_policy_skips_ownership() {
    let app = TestApp::new(OwnershipPolicy::Open).await;
    let (owner, _) = app.register("a@x.com").await;
    let student_id = app.create_student(&owner, "S1").await;

    let json = app
        .exec(
            &format!(r#"mutation {{ updateStudent(id: "{student_id}", name: "Renamed") {{ name }} }}"#),
            None,
        )
        .await;
    assert_eq!(json["data"]["updateStudent"]["name"], "Renamed");

    // 创建学生和预测仍需要令牌
    let json = app
        .exec(r#"mutation { createStudent(name: "S2") { id } }"#, None)
        .await;
    assert_eq!(error_code(&json), "UNAUTHENTICATED");

    let json = app
        .exec(
            &format!(r#"mutation {{ createPrediction(studentId: "{student_id}") {{ id }} }}"#),
            None,
        )
        .await;
    assert_eq!(error_code(&json), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_create_prediction() {
    let app = TestApp::new(OwnershipPolicy::Strict).await;
    let (owner, _) = app.register("a@x.com").await;
    let (intruder, _) = app.register("b@x.com").await;
    let student_id = app.create_student(&owner, "S1").await;

    let predict = format!(
        r#"mutation {{ createPrediction(studentId: "{student_id}") {{ id predictedGrade feedback createdAt }} }}"#
    );

    // 没有成绩时预测服务报错，不写入记录
    let json = app.exec(&predict, Some(&owner)).await;
    assert_eq!(error_code(&json), "UPSTREAM_ERROR");

    for date in ["2024-01-01", "2024-02-01"] {
        app.exec(
            &format!(
                r#"mutation {{ addGrade(studentId: "{student_id}", value: 85, date: "{date}") {{ id }} }}"#
            ),
            Some(&owner),
        )
        .await;
    }

    let json = app.exec(&predict, Some(&intruder)).await;
    assert_eq!(error_code(&json), "FORBIDDEN");

    let json = app
        .exec(
            r#"mutation { createPrediction(studentId: "9999") { id } }"#,
            Some(&owner),
        )
        .await;
    assert_eq!(error_code(&json), "NOT_FOUND");

    let json = app.exec(&predict, Some(&owner)).await;
    let prediction = &json["data"]["createPrediction"];
    assert_eq!(prediction["predictedGrade"], 82.0);
    assert_eq!(prediction["feedback"], "Based on 2 grades");

    let json = app
        .exec("{ students { predictions { predictedGrade } } }", None)
        .await;
    let predictions = json["data"]["students"][0]["predictions"]
        .as_array()
        .unwrap();
    assert_eq!(predictions.len(), 1);
}

#[tokio::test]
async fn test_sdl_hides_password_hash() {
    let app = TestApp::new(OwnershipPolicy::Strict).await;
    let sdl = app.schema.sdl();

    assert!(!sdl.contains("passwordHash"));
    let user_type = sdl
        .split("type User {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap();
    assert!(!user_type.contains("password"));
    assert!(user_type.contains("email"));
}
