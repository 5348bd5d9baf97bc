use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    grades::{entities::Grade, requests::CreateGradeRequest},
    predictions::{entities::Prediction, requests::CreatePredictionRequest},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（邮箱重复时返回 DuplicateEmail）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出全部用户
    async fn list_users(&self) -> Result<Vec<User>>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn list_students_by_user(&self, user_id: i64) -> Result<Vec<Student>>;
    // 更新学生信息，学生不存在时返回 None
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生（作业、成绩、预测级联删除）
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 作业提交管理方法
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn list_assignments_by_student(&self, student_id: i64) -> Result<Vec<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 预测管理方法
    async fn create_prediction(&self, prediction: CreatePredictionRequest) -> Result<Prediction>;
    async fn list_predictions_by_student(&self, student_id: i64) -> Result<Vec<Prediction>>;

    // 关闭连接池（优雅停机）
    async fn close(&self) -> Result<()>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
