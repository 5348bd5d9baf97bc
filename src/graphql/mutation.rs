use async_graphql::{Context, ID, Object, Result, ResultExt};

use super::auth::{require_user_id, student_access};
use super::parse_id;
use crate::models::{
    assignments::entities::Assignment,
    auth::{AuthPayload, LoginRequest, RegisterRequest},
    grades::entities::Grade,
    predictions::entities::Prediction,
    students::entities::Student,
};
use crate::services::{
    AssignmentService, AuthService, GradeService, PredictionService, StudentService,
};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn register(
        &self,
        ctx: &Context<'_>,
        email: String,
        name: Option<String>,
        password: String,
    ) -> Result<AuthPayload> {
        ctx.data_unchecked::<AuthService>()
            .register(RegisterRequest {
                email,
                name,
                password,
            })
            .await
            .extend()
    }

    async fn login(&self, ctx: &Context<'_>, email: String, password: String) -> Result<AuthPayload> {
        ctx.data_unchecked::<AuthService>()
            .login(LoginRequest { email, password })
            .await
            .extend()
    }

    /// 为当前用户创建学生
    async fn create_student(&self, ctx: &Context<'_>, name: String) -> Result<Student> {
        let user_id = require_user_id(ctx).extend()?;
        ctx.data_unchecked::<StudentService>()
            .create_student(user_id, &name)
            .await
            .extend()
    }

    async fn update_student(&self, ctx: &Context<'_>, id: ID, name: String) -> Result<Student> {
        let access = student_access(ctx).extend()?;
        let id = parse_id(&id).extend()?;
        ctx.data_unchecked::<StudentService>()
            .update_student(access, id, &name)
            .await
            .extend()
    }

    /// 删除学生及其作业、成绩和预测
    async fn delete_student(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let access = student_access(ctx).extend()?;
        let id = parse_id(&id).extend()?;
        ctx.data_unchecked::<StudentService>()
            .delete_student(access, id)
            .await
            .extend()
    }

    async fn create_assignment(
        &self,
        ctx: &Context<'_>,
        student_id: ID,
        file_url: String,
    ) -> Result<Assignment> {
        let access = student_access(ctx).extend()?;
        let student_id = parse_id(&student_id).extend()?;
        ctx.data_unchecked::<AssignmentService>()
            .create_assignment(access, student_id, &file_url)
            .await
            .extend()
    }

    async fn delete_assignment(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let access = student_access(ctx).extend()?;
        let id = parse_id(&id).extend()?;
        ctx.data_unchecked::<AssignmentService>()
            .delete_assignment(access, id)
            .await
            .extend()
    }

    /// `date` 接受 RFC 3339 或 YYYY-MM-DD
    async fn add_grade(
        &self,
        ctx: &Context<'_>,
        student_id: ID,
        value: f64,
        date: String,
    ) -> Result<Grade> {
        let access = student_access(ctx).extend()?;
        let student_id = parse_id(&student_id).extend()?;
        ctx.data_unchecked::<GradeService>()
            .add_grade(access, student_id, value, &date)
            .await
            .extend()
    }

    async fn delete_grade(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let access = student_access(ctx).extend()?;
        let id = parse_id(&id).extend()?;
        ctx.data_unchecked::<GradeService>()
            .delete_grade(access, id)
            .await
            .extend()
    }

    /// 根据学生已有成绩请求预测并保存
    async fn create_prediction(&self, ctx: &Context<'_>, student_id: ID) -> Result<Prediction> {
        let user_id = require_user_id(ctx).extend()?;
        let student_id = parse_id(&student_id).extend()?;
        ctx.data_unchecked::<PredictionService>()
            .create_prediction(user_id, student_id)
            .await
            .extend()
    }
}
