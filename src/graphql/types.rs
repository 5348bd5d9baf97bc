//! 实体的计算字段与关联字段
//!
//! ID 统一以字符串输出，时间统一为毫秒精度的 RFC 3339 UTC 字符串。

use async_graphql::{ComplexObject, Context, ID, Result, ResultExt};

use crate::errors::GradecastError;
use crate::models::{
    assignments::entities::Assignment, grades::entities::Grade,
    predictions::entities::Prediction, students::entities::Student, users::entities::User,
};
use crate::services::{
    AssignmentService, GradeService, PredictionService, StudentService, UserService,
};
use crate::utils::format_datetime;

#[ComplexObject]
impl User {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        ctx.data_unchecked::<StudentService>()
            .list_students_by_user(self.id)
            .await
            .extend()
    }
}

#[ComplexObject]
impl Student {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        ctx.data_unchecked::<UserService>()
            .get_user(self.user_id)
            .await
            .and_then(|user| {
                user.ok_or_else(|| {
                    GradecastError::not_found(format!("User {} not found", self.user_id))
                })
            })
            .extend()
    }

    async fn assignments(&self, ctx: &Context<'_>) -> Result<Vec<Assignment>> {
        ctx.data_unchecked::<AssignmentService>()
            .list_by_student(self.id)
            .await
            .extend()
    }

    async fn grades(&self, ctx: &Context<'_>) -> Result<Vec<Grade>> {
        ctx.data_unchecked::<GradeService>()
            .list_by_student(self.id)
            .await
            .extend()
    }

    async fn predictions(&self, ctx: &Context<'_>) -> Result<Vec<Prediction>> {
        ctx.data_unchecked::<PredictionService>()
            .list_by_student(self.id)
            .await
            .extend()
    }
}

#[ComplexObject]
impl Assignment {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn submitted_at(&self) -> String {
        format_datetime(&self.submitted_at)
    }
}

#[ComplexObject]
impl Grade {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn date(&self) -> String {
        format_datetime(&self.date)
    }
}

#[ComplexObject]
impl Prediction {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn created_at(&self) -> String {
        format_datetime(&self.created_at)
    }
}
