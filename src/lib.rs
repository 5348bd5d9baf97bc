//! Gradecast - 学生成绩记录与预测后端
//!
//! 基于 Actix Web 与 async-graphql 的 GraphQL 服务：账号注册登录、学生/作业/成绩维护，
//! 以及调用外部预测服务生成成绩预测。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `graphql`: GraphQL schema 与 resolver
//! - `models`: 数据模型定义
//! - `prediction`: 外部预测服务客户端
//! - `routes`: HTTP 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod graphql;
pub mod models;
pub mod prediction;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
