//! clientdesk - 客户管理服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Client Context: 客户记录与输入校验
//!
//! 应用层 (application/):
//! - Ports: ClientStorePort 文档存储端口
//! - Commands: 创建、删除客户
//! - Queries: 获取、列出客户
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 静态页面
//! - Persistence: SQLite 文档存储
//! - Memory: 内存文档存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
