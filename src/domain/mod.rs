//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Client Context: 客户记录

pub mod client;
