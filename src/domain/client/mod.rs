//! Client Context - 客户限界上下文
//!
//! 职责:
//! - 客户记录的标识与字段约束
//! - 创建输入的必填字段校验

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Client, NewClient};
pub use errors::ClientError;
pub use value_objects::{ClientField, ClientId};
