//! SQLite Persistence - SQLite 文档存储实现

mod client_store;
mod database;

pub use client_store::*;
pub use database::*;
