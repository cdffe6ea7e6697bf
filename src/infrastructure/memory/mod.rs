//! In-Memory Implementations
//!
//! 内存文档存储实现

mod client_store;

pub use client_store::InMemoryClientStore;
