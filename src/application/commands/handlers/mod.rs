//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod client_handlers;

pub use client_handlers::*;
