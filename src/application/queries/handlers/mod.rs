//! Query Handlers 实现

mod client_handlers;

pub use client_handlers::*;
