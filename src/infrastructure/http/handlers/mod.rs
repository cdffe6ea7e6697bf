//! HTTP Handlers

mod clients;
mod pages;

pub use clients::*;
pub use pages::*;
