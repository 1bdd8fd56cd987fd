//! HTTP inbound adapter: HTML pages, auth forms, the statistics API, and
//! health checks.

pub mod auth;
pub mod error;
pub mod health;
pub mod pages;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
pub mod stats;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;
