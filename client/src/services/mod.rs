//! # External Services
//!
//! - [`api`]: HTTP client for the backend REST API
//! - [`storage`]: file-backed session/preferences store

pub mod api;
pub mod storage;
