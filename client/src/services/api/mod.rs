//! # Backend API Modules
//!
//! One module per endpoint family, all driven through the shared
//! [`ApiClient`]. Every call branches on the response envelope's success
//! flag, not on the HTTP status alone.

pub mod auth;
pub mod batches;
pub mod client;
pub mod orders;
pub mod users;

pub use client::{ApiClient, DEFAULT_API_URL};
