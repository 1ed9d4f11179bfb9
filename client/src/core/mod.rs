//! # Core Types
//!
//! Error types and service traits shared across the client.

pub mod error;
pub mod service;
