//! # Client Utilities

pub mod validation;
