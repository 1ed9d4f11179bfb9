//! # Domain Logic
//!
//! The small, pure decision core shared by every frontend: aflatoxin risk
//! classification, the order-status workflow, and ownership/capability
//! predicates. All functions here are synchronous, deterministic, and free
//! of shared mutable state; they are safe to call repeatedly per render.
//!
//! ## Module Organization
//!
//! - [`risk`] - Reading coercion and the four-tier safety classification
//! - [`workflow`] - Order states, legal transitions, and side-constraints
//! - [`access`] - Batch ownership and marketplace capability checks

pub mod access;
pub mod risk;
pub mod workflow;

pub use access::{can_list_on_marketplace, can_view_all_batches, is_owner};
pub use risk::{ColorTag, Reading, RiskCategory};
pub use workflow::{validate_transition, OrderStatus, TransitionError};
