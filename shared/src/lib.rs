//! # Shared Contract Library
//!
//! This library defines the contract between the AflaGuard client and the
//! backend REST API, plus the pure domain logic both sides agree on. All
//! DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration, and user records
//!   - **[`dto::batch`]**: Batches, test requests, marketplace listings
//!   - **[`dto::order`]**: Orders, statistics, and status updates
//!   - **[`dto::envelope`]**: Response envelopes (`success` / `status` flags)
//! - **[`domain`]**: Pure decision logic
//!   - **[`domain::risk`]**: Aflatoxin reading coercion and classification
//!   - **[`domain::workflow`]**: Order-status transition rules
//!   - **[`domain::access`]**: Ownership and marketplace capability checks
//! - **[`utils`]**: Display formatting helpers
//!
//! ## Wire Format
//!
//! The backend predates this client; DTOs reproduce its field names exactly
//! (`_id`, `batchId`, `isVerified`) via serde renames. Optional fields are
//! omitted from JSON when `None`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::domain::risk::Reading;
//! use shared::domain::workflow::{validate_transition, OrderStatus};
//!
//! let category = Reading::new(7.5).classify();
//! assert_eq!(category.label(), "Adults Only");
//!
//! assert!(validate_transition(OrderStatus::Preparing, OrderStatus::Shipped, "").is_err());
//! ```

pub mod domain;
pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a contract library
// where all exports are meant to be public API
pub use domain::*;
pub use dto::*;
pub use utils::*;
