//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, and user records
//! - [`batch`] - Tested grain batches, test requests, marketplace listings
//! - [`order`] - Marketplace orders, statistics, pagination, status updates
//! - [`envelope`] - The `{success, ...}` / `{status, ...}` response wrappers
//!
//! ## Serialization Format
//!
//! The backend predates this client and uses Mongo-flavored camelCase field
//! names (`_id`, `batchId`, `isVerified`). Rust structs use snake_case with
//! serde renames so the wire format stays byte-compatible:
//!
//! ```text
//! GET /api/batches
//!
//! {
//!   "success": true,
//!   "data": [
//!     {
//!       "_id": "651f0c",
//!       "batchId": "MAIZE-2025-014",
//!       "supplier": "Nyagatare Farmers",
//!       "aflatoxin": "7.5",
//!       "userId": "u1",
//!       "userName": "alice@coop.rw",
//!       "isOnMarket": false
//!     }
//!   ]
//! }
//! ```

pub mod auth;
pub mod batch;
pub mod envelope;
pub mod order;

pub use auth::*;
pub use batch::*;
pub use envelope::*;
pub use order::*;
