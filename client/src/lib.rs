//! # AflaGuard Client - Library Root
//!
//! Client for the AflaGuard grain safety platform: aflatoxin test results,
//! risk classification, and the maize marketplace for Rwandan cooperatives.
//! This library crate contains all modules used by the binary crate
//! (`main.rs`).
//!
//! ## Features
//!
//! - **Risk Classification**: Aflatoxin readings classified into the four
//!   food-safety tiers (children / adults / animal feed / unsafe)
//! - **Test Requests**: Submit batches to certified laboratories
//! - **Marketplace**: List and delist tested batches with quantity and price
//! - **Order Management**: Paginated seller orders with a validated status
//!   workflow
//! - **Session Persistence**: File-backed store with token expiry and
//!   remember-me
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              client (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  shared        - Domain rules and wire types           │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTPS
//!                          ▼
//!               ┌─────────────────────┐
//!               │    Backend API      │
//!               │  (REST, JSON body)  │
//!               └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state and orchestration
//!   - Event-driven: handlers validate and spawn, tasks fetch, the event
//!     handler folds results back into state
//!   - All domain checks (risk tiers, workflow transitions, ownership) run
//!     locally before any request is sent
//!
//! - **core**: Error type and the [`ApiService`] trait the app is written
//!   against (the concrete client or a test mock)
//!
//! - **services**: External integrations
//!   - `api`: Backend HTTP client, one module per endpoint family
//!   - `storage`: flat key-value session store
//!
//! - **utils**: Form validation
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! Async tasks communicate back over an **async channel** as [`AppEvent`]s.
//! List fetches are guarded by an in-flight flag and a generation counter:
//! at most one fetch per list is pending, and a response from a superseded
//! fetch is discarded instead of overwriting newer data.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Thread-safe**: Multiple readers, exclusive writers
//! - **Shared**: Accessible from async tasks
//! - **Locked briefly**: Guards are checked and set under one write lock,
//!   then the lock is dropped before any await
//!
//! ### Validate Before Send
//!
//! Every request-producing action is validated on the device first: form
//! shape, order-status transitions (including the tracking-number rule for
//! shipping), and marketplace capability (owning cooperative only). The
//! backend enforces the same rules; local refusal just saves the round
//! trip.
//!
//! [`ApiService`]: core::service::ApiService
//! [`AppEvent`]: app::events::AppEvent

pub mod app;
pub mod core;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::events::AppEvent;
pub use app::state::{AppState, Screen, Session};
pub use crate::core::error::{AppError, Result};
pub use services::api::ApiClient;
