//! # Application Events
//!
//! Background tasks deliver their outcomes over an async channel as these
//! events; the event handler folds them into [`AppState`]. List responses
//! carry the generation number of the fetch that produced them so stale
//! results can be discarded.
//!
//! [`AppState`]: crate::app::state::AppState

use shared::domain::workflow::OrderStatus;
use shared::dto::auth::ApiUser;
use shared::dto::batch::Batch;
use shared::dto::order::SellerOrdersResponse;

/// Events emitted by background tasks
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed: user profile and token, or an error message.
    LoginResult(Result<(ApiUser, String), String>),

    /// Registration completed.
    RegisterResult(Result<ApiUser, String>),

    /// A batch list fetch completed.
    BatchesLoaded {
        generation: u64,
        result: Result<Vec<Batch>, String>,
    },

    /// A seller order page fetch completed.
    OrdersLoaded {
        generation: u64,
        result: Result<SellerOrdersResponse, String>,
    },

    /// A marketplace listing or removal completed; on success the backend
    /// returns the updated batch.
    MarketListingUpdated(Result<Batch, String>),

    /// An order status update completed.
    OrderStatusUpdated {
        order_id: String,
        status: OrderStatus,
        result: Result<(), String>,
    },

    /// A test request submission completed.
    TestCreated(Result<(), String>),

    /// The laboratory directory fetch completed.
    LaboratoriesLoaded {
        generation: u64,
        result: Result<Vec<ApiUser>, String>,
    },
}
