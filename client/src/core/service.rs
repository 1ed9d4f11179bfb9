//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::auth::{ApiUser, RegisterRequest};
use shared::dto::batch::{Batch, CreateTestRequest, MarketListingRequest};
use shared::dto::order::{OrderFilters, SellerOrdersResponse, StatusUpdateRequest};

/// Trait for API service operations.
///
/// This trait allows for dependency injection and mocking in tests. Errors
/// are the human-readable strings the screens display; the caller decides
/// how to surface them.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Log in with email and password. Returns the user record and token.
    async fn login(&self, email: String, password: String) -> Result<(ApiUser, String), String>;

    /// Register a new account.
    async fn register(&self, request: RegisterRequest) -> Result<ApiUser, String>;

    /// Fetch all users (the test-request form filters laboratories out of
    /// this list client-side).
    async fn fetch_users(&self) -> Result<Vec<ApiUser>, String>;

    /// Fetch every batch visible to the caller.
    async fn fetch_batches(&self) -> Result<Vec<Batch>, String>;

    /// Submit a new test request.
    async fn create_test(&self, request: CreateTestRequest) -> Result<(), String>;

    /// List a batch on the marketplace. Returns the updated batch.
    async fn list_on_market(
        &self,
        batch_id: &str,
        request: MarketListingRequest,
    ) -> Result<Batch, String>;

    /// Remove a batch from the marketplace. Returns the updated batch.
    async fn remove_from_market(&self, batch_id: &str) -> Result<Batch, String>;

    /// Fetch one page of a seller's orders, with statistics and pagination.
    async fn fetch_seller_orders(
        &self,
        seller_id: &str,
        page: u32,
        filters: &OrderFilters,
    ) -> Result<SellerOrdersResponse, String>;

    /// Apply a status change to an order. The caller must have validated
    /// the transition first; the backend rejects it again regardless.
    async fn update_order_status(
        &self,
        order_id: &str,
        request: StatusUpdateRequest,
    ) -> Result<(), String>;
}
