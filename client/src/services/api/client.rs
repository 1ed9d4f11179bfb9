//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::service::ApiService;
use reqwest::Client;
use shared::dto::auth::{ApiUser, RegisterRequest};
use shared::dto::batch::{Batch, CreateTestRequest, MarketListingRequest};
use shared::dto::order::{OrderFilters, SellerOrdersResponse, StatusUpdateRequest};

/// Default base URL for the backend API.
pub const DEFAULT_API_URL: &str = "https://back-cap.onrender.com";

/// HTTP client for communicating with the backend API server.
///
/// Maintains a connection pool; cheap to clone via `Arc` at the call sites.
/// Requests time out after 10 seconds so a dead backend cannot leave a
/// screen loading forever.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the default backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Create a client against a specific backend (tests, staging).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The base URL requests are issued against.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<(ApiUser, String), String> {
        super::auth::login(self, email, password).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<ApiUser, String> {
        super::auth::register(self, request).await
    }

    async fn fetch_users(&self) -> Result<Vec<ApiUser>, String> {
        super::users::fetch_users(self).await
    }

    async fn fetch_batches(&self) -> Result<Vec<Batch>, String> {
        super::batches::fetch_batches(self).await
    }

    async fn create_test(&self, request: CreateTestRequest) -> Result<(), String> {
        super::batches::create_test(self, request).await
    }

    async fn list_on_market(
        &self,
        batch_id: &str,
        request: MarketListingRequest,
    ) -> Result<Batch, String> {
        super::batches::list_on_market(self, batch_id, request).await
    }

    async fn remove_from_market(&self, batch_id: &str) -> Result<Batch, String> {
        super::batches::remove_from_market(self, batch_id).await
    }

    async fn fetch_seller_orders(
        &self,
        seller_id: &str,
        page: u32,
        filters: &OrderFilters,
    ) -> Result<SellerOrdersResponse, String> {
        super::orders::fetch_seller_orders(self, seller_id, page, filters).await
    }

    async fn update_order_status(
        &self,
        order_id: &str,
        request: StatusUpdateRequest,
    ) -> Result<(), String> {
        super::orders::update_order_status(self, order_id, request).await
    }
}
