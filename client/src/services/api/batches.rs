//! # Batch and Marketplace Endpoints
//!
//! Batch listing, test-request creation, and marketplace listing management.
//! These endpoints use the `{success, data, message}` envelope.

use super::client::ApiClient;
use shared::dto::batch::{Batch, CreateTestRequest, MarketListingRequest};
use shared::dto::envelope::ApiEnvelope;

/// Fetch every batch. Ownership filtering happens client-side because the
/// endpoint is not scoped per user.
#[tracing::instrument(skip(client))]
pub async fn fetch_batches(client: &ApiClient) -> Result<Vec<Batch>, String> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(format!("{}/api/batches", client.base_url()))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Batch fetch network error");
            format!("Network error: {}", e)
        })?;

    let envelope = response
        .json::<ApiEnvelope<Vec<Batch>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    let result = envelope.into_result("Failed to fetch batches");
    if let Ok(batches) = &result {
        tracing::debug!(
            batch_count = batches.len(),
            duration_ms = start.elapsed().as_millis(),
            "Batches fetched"
        );
    }
    result
}

/// Submit a new test request.
#[tracing::instrument(skip(client, request), fields(batch_id = %request.batch_id))]
pub async fn create_test(client: &ApiClient, request: CreateTestRequest) -> Result<(), String> {
    let response = client
        .client
        .post(format!("{}/api/tests", client.base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let envelope = response
        .json::<ApiEnvelope<serde_json::Value>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if envelope.success {
        Ok(())
    } else {
        Err(envelope
            .message
            .unwrap_or_else(|| "Failed to create test".to_string()))
    }
}

/// List a batch on the marketplace with a quantity and price per kg.
#[tracing::instrument(skip(client, request), fields(batch_id = %batch_id))]
pub async fn list_on_market(
    client: &ApiClient,
    batch_id: &str,
    request: MarketListingRequest,
) -> Result<Batch, String> {
    let response = client
        .client
        .put(format!("{}/api/batches/{}/market", client.base_url(), batch_id))
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json::<ApiEnvelope<Batch>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result("Failed to list batch on market")
}

/// Remove a batch's marketplace listing. The backend clears the quantity
/// and price fields and returns the updated batch.
#[tracing::instrument(skip(client), fields(batch_id = %batch_id))]
pub async fn remove_from_market(client: &ApiClient, batch_id: &str) -> Result<Batch, String> {
    let response = client
        .client
        .delete(format!("{}/api/batches/{}/market", client.base_url(), batch_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json::<ApiEnvelope<Batch>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result("Failed to remove batch from market")
}
