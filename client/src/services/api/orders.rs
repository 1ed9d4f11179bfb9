//! # Seller Order Endpoints
//!
//! Paginated order listing with filters, and order status updates.

use super::client::ApiClient;
use shared::dto::envelope::ApiEnvelope;
use shared::dto::order::{OrderFilters, SellerOrdersResponse, StatusUpdateRequest};

/// Fetch one page of a seller's orders.
#[tracing::instrument(skip(client, filters), fields(seller_id = %seller_id, page = page))]
pub async fn fetch_seller_orders(
    client: &ApiClient,
    seller_id: &str,
    page: u32,
    filters: &OrderFilters,
) -> Result<SellerOrdersResponse, String> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(format!(
            "{}/api/batches/orders/seller/{}",
            client.base_url(),
            seller_id
        ))
        .query(&filters.to_query(page))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Order fetch network error");
            format!("Network error: {}", e)
        })?;

    let body = response
        .json::<SellerOrdersResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if body.success {
        tracing::debug!(
            order_count = body.data.len(),
            duration_ms = start.elapsed().as_millis(),
            "Orders fetched"
        );
        Ok(body)
    } else {
        let message = body
            .message
            .unwrap_or_else(|| "Failed to fetch orders".to_string());
        tracing::warn!(error = %message, "Order fetch rejected");
        Err(message)
    }
}

/// Apply a status change to an order.
///
/// Transition legality and the tracking-number side-constraint must have
/// been validated before calling; a backend rejection here is a hard
/// precondition failure that is reported, not retried.
#[tracing::instrument(
    skip(client, request),
    fields(order_id = %order_id, status = %request.status)
)]
pub async fn update_order_status(
    client: &ApiClient,
    order_id: &str,
    request: StatusUpdateRequest,
) -> Result<(), String> {
    let response = client
        .client
        .put(format!(
            "{}/api/batches/orders/{}/status",
            client.base_url(),
            order_id
        ))
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
            .unwrap_or_else(|| "Failed to update order status".to_string()))
    }
}
