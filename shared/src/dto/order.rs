use crate::domain::workflow::OrderStatus;
use serde::{Deserialize, Serialize};

/// A buyer's order against a listed batch, as returned by the seller
/// orders endpoint. Everything except `status` is pass-through data owned
/// by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_id: String,
    #[serde(default)]
    pub buyer_name: String,
    #[serde(default)]
    pub buyer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_contact: Option<String>,
    #[serde(default)]
    pub batch_number: String,
    #[serde(default)]
    pub quantity_ordered: f64,
    #[serde(default)]
    pub price_per_kg: f64,
    #[serde(default)]
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub order_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<DeliveryAddress>,
}

/// Shipping destination attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
}

/// Per-status aggregate the orders endpoint returns alongside the page.
/// On the wire the group key sits in `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatistic {
    #[serde(rename = "_id")]
    pub status: OrderStatus,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_amount: f64,
}

/// Pagination block of the orders response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "Pagination::first_page")]
    pub current_page: u32,
    #[serde(default = "Pagination::first_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
}

impl Pagination {
    fn first_page() -> u32 {
        1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
        }
    }
}

/// Full response of `GET /api/batches/orders/seller/{sellerId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerOrdersResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Order>,
    #[serde(default)]
    pub statistics: Vec<OrderStatistic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Filter/sort options for the seller orders list. Maps one-to-one onto
/// the endpoint's query parameters; unset filters are omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilters {
    pub status: Option<OrderStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search: Option<String>,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for OrderFilters {
    fn default() -> Self {
        OrderFilters {
            status: None,
            start_date: None,
            end_date: None,
            search: None,
            sort_by: "orderDate".to_string(),
            sort_order: "desc".to_string(),
        }
    }
}

impl OrderFilters {
    /// Page size the mobile client has always requested.
    pub const PAGE_SIZE: u32 = 15;

    /// Query parameters for a given page.
    pub fn to_query(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", page.to_string()),
            ("limit", Self::PAGE_SIZE.to_string()),
        ];
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(start) = &self.start_date {
            query.push(("startDate", start.clone()));
        }
        if let Some(end) = &self.end_date {
            query.push(("endDate", end.clone()));
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                query.push(("search", search.clone()));
            }
        }
        query.push(("sortBy", self.sort_by.clone()));
        query.push(("sortOrder", self.sort_order.clone()));
        query
    }

    /// True when any non-default filter is set (drives the "clear filters"
    /// affordance).
    pub fn is_filtered(&self) -> bool {
        self.status.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.search.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Body of `PUT /api/batches/orders/{orderId}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub seller_id: String,
    pub status: OrderStatus,
    pub seller_notes: String,
    pub tracking_number: String,
    pub estimated_delivery: Option<String>,
}
