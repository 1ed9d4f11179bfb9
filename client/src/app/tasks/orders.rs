//! Seller order page fetch.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Fetch one page of the seller's orders with the current filters. A no-op
/// while a fetch is already pending or when no session is active.
pub fn fetch_orders(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, page: u32) {
    let (api_client, seller_id, filters, generation) = {
        let mut app = state.write();
        if app.orders.fetch_in_flight {
            tracing::debug!("Order fetch already in flight, skipping");
            return;
        }
        let Some(session) = &app.session else {
            return;
        };
        let seller_id = session.user.id.clone();
        let Some(api_client) = app.api_client.clone() else {
            return;
        };
        app.orders.fetch_in_flight = true;
        app.orders.loading = true;
        app.orders.fetch_generation += 1;
        (
            api_client,
            seller_id,
            app.orders.filters.clone(),
            app.orders.fetch_generation,
        )
    };

    tokio::spawn(async move {
        let result = api_client
            .fetch_seller_orders(&seller_id, page, &filters)
            .await;
        let _ = event_tx
            .send(AppEvent::OrdersLoaded { generation, result })
            .await;
    });
}
