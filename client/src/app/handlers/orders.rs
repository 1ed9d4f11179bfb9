//! Order status updates.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::domain::workflow::validate_transition;
use shared::dto::order::StatusUpdateRequest;
use std::sync::Arc;

/// Validate the status form against the workflow and submit the change.
/// An illegal transition or a missing tracking number never leaves the
/// device.
pub fn handle_status_update(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, order_id, request) = {
        let mut app = state.write();
        if app.orders.updating {
            return;
        }
        let seller_id = match &app.session {
            Some(session) => session.user.id.clone(),
            None => return,
        };
        let Some(order) = app.orders.selected_order().cloned() else {
            app.notify("error", "Select an order first");
            return;
        };
        let form = app.orders.status_form.clone();
        let Some(requested) = form.status else {
            app.notify("error", "Select a status");
            return;
        };
        if let Err(e) = validate_transition(order.status, requested, &form.tracking_number) {
            app.orders.error = Some(e.to_string());
            return;
        }
        let estimated_delivery = form.estimated_delivery.trim();
        let request = StatusUpdateRequest {
            seller_id,
            status: requested,
            seller_notes: form.seller_notes.trim().to_string(),
            tracking_number: form.tracking_number.trim().to_string(),
            estimated_delivery: if estimated_delivery.is_empty() {
                None
            } else {
                Some(estimated_delivery.to_string())
            },
        };
        let Some(api_client) = app.api_client.clone() else {
            return;
        };
        app.orders.updating = true;
        app.orders.error = None;
        (api_client, order.id, request)
    };

    let status = request.status;
    tokio::spawn(async move {
        let result = api_client.update_order_status(&order_id, request).await;
        let _ = event_tx
            .send(AppEvent::OrderStatusUpdated {
                order_id,
                status,
                result,
            })
            .await;
    });
}
