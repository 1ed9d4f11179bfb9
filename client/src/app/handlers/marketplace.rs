//! Marketplace listing and removal.
//!
//! Capability checks run locally before any request: only the cooperative
//! that owns a batch may list it, and only an owner may delist it. The
//! backend enforces the same rules, but a local refusal costs no round
//! trip and gives an immediate message.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::validation::parse_marketplace_form;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::domain::access;
use std::sync::Arc;

/// Validate the listing form and put the selected batch on the market.
pub fn handle_list_on_market(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, batch_id, request) = {
        let mut app = state.write();
        if app.dashboard.submitting {
            return;
        }
        let request = match parse_marketplace_form(
            &app.dashboard.marketplace_form.quantity,
            &app.dashboard.marketplace_form.price_per_kg,
        ) {
            Ok(request) => request,
            Err(e) => {
                app.notify("error", e);
                return;
            }
        };
        let user = match &app.session {
            Some(session) => session.user.clone(),
            None => return,
        };
        let Some(batch) = app.dashboard.selected_batch().cloned() else {
            app.notify("error", "Select a batch first");
            return;
        };
        if !access::can_list_on_marketplace(&batch, &user) {
            app.notify(
                "error",
                "Only the cooperative that owns this batch can list it",
            );
            return;
        }
        let Some(api_client) = app.api_client.clone() else {
            return;
        };
        app.dashboard.submitting = true;
        (api_client, batch.id, request)
    };

    tokio::spawn(async move {
        let result = api_client.list_on_market(&batch_id, request).await;
        let _ = event_tx.send(AppEvent::MarketListingUpdated(result)).await;
    });
}

/// Delist the selected batch.
pub fn handle_remove_from_market(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, batch_id) = {
        let mut app = state.write();
        if app.dashboard.submitting {
            return;
        }
        let user = match &app.session {
            Some(session) => session.user.clone(),
            None => return,
        };
        let Some(batch) = app.dashboard.selected_batch().cloned() else {
            app.notify("error", "Select a batch first");
            return;
        };
        if !access::is_owner(&batch, &user) {
            app.notify("error", "Only the batch owner can remove this listing");
            return;
        }
        let Some(api_client) = app.api_client.clone() else {
            return;
        };
        app.dashboard.submitting = true;
        (api_client, batch.id)
    };

    tokio::spawn(async move {
        let result = api_client.remove_from_market(&batch_id).await;
        let _ = event_tx.send(AppEvent::MarketListingUpdated(result)).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Session;
    use chrono::Utc;
    use serde_json::json;
    use shared::dto::auth::ApiUser;
    use shared::dto::batch::Batch;

    fn state_with(account_type: &str, batch_owner: &str) -> Arc<RwLock<AppState>> {
        let mut app = AppState::new();
        app.session = Some(Session::new(
            ApiUser {
                id: "u1".to_string(),
                username: "alice".to_string(),
                email: "alice@coop.rw".to_string(),
                account_type: account_type.to_string(),
                ..ApiUser::default()
            },
            "jwt".to_string(),
            Utc::now(),
        ));
        app.dashboard.batches = vec![Batch {
            id: "b1".to_string(),
            user_id: batch_owner.to_string(),
            aflatoxin: json!(3.0),
            ..Batch::default()
        }];
        app.dashboard.selected_batch_id = Some("b1".to_string());
        app.dashboard.marketplace_form.quantity = "100".to_string();
        app.dashboard.marketplace_form.price_per_kg = "250".to_string();
        Arc::new(RwLock::new(app))
    }

    #[test]
    fn non_cooperative_cannot_list() {
        let state = state_with("farmer", "u1");
        let (tx, rx) = async_channel::unbounded();
        handle_list_on_market(&state, tx);
        assert!(rx.is_empty());
        let app = state.read();
        assert!(!app.dashboard.submitting);
        assert_eq!(app.pending_notifications.len(), 1);
    }

    #[test]
    fn non_owner_cannot_list() {
        let state = state_with("cooperative", "somebody-else");
        let (tx, rx) = async_channel::unbounded();
        handle_list_on_market(&state, tx);
        assert!(rx.is_empty());
        assert!(!state.read().dashboard.submitting);
    }

    #[test]
    fn bad_form_input_is_rejected_locally() {
        let state = state_with("cooperative", "u1");
        state.write().dashboard.marketplace_form.quantity = "-5".to_string();
        let (tx, rx) = async_channel::unbounded();
        handle_list_on_market(&state, tx);
        assert!(rx.is_empty());
        assert!(!state.read().dashboard.submitting);
    }

    #[test]
    fn non_owner_cannot_remove() {
        let state = state_with("cooperative", "somebody-else");
        let (tx, rx) = async_channel::unbounded();
        handle_remove_from_market(&state, tx);
        assert!(rx.is_empty());
        assert!(!state.read().dashboard.submitting);
    }
}
