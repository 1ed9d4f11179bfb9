//! Batch list fetch for the dashboard.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Fetch the batch list. A no-op while a fetch is already pending or when
/// no session is active.
pub fn fetch_batches(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, generation) = {
        let mut app = state.write();
        if app.dashboard.fetch_in_flight {
            tracing::debug!("Batch fetch already in flight, skipping");
            return;
        }
        if !app.is_authenticated() {
            return;
        }
        let Some(api_client) = app.api_client.clone() else {
            return;
        };
        app.dashboard.fetch_in_flight = true;
        app.dashboard.loading = true;
        app.dashboard.fetch_generation += 1;
        (api_client, app.dashboard.fetch_generation)
    };

    tokio::spawn(async move {
        let result = api_client.fetch_batches().await;
        let _ = event_tx
            .send(AppEvent::BatchesLoaded { generation, result })
            .await;
    });
}
