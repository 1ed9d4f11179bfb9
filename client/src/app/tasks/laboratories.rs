//! Laboratory directory fetch for the test request form.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::services::api::users::laboratories;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Fetch the user directory and keep only laboratory accounts.
pub fn fetch_laboratories(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, generation) = {
        let mut app = state.write();
        if app.new_test.loading_laboratories {
            return;
        }
        let Some(api_client) = app.api_client.clone() else {
            return;
        };
        app.new_test.loading_laboratories = true;
        app.new_test.fetch_generation += 1;
        (api_client, app.new_test.fetch_generation)
    };

    tokio::spawn(async move {
        let result = api_client.fetch_users().await.map(laboratories);
        let _ = event_tx
            .send(AppEvent::LaboratoriesLoaded { generation, result })
            .await;
    });
}
