//! Login, registration, and sign-out.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::core::error::Result;
use crate::services::storage::{keys, SessionStore};
use crate::utils::validation::{validate_login, validate_registration};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::auth::RegisterRequest;
use std::sync::Arc;

/// Validate and submit the login form.
pub fn handle_login(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let api_client = {
        let mut app = state.write();
        if let Err(e) = validate_login(&email, &password) {
            app.notify("error", e);
            return;
        }
        let Some(api_client) = app.api_client.clone() else {
            return;
        };
        api_client
    };

    let email = email.trim().to_string();
    tokio::spawn(async move {
        let result = api_client.login(email, password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Validate and submit the registration form.
pub fn handle_register(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    mut request: RegisterRequest,
    confirm_password: &str,
) {
    let api_client = {
        let mut app = state.write();
        if let Err(e) = validate_registration(&request, confirm_password) {
            app.notify("error", e);
            return;
        }
        let Some(api_client) = app.api_client.clone() else {
            return;
        };
        api_client
    };

    if request.role.trim().is_empty() {
        request.role = RegisterRequest::DEFAULT_ROLE.to_string();
    }

    tokio::spawn(async move {
        let result = api_client.register(request).await;
        let _ = event_tx.send(AppEvent::RegisterResult(result)).await;
    });
}

/// Sign out: clear every persisted key and reset all screen state.
pub fn handle_sign_out(state: &Arc<RwLock<AppState>>, store: &mut SessionStore) -> Result<()> {
    store.multi_remove(keys::ALL)?;
    let mut app = state.write();
    app.session = None;
    app.screen = Screen::Login;
    app.dashboard = Default::default();
    app.orders = Default::default();
    app.new_test = Default::default();
    tracing::info!("Signed out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_login_is_rejected_before_any_request() {
        let state = Arc::new(RwLock::new(AppState::new()));
        let (tx, rx) = async_channel::unbounded();
        handle_login(&state, tx, "not-an-email".to_string(), "pw".to_string());
        assert!(rx.is_empty());
        let app = state.read();
        assert_eq!(app.pending_notifications.len(), 1);
        assert_eq!(app.pending_notifications[0].0, "error");
    }

    #[test]
    fn sign_out_clears_store_and_resets_state() {
        use crate::app::state::Session;
        use chrono::Utc;
        use shared::dto::auth::ApiUser;
        use shared::dto::batch::Batch;

        let path = std::env::temp_dir().join(format!(
            "aflaguard-signout-test-{}.json",
            std::process::id()
        ));
        let mut store = SessionStore::open(&path).unwrap();
        store.set(keys::USER, "{}").unwrap();
        store.set(keys::TOKEN, "jwt").unwrap();
        store.set(keys::IS_AUTHENTICATED, "true").unwrap();
        store.set(keys::LANGUAGE, "rw").unwrap();

        let mut app = AppState::new();
        app.session = Some(Session::new(
            ApiUser::default(),
            "jwt".to_string(),
            Utc::now(),
        ));
        app.screen = Screen::Dashboard;
        app.dashboard.batches = vec![Batch::default()];
        let state = Arc::new(RwLock::new(app));

        handle_sign_out(&state, &mut store).unwrap();

        for key in keys::ALL {
            assert_eq!(store.get(key), None, "key {key} should be cleared");
        }
        let app = state.read();
        assert!(app.session.is_none());
        assert_eq!(app.screen, Screen::Login);
        assert!(app.dashboard.batches.is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let state = Arc::new(RwLock::new(AppState::new()));
        let (tx, rx) = async_channel::unbounded();
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@coop.rw".to_string(),
            password: "secret1".to_string(),
            account_type: "cooperative".to_string(),
            ..RegisterRequest::default()
        };
        handle_register(&state, tx, request, "other");
        assert!(rx.is_empty());
        assert!(!state.read().pending_notifications.is_empty());
    }
}
