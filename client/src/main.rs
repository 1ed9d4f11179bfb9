//! Headless client: restores or establishes a session, then prints the
//! dashboard and order summaries. Configuration comes from the environment
//! (see `.env`): `AFLAGUARD_API_URL`, `AFLAGUARD_EMAIL`, `AFLAGUARD_PASSWORD`,
//! `AFLAGUARD_SESSION_FILE`.

use chrono::Utc;
use client::app::event_handler::handle_event;
use client::app::state::{AppState, Language, Screen, Session};
use client::app::{handlers, tasks};
use client::core::error::{AppError, Result};
use client::services::api::{ApiClient, DEFAULT_API_URL};
use client::services::storage::{keys, SessionStore};
use parking_lot::RwLock;
use shared::utils::format_rwf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base_url =
        std::env::var("AFLAGUARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let store_path = std::env::var("AFLAGUARD_SESSION_FILE")
        .unwrap_or_else(|_| SessionStore::DEFAULT_PATH.to_string());
    tracing::info!(%base_url, "Starting AflaGuard client");

    let mut store = SessionStore::open(&store_path)?;
    let api_client: Arc<ApiClient> = Arc::new(ApiClient::with_base_url(base_url));
    let state = Arc::new(RwLock::new(AppState::new()));
    {
        let mut app = state.write();
        app.api_client = Some(api_client);
        if let Some(code) = store.get(keys::LANGUAGE) {
            app.language = Language::from_code(code);
        }
    }

    let (event_tx, event_rx) = async_channel::unbounded();

    // Restore a persisted session, or log in with env credentials.
    match Session::load(&store, Utc::now())? {
        Some(session) => {
            tracing::info!(username = %session.user.username, "Session restored");
            let mut app = state.write();
            app.session = Some(session);
            app.screen = Screen::Dashboard;
        }
        None => {
            let email = std::env::var("AFLAGUARD_EMAIL")
                .map_err(|_| AppError::State("AFLAGUARD_EMAIL not set and no stored session".to_string()))?;
            let password = std::env::var("AFLAGUARD_PASSWORD")
                .map_err(|_| AppError::State("AFLAGUARD_PASSWORD not set".to_string()))?;
            handlers::auth::handle_login(&state, event_tx.clone(), email.clone(), password);
            // Validation failures are reported synchronously; no request
            // was issued and nothing will arrive on the channel.
            if let Some((_, message)) = state.read().pending_notifications.first() {
                return Err(AppError::Validation(message.clone()));
            }
            let event = event_rx
                .recv()
                .await
                .map_err(|e| AppError::State(e.to_string()))?;
            handle_event(&state, event);

            let session = {
                let app = state.read();
                app.session.clone()
            };
            let session = session.ok_or_else(|| AppError::Api("login failed".to_string()))?;
            session.persist(&mut store, Some(&email))?;
        }
    }

    // Dashboard
    tasks::dashboard::fetch_batches(&state, event_tx.clone());
    let event = event_rx
        .recv()
        .await
        .map_err(|e| AppError::State(e.to_string()))?;
    handle_event(&state, event);

    {
        let app = state.read();
        let user = app.current_user()?;
        println!("== {} ==", Screen::Dashboard.title());
        println!("Signed in as {} ({})", user.username, user.account_type);
        let stats = &app.dashboard.stats;
        println!(
            "{} tests | {} safe for children | {} alerts | avg {:.1} ppb",
            stats.total_tests, stats.safe_for_children, stats.alerts, stats.avg_ppb
        );
        for test in &app.dashboard.recent_tests {
            let market = if test.is_on_market {
                format!(
                    " | on market: {} kg @ {}/kg",
                    test.available_quantity,
                    format_rwf(test.price_per_kg)
                )
            } else {
                String::new()
            };
            println!(
                "  {}  {:>6.1} ppb  {}{}",
                test.batch_id,
                test.reading.ppb(),
                test.category.label(),
                market
            );
        }
        if let Some(error) = &app.dashboard.error {
            eprintln!("dashboard error: {}", error);
        }
    }

    // Orders
    tasks::orders::fetch_orders(&state, event_tx.clone(), 1);
    let event = event_rx
        .recv()
        .await
        .map_err(|e| AppError::State(e.to_string()))?;
    handle_event(&state, event);

    {
        let app = state.read();
        println!("== {} ==", Screen::Orders.title());
        println!(
            "Orders: {} total, {} revenue (page {}/{})",
            app.orders.total_orders(),
            format_rwf(app.orders.total_revenue()),
            app.orders.page,
            app.orders.total_pages
        );
        for order in &app.orders.orders {
            println!(
                "  {}  {}  {} kg  {}  [{}]",
                order.order_id,
                order.buyer_name,
                order.quantity_ordered,
                format_rwf(order.total_amount),
                order.status.label()
            );
        }
        if let Some(error) = &app.orders.error {
            eprintln!("orders error: {}", error);
        }
    }

    Ok(())
}
