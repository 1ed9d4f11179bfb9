//! # Event Handler
//!
//! Folds [`AppEvent`]s from background tasks into the shared [`AppState`].
//! Every path clears the in-flight guard it corresponds to; list responses
//! whose generation is older than the latest fetch are dropped outright so
//! they can neither overwrite newer data nor clobber a newer fetch's guard.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

use super::state::Session;

/// Apply a single event to the application state.
pub fn handle_event(state: &Arc<RwLock<AppState>>, event: AppEvent) {
    let mut state = state.write();

    match event {
        AppEvent::LoginResult(result) => match result {
            Ok((user, token)) => {
                tracing::info!(username = %user.username, "Login succeeded");
                let username = user.username.clone();
                state.session = Some(Session::new(user, token, Utc::now()));
                state.screen = crate::app::state::Screen::Dashboard;
                state.notify("success", format!("Welcome back, {}", username));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                state.notify("error", e);
            }
        },

        AppEvent::RegisterResult(result) => match result {
            Ok(user) => {
                state.screen = crate::app::state::Screen::Login;
                state.notify(
                    "success",
                    format!("Account created for {}. Please sign in.", user.username),
                );
            }
            Err(e) => {
                state.notify("error", e);
            }
        },

        AppEvent::BatchesLoaded { generation, result } => {
            // A newer fetch has superseded this response.
            if generation != state.dashboard.fetch_generation {
                tracing::debug!(generation, "Discarding stale batch response");
                return;
            }
            state.dashboard.fetch_in_flight = false;
            state.dashboard.loading = false;
            match result {
                Ok(batches) => {
                    let Some(user) = state.session.as_ref().map(|s| s.user.clone()) else {
                        return;
                    };
                    state.dashboard.apply_batches(&user, batches);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Batch fetch failed");
                    state.dashboard.error = Some(e);
                }
            }
        }

        AppEvent::OrdersLoaded { generation, result } => {
            if generation != state.orders.fetch_generation {
                tracing::debug!(generation, "Discarding stale order response");
                return;
            }
            state.orders.fetch_in_flight = false;
            state.orders.loading = false;
            match result {
                Ok(response) => {
                    let pagination = response.pagination.unwrap_or_default();
                    state.orders.orders = response.data;
                    state.orders.statistics = response.statistics;
                    state.orders.page = pagination.current_page;
                    state.orders.total_pages = pagination.total_pages;
                    state.orders.total_items = pagination.total_items;
                    state.orders.error = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Order fetch failed");
                    state.orders.error = Some(e);
                }
            }
        }

        AppEvent::MarketListingUpdated(result) => {
            state.dashboard.submitting = false;
            match result {
                Ok(batch) => {
                    let listed = batch.is_on_market;
                    state.dashboard.replace_batch(batch);
                    state.dashboard.marketplace_form = Default::default();
                    state.notify(
                        "success",
                        if listed {
                            "Batch listed on the marketplace"
                        } else {
                            "Batch removed from the marketplace"
                        },
                    );
                }
                Err(e) => {
                    state.notify("error", e);
                }
            }
        }

        AppEvent::OrderStatusUpdated {
            order_id,
            status,
            result,
        } => {
            state.orders.updating = false;
            match result {
                Ok(()) => {
                    // Reflect the change locally; the next fetch will bring
                    // the server's authoritative copy.
                    if let Some(order) = state
                        .orders
                        .orders
                        .iter_mut()
                        .find(|o| o.id == order_id)
                    {
                        order.status = status;
                    }
                    state.orders.status_form = Default::default();
                    state.notify("success", format!("Order marked as {}", status));
                }
                Err(e) => {
                    tracing::warn!(order_id = %order_id, error = %e, "Status update failed");
                    state.orders.error = Some(e);
                }
            }
        }

        AppEvent::TestCreated(result) => {
            state.new_test.submitting = false;
            match result {
                Ok(()) => {
                    state.new_test.batch_id.clear();
                    state.new_test.supplier.clear();
                    state.new_test.date.clear();
                    state.new_test.laboratory_email.clear();
                    state.new_test.error = None;
                    state.notify("success", "Test request submitted");
                }
                Err(e) => {
                    state.new_test.error = Some(e);
                }
            }
        }

        AppEvent::LaboratoriesLoaded { generation, result } => {
            if generation != state.new_test.fetch_generation {
                tracing::debug!(generation, "Discarding stale laboratory response");
                return;
            }
            state.new_test.loading_laboratories = false;
            match result {
                Ok(laboratories) => {
                    state.new_test.laboratories = laboratories;
                }
                Err(e) => {
                    state.new_test.error = Some(e);
                }
            }
        }
    }
}
