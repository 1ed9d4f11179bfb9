//! # Application Layer
//!
//! State, events, and the handlers and background tasks that connect the
//! screens to the backend:
//!
//! - [`state`]: all application state behind one `RwLock`
//! - [`events`]: results delivered by background tasks
//! - [`event_handler`]: folds events into state
//! - [`handlers`]: user actions (validate locally, then spawn the request)
//! - [`tasks`]: guarded list fetches with generation tracking

pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;
