//! # User Action Handlers
//!
//! Entry points for everything the operator can do. Each handler validates
//! its form against the domain rules before anything is sent, sets the
//! relevant in-flight guard, and spawns the request; results come back as
//! [`AppEvent`]s.
//!
//! [`AppEvent`]: crate::app::events::AppEvent

pub mod auth;
pub mod marketplace;
pub mod orders;
