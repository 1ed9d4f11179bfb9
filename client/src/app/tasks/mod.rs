//! # Background Tasks
//!
//! Spawned fetches for the list screens. Each task checks and sets its
//! in-flight guard under the state lock before spawning, bumps the fetch
//! generation, and delivers its result as an [`AppEvent`]; the event
//! handler clears the guard and drops stale generations.
//!
//! [`AppEvent`]: crate::app::events::AppEvent

pub mod dashboard;
pub mod laboratories;
pub mod orders;
