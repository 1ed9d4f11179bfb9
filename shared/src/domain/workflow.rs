//! # Order Status Workflow
//!
//! The finite set of order states and the transitions a seller may apply to
//! them. The backend enforces the same rules; validating here means an
//! illegal transition is rejected before any request leaves the device.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle state of a marketplace order. Serializes to the lowercase
/// strings the backend stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Shipped,
    Delivered,
    Rejected,
    Cancelled,
}

impl OrderStatus {
    /// All states, in workflow order.
    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Rejected,
            OrderStatus::Cancelled,
        ]
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Display label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// One-line description shown on the status update screen.
    pub fn description(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Awaiting confirmation from seller",
            OrderStatus::Confirmed => "Order confirmed, preparing for shipment",
            OrderStatus::Preparing => "Order is being prepared for shipment",
            OrderStatus::Shipped => "Order has been shipped to buyer",
            OrderStatus::Delivered => "Order successfully delivered",
            OrderStatus::Rejected => "Order has been rejected",
            OrderStatus::Cancelled => "Order has been cancelled",
        }
    }

    /// The states this one may legally move to.
    pub fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Rejected],
            OrderStatus::Confirmed => &[OrderStatus::Preparing, OrderStatus::Cancelled],
            OrderStatus::Preparing => &[OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Rejected | OrderStatus::Cancelled => &[],
        }
    }

    /// True once no further transitions are permitted.
    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Whether `next` is in this state's allowed set.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a requested status change was refused. The message is what the
/// operator sees; nothing is sent to the backend when validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot change a {current} order to {requested}")]
    NotAllowed {
        current: OrderStatus,
        requested: OrderStatus,
    },
    #[error("tracking number is required when marking as shipped")]
    TrackingNumberRequired,
}

/// Validate a seller-requested status change, including the side-constraint
/// that shipping requires a tracking identifier.
///
/// `tracking_number` is the operator-supplied field, trimmed before the
/// emptiness check.
pub fn validate_transition(
    current: OrderStatus,
    requested: OrderStatus,
    tracking_number: &str,
) -> Result<(), TransitionError> {
    if !current.can_transition_to(requested) {
        return Err(TransitionError::NotAllowed { current, requested });
    }
    if requested == OrderStatus::Shipped && tracking_number.trim().is_empty() {
        return Err(TransitionError::TrackingNumberRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table_matches_workflow() {
        use OrderStatus::*;
        assert_eq!(Pending.allowed_transitions(), &[Confirmed, Rejected]);
        assert_eq!(Confirmed.allowed_transitions(), &[Preparing, Cancelled]);
        assert_eq!(Preparing.allowed_transitions(), &[Shipped, Cancelled]);
        assert_eq!(Shipped.allowed_transitions(), &[Delivered]);
        assert!(Delivered.allowed_transitions().is_empty());
        assert!(Rejected.allowed_transitions().is_empty());
        assert!(Cancelled.allowed_transitions().is_empty());
    }

    #[test]
    fn terminal_states_reject_everything() {
        use OrderStatus::*;
        for terminal in [Delivered, Rejected, Cancelled] {
            assert!(terminal.is_terminal());
            for next in OrderStatus::all() {
                assert_eq!(
                    validate_transition(terminal, *next, "TRK-1"),
                    Err(TransitionError::NotAllowed {
                        current: terminal,
                        requested: *next,
                    })
                );
            }
        }
    }

    #[test]
    fn shipping_requires_tracking_number() {
        use OrderStatus::*;
        assert_eq!(
            validate_transition(Preparing, Shipped, ""),
            Err(TransitionError::TrackingNumberRequired)
        );
        assert_eq!(
            validate_transition(Preparing, Shipped, "   "),
            Err(TransitionError::TrackingNumberRequired)
        );
        assert_eq!(validate_transition(Preparing, Shipped, "TRK-42"), Ok(()));
    }

    #[test]
    fn tracking_number_not_required_elsewhere() {
        use OrderStatus::*;
        assert_eq!(validate_transition(Pending, Confirmed, ""), Ok(()));
        assert_eq!(validate_transition(Confirmed, Cancelled, ""), Ok(()));
        assert_eq!(validate_transition(Shipped, Delivered, ""), Ok(()));
    }

    #[test]
    fn skipping_states_is_rejected() {
        use OrderStatus::*;
        assert!(validate_transition(Pending, Shipped, "TRK-1").is_err());
        assert!(validate_transition(Confirmed, Delivered, "").is_err());
    }

    #[test]
    fn error_messages_are_operator_readable() {
        let err = validate_transition(OrderStatus::Preparing, OrderStatus::Shipped, "").unwrap_err();
        assert_eq!(
            err.to_string(),
            "tracking number is required when marking as shipped"
        );
        let err = validate_transition(OrderStatus::Delivered, OrderStatus::Pending, "").unwrap_err();
        assert_eq!(err.to_string(), "cannot change a delivered order to pending");
    }

    #[test]
    fn every_status_has_label_and_description() {
        for status in OrderStatus::all() {
            assert!(!status.label().is_empty());
            assert!(!status.description().is_empty());
        }
        assert_eq!(
            OrderStatus::Shipped.description(),
            "Order has been shipped to buyer"
        );
        assert_eq!(OrderStatus::Pending.label(), "Pending");
    }

    #[test]
    fn wire_format_is_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"preparing\"");
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }
}
