//! Order Model
//!
//! Orders move through a finite status pipeline:
//!
//! ```text
//! pending → preparing → ready → delivered
//!    │          │
//!    └──────────┴────→ cancelled
//! ```
//!
//! `delivered` and `cancelled` are terminal; no transition skips backward
//! or re-enters `pending`.

use crate::types::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether this status admits no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether the transition `self -> next` is legal
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Preparing)
                | (Preparing, Ready)
                | (Ready, Delivered)
                | (Pending, Cancelled)
                | (Preparing, Cancelled)
        )
    }

    /// Stable wire name, used in logs and error messages
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Line item snapshotted from the menu at order-creation time
///
/// `name` and `price` are copies; later menu edits never change
/// historical orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_id: String,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderItem {
    /// Line total in minor units
    pub fn line_total(&self) -> Money {
        self.price * self.quantity as Money
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub organization_id: String,
    /// Anonymous per-browser identifier scoping "my orders" queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_session_id: Option<String>,
    pub customer_name: String,
    pub table_number: String,
    pub items: Vec<OrderItem>,
    /// Always computed server-side as Σ(price × quantity)
    pub total_amount: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submitted line item - resolved against the menu before acceptance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub item_id: String,
    pub quantity: i64,
    pub notes: Option<String>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    /// Explicit tenant, used when no tenant is resolvable from the request
    pub organization_id: Option<String>,
    pub customer_session_id: Option<String>,
    pub customer_name: String,
    pub table_number: String,
    pub items: Vec<OrderItemInput>,
    /// Accepted for wire compatibility, never trusted - the server recomputes
    pub total_amount: Option<Money>,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdateStatus {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Ready));
        assert!(OrderStatus::Ready.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn test_cancellation_paths() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Ready.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_no_backward_or_reentrant_transitions() {
        use OrderStatus::*;
        for status in [Preparing, Ready, Delivered, Cancelled] {
            assert!(!status.can_transition_to(Pending));
        }
        assert!(!Ready.can_transition_to(Preparing));
        assert!(!Delivered.can_transition_to(Ready));
    }

    #[test]
    fn test_terminal_states_frozen() {
        use OrderStatus::*;
        for terminal in [Delivered, Cancelled] {
            assert!(terminal.is_terminal());
            for next in [Pending, Preparing, Ready, Delivered, Cancelled] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"preparing\""
        );
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_line_total() {
        let item = OrderItem {
            item_id: "margherita".into(),
            name: "Margherita Pizza".into(),
            price: 27690,
            quantity: 2,
            notes: None,
        };
        assert_eq!(item.line_total(), 55380);
    }
}
