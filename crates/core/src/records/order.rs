//! Order records.
//!
//! Orders are read-only in this system: they are created by the checkout
//! flow that lives outside this codebase, and the API only lists them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus, UserId};

/// The customer columns embedded into an order listing by the data service
/// join (`users(name,email)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
    pub email: String,
}

/// A customer order, as listed for the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// `None` when the related user row was deleted.
    #[serde(default, rename = "users", skip_serializing_if = "Option::is_none")]
    pub customer: Option<OrderCustomer>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_customer_uses_users_wire_name() {
        let order: Order = serde_json::from_str(
            r#"{"id":9,"user_id":5,"total_amount":"120.00","status":"pending",
                "created_at":"2024-05-01T10:00:00Z",
                "users":{"name":"Ana","email":"ana@example.com"}}"#,
        )
        .unwrap();
        let customer = order.customer.clone().unwrap();
        assert_eq!(customer.name, "Ana");

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"users\""));
        assert!(!json.contains("\"customer\""));
    }

    #[test]
    fn test_order_without_customer() {
        let order: Order = serde_json::from_str(
            r#"{"id":9,"user_id":5,"total_amount":55.5,"status":"shipped",
                "created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(order.customer.is_none());
        assert_eq!(order.status, OrderStatus::Shipped);
    }
}
