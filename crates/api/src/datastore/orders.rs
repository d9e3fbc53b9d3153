//! Order table operations.
//!
//! Orders are read-only here; nothing in this backend creates or updates
//! them.

use backline_core::Order;

use super::{DataServiceClient, DataServiceError};

const TABLE: &str = "orders";

/// Fetch every order with the customer's name/email embedded, most recent
/// first.
pub async fn list(client: &DataServiceClient) -> Result<Vec<Order>, DataServiceError> {
    client
        .select(
            TABLE,
            &[
                ("select", "*,users(name,email)"),
                ("order", "created_at.desc"),
            ],
        )
        .await
}
