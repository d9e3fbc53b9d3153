//! Order resource service.
//!
//! Read-only: the REST surface has no order create/update endpoint.

use backline_core::Order;

use crate::client::{ApiClient, ApiClientError};

/// `GET /orders`
pub async fn get_all(api: &ApiClient) -> Result<Vec<Order>, ApiClientError> {
    api.get_json("/orders").await
}
