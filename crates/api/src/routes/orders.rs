//! Order route handlers.
//!
//! Orders are read-only: there is no create or update endpoint.

use axum::{Json, extract::State};

use backline_core::Order;

use crate::datastore::orders;
use crate::error::Result;
use crate::state::AppState;

/// List all orders with customer name/email embedded, most recent first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = orders::list(state.datastore()).await?;
    Ok(Json(orders))
}
