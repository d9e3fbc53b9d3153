//! Orders listing view (read-only).

use askama::Template;

use backline_core::{Order, OrderStatus};

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services;
use crate::view::{EventBinding, Slot, View};

use super::{ErrorRow, LoadingRow, format_datetime, format_money, render_template};

const SLOT: Slot = Slot {
    id: "pedidosTableBody",
    tag: "tbody",
};

const COLSPAN: usize = 6;

#[derive(Template)]
#[template(path = "views/orders.html")]
struct OrdersTemplate;

#[derive(Template)]
#[template(path = "views/order_rows.html")]
struct OrderRowsTemplate {
    rows: Vec<OrderRow>,
}

/// One order, preformatted for the table.
struct OrderRow {
    id: i32,
    customer: String,
    date: String,
    total: String,
    status: String,
    badge_class: &'static str,
}

impl From<Order> for OrderRow {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.as_i32(),
            customer: order
                .customer
                .map_or_else(|| "Usuario eliminado".to_string(), |c| c.name),
            date: format_datetime(&order.created_at),
            total: format_money(order.total_amount),
            status: order.status.to_string(),
            badge_class: status_badge(order.status),
        }
    }
}

/// Badge class per order status.
const fn status_badge(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "bg-warning text-dark",
        OrderStatus::Processing => "bg-info",
        OrderStatus::Shipped => "bg-primary",
        OrderStatus::Delivered => "bg-success",
        OrderStatus::Cancelled => "bg-danger",
    }
}

/// The order listing; the detail action is a disabled stub.
pub struct OrdersView;

impl View for OrdersView {
    fn route(&self) -> Route {
        Route::Orders
    }

    fn slot(&self) -> Option<Slot> {
        Some(SLOT)
    }

    fn render(&self) -> String {
        render_template(&OrdersTemplate)
    }

    fn loading_fragment(&self) -> String {
        render_template(&LoadingRow {
            colspan: COLSPAN,
            label: "Cargando pedidos...",
        })
    }

    async fn load_data(&self, api: &ApiClient) -> Result<Option<String>, ApiClientError> {
        let orders = services::orders::get_all(api).await?;
        let rows = OrderRowsTemplate {
            rows: orders.into_iter().map(OrderRow::from).collect(),
        };
        Ok(Some(render_template(&rows)))
    }

    fn error_fragment(&self, message: &str) -> String {
        render_template(&ErrorRow {
            colspan: COLSPAN,
            message,
        })
    }

    fn init_events(&self) -> Vec<EventBinding> {
        vec![EventBinding::Disabled {
            control: "order-detail",
        }]
    }
}
