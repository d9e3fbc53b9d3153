//! Dashboard view: stat cards computed from live data.

use askama::Template;
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;

use backline_core::{OrderStatus, Role};

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services;
use crate::view::{EventBinding, Slot, View};

use super::{ErrorAlert, format_money, render_template};

const SLOT: Slot = Slot {
    id: "dashboardSummary",
    tag: "div",
};

#[derive(Template)]
#[template(path = "views/dashboard.html")]
struct DashboardTemplate;

#[derive(Template)]
#[template(path = "views/dashboard_stats.html")]
struct DashboardStatsTemplate {
    monthly_sales: String,
    clients: usize,
    pending_orders: usize,
    live_promotions: usize,
    products: usize,
}

/// The dashboard: one fan-out over every resource, summarized in cards.
pub struct DashboardView;

impl View for DashboardView {
    fn route(&self) -> Route {
        Route::Dashboard
    }

    fn slot(&self) -> Option<Slot> {
        Some(SLOT)
    }

    fn render(&self) -> String {
        render_template(&DashboardTemplate)
    }

    fn loading_fragment(&self) -> String {
        "<p>Cargando resumen...</p>".to_string()
    }

    async fn load_data(&self, api: &ApiClient) -> Result<Option<String>, ApiClientError> {
        let (products, users, orders, promotions) = tokio::try_join!(
            services::products::get_all(api),
            services::users::get_all(api),
            services::orders::get_all(api),
            services::promotions::get_all(api),
        )?;

        let today = Utc::now().date_naive();

        let monthly_sales: Decimal = orders
            .iter()
            .filter(|order| {
                let created = order.created_at.date_naive();
                order.status != OrderStatus::Cancelled
                    && created.year() == today.year()
                    && created.month() == today.month()
            })
            .map(|order| order.total_amount)
            .sum();

        let stats = DashboardStatsTemplate {
            monthly_sales: format_money(monthly_sales),
            clients: users.iter().filter(|u| u.role == Role::Cliente).count(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            live_promotions: promotions.iter().filter(|p| p.is_live(today)).count(),
            products: products.len(),
        };

        Ok(Some(render_template(&stats)))
    }

    fn error_fragment(&self, message: &str) -> String {
        render_template(&ErrorAlert { message })
    }

    fn init_events(&self) -> Vec<EventBinding> {
        Vec::new()
    }
}
