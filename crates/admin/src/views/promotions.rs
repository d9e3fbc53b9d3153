//! Promotions listing view.

use askama::Template;

use backline_core::{DiscountType, Promotion};

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services;
use crate::view::{EventBinding, Slot, View};

use super::{
    ErrorRow, LoadingRow, format_date, format_money, publication_badge, publication_label,
    render_template,
};

const SLOT: Slot = Slot {
    id: "promocionesTableBody",
    tag: "tbody",
};

const COLSPAN: usize = 4;

#[derive(Template)]
#[template(path = "views/promotions.html")]
struct PromotionsTemplate;

#[derive(Template)]
#[template(path = "views/promotion_rows.html")]
struct PromotionRowsTemplate {
    rows: Vec<PromotionRow>,
}

/// One promotion, preformatted for the table.
struct PromotionRow {
    name: String,
    discount: String,
    period: String,
    status: &'static str,
    badge_class: &'static str,
}

impl From<Promotion> for PromotionRow {
    fn from(promotion: Promotion) -> Self {
        let discount = match promotion.discount_type {
            DiscountType::Percentage => format!("{}%", promotion.discount_value),
            DiscountType::FixedAmount => format_money(promotion.discount_value),
        };
        Self {
            name: promotion.name,
            discount,
            period: format!(
                "{} - {}",
                format_date(promotion.start_date),
                format_date(promotion.end_date)
            ),
            status: publication_label(promotion.status),
            badge_class: publication_badge(promotion.status),
        }
    }
}

/// The promotion listing.
pub struct PromotionsView;

impl View for PromotionsView {
    fn route(&self) -> Route {
        Route::Promotions
    }

    fn slot(&self) -> Option<Slot> {
        Some(SLOT)
    }

    fn render(&self) -> String {
        render_template(&PromotionsTemplate)
    }

    fn loading_fragment(&self) -> String {
        render_template(&LoadingRow {
            colspan: COLSPAN,
            label: "Cargando promociones...",
        })
    }

    async fn load_data(&self, api: &ApiClient) -> Result<Option<String>, ApiClientError> {
        let promotions = services::promotions::get_all(api).await?;
        let rows = PromotionRowsTemplate {
            rows: promotions.into_iter().map(PromotionRow::from).collect(),
        };
        Ok(Some(render_template(&rows)))
    }

    fn error_fragment(&self, message: &str) -> String {
        render_template(&ErrorRow {
            colspan: COLSPAN,
            message: &format!("No se pudieron cargar las promociones: {message}"),
        })
    }

    fn init_events(&self) -> Vec<EventBinding> {
        Vec::new()
    }
}
