//! Banners listing view.

use askama::Template;

use backline_core::Banner;

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services;
use crate::view::{EventBinding, Slot, View};

use super::{
    ErrorRow, LoadingRow, format_date, publication_badge, publication_label, render_template,
};

const SLOT: Slot = Slot {
    id: "bannersTableBody",
    tag: "tbody",
};

const COLSPAN: usize = 4;

#[derive(Template)]
#[template(path = "views/banners.html")]
struct BannersTemplate;

#[derive(Template)]
#[template(path = "views/banner_rows.html")]
struct BannerRowsTemplate {
    rows: Vec<BannerRow>,
}

/// One banner, preformatted for the table.
struct BannerRow {
    title: String,
    image_url: String,
    period: String,
    status: &'static str,
    badge_class: &'static str,
}

impl From<Banner> for BannerRow {
    fn from(banner: Banner) -> Self {
        Self {
            title: banner.title,
            image_url: banner.image_url,
            period: format!(
                "{} - {}",
                format_date(banner.start_date),
                format_date(banner.end_date)
            ),
            status: publication_label(banner.status),
            badge_class: publication_badge(banner.status),
        }
    }
}

/// The banner listing.
pub struct BannersView;

impl View for BannersView {
    fn route(&self) -> Route {
        Route::Banners
    }

    fn slot(&self) -> Option<Slot> {
        Some(SLOT)
    }

    fn render(&self) -> String {
        render_template(&BannersTemplate)
    }

    fn loading_fragment(&self) -> String {
        render_template(&LoadingRow {
            colspan: COLSPAN,
            label: "Cargando banners...",
        })
    }

    async fn load_data(&self, api: &ApiClient) -> Result<Option<String>, ApiClientError> {
        let banners = services::banners::get_all(api).await?;
        let rows = BannerRowsTemplate {
            rows: banners.into_iter().map(BannerRow::from).collect(),
        };
        Ok(Some(render_template(&rows)))
    }

    fn error_fragment(&self, message: &str) -> String {
        render_template(&ErrorRow {
            colspan: COLSPAN,
            message: &format!("No se pudieron cargar los banners: {message}"),
        })
    }

    fn init_events(&self) -> Vec<EventBinding> {
        Vec::new()
    }
}
