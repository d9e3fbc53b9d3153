//! View implementations and their dispatch table.
//!
//! Each route resolves to exactly one view type through [`with_view!`]; the
//! router never looks views up by name, so an unregistered route cannot
//! exist past parsing.

pub mod banners;
pub mod clients;
pub mod dashboard;
pub mod new_banner;
pub mod new_client;
pub mod new_product;
pub mod new_promotion;
pub mod orders;
pub mod products;
pub mod promotions;
pub mod settings;

pub use banners::BannersView;
pub use clients::ClientsView;
pub use dashboard::DashboardView;
pub use new_banner::NewBannerView;
pub use new_client::NewClientView;
pub use new_product::NewProductView;
pub use new_promotion::NewPromotionView;
pub use orders::OrdersView;
pub use products::ProductsView;
pub use promotions::PromotionsView;
pub use settings::SettingsView;

use askama::Template;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use backline_core::PublicationStatus;

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::view::{EventBinding, FormData, Slot, SubmitOutcome, View};

// =============================================================================
// Shared partial templates
// =============================================================================

/// Loading indicator row for table slots.
#[derive(Template)]
#[template(path = "partials/loading_row.html")]
pub(crate) struct LoadingRow<'a> {
    pub colspan: usize,
    pub label: &'a str,
}

/// Inline error row for table slots.
#[derive(Template)]
#[template(path = "partials/error_row.html")]
pub(crate) struct ErrorRow<'a> {
    pub colspan: usize,
    pub message: &'a str,
}

/// Inline error alert for non-table slots.
#[derive(Template)]
#[template(path = "partials/error_alert.html")]
pub(crate) struct ErrorAlert<'a> {
    pub message: &'a str,
}

/// Render a template, logging instead of propagating the (practically
/// impossible) formatting failure.
pub(crate) fn render_template<T: Template>(template: &T) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Template rendering failed");
        String::new()
    })
}

// =============================================================================
// Display formatting
// =============================================================================

/// Money in the shop currency: `S/. 15.50`.
pub(crate) fn format_money(amount: Decimal) -> String {
    format!("S/. {amount:.2}")
}

/// Timestamps as shown in listings: `01/06/2024 10:30`.
pub(crate) fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// Dates as shown in listings: `01/06/2024`.
pub(crate) fn format_date(value: NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// Badge class for a promotion/banner status.
pub(crate) const fn publication_badge(status: PublicationStatus) -> &'static str {
    match status {
        PublicationStatus::Active => "bg-success",
        PublicationStatus::Inactive => "bg-secondary",
        PublicationStatus::Expired => "bg-danger",
    }
}

/// Spanish label for a promotion/banner status.
pub(crate) const fn publication_label(status: PublicationStatus) -> &'static str {
    match status {
        PublicationStatus::Active => "Activo",
        PublicationStatus::Inactive => "Inactivo",
        PublicationStatus::Expired => "Expirado",
    }
}

// =============================================================================
// Typed dispatch table
// =============================================================================

/// Resolve `$route` to its view value and evaluate `$body` with it.
macro_rules! with_view {
    ($route:expr, $view:ident => $body:expr) => {
        match $route {
            Route::Dashboard => {
                let $view = DashboardView;
                $body
            }
            Route::Products => {
                let $view = ProductsView;
                $body
            }
            Route::NewProduct => {
                let $view = NewProductView;
                $body
            }
            Route::Orders => {
                let $view = OrdersView;
                $body
            }
            Route::Promotions => {
                let $view = PromotionsView;
                $body
            }
            Route::NewPromotion => {
                let $view = NewPromotionView;
                $body
            }
            Route::Banners => {
                let $view = BannersView;
                $body
            }
            Route::NewBanner => {
                let $view = NewBannerView;
                $body
            }
            Route::Clients => {
                let $view = ClientsView;
                $body
            }
            Route::NewClient => {
                let $view = NewClientView;
                $body
            }
            Route::Settings => {
                let $view = SettingsView;
                $body
            }
        }
    };
}

/// A route's slot, placeholder markup, and loading fragment.
pub(crate) fn placeholder(route: Route) -> (Option<Slot>, String, String) {
    with_view!(route, view => (view.slot(), view.render(), view.loading_fragment()))
}

/// Run a route's data-loading step.
pub(crate) async fn load(
    route: Route,
    api: &ApiClient,
) -> Result<Option<String>, ApiClientError> {
    with_view!(route, view => view.load_data(api).await)
}

/// A route's inline error markup for a failed load.
pub(crate) fn error_fragment(route: Route, message: &str) -> String {
    with_view!(route, view => view.error_fragment(message))
}

/// A route's event bindings.
pub(crate) fn bindings(route: Route) -> Vec<EventBinding> {
    with_view!(route, view => view.init_events())
}

/// Run a route's form submission, if it has one.
pub(crate) async fn submit(
    route: Route,
    api: &ApiClient,
    form: &FormData,
) -> Option<SubmitOutcome> {
    with_view!(route, view => view.submit(api, form).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_answers_for_its_route() {
        for route in Route::ALL {
            let (slot, page, _loading) = placeholder(route);
            assert!(!page.is_empty(), "{route} renders no placeholder");
            if let Some(slot) = slot {
                // The placeholder must contain the empty slot element the
                // region splices data into.
                let marker = format!("<{tag} id=\"{id}\"></{tag}>", tag = slot.tag, id = slot.id);
                assert!(page.contains(&marker), "{route} placeholder lacks its slot");
            }
        }
    }

    #[test]
    fn test_listing_placeholders_contain_loading_indicator() {
        for route in [Route::Products, Route::Orders, Route::Clients] {
            let (_, _, loading) = placeholder(route);
            assert!(loading.contains("Cargando"), "{route} lacks a loading row");
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(1550, 2)), "S/. 15.50");
        assert_eq!(format_money(Decimal::new(90, 0)), "S/. 90.00");
    }
}
