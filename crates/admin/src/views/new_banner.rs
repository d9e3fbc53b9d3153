//! New banner form view.

use askama::Template;

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services::banners::{self, BannerDraft};
use crate::view::{EventBinding, FormData, Slot, SubmitOutcome, View};

use super::{ErrorAlert, render_template};

#[derive(Template)]
#[template(path = "views/new_banner.html")]
struct NewBannerTemplate;

/// The banner creation form.
pub struct NewBannerView;

impl View for NewBannerView {
    fn route(&self) -> Route {
        Route::NewBanner
    }

    fn slot(&self) -> Option<Slot> {
        None
    }

    fn render(&self) -> String {
        render_template(&NewBannerTemplate)
    }

    fn loading_fragment(&self) -> String {
        String::new()
    }

    async fn load_data(&self, _api: &ApiClient) -> Result<Option<String>, ApiClientError> {
        Ok(None)
    }

    fn error_fragment(&self, message: &str) -> String {
        render_template(&ErrorAlert { message })
    }

    fn init_events(&self) -> Vec<EventBinding> {
        vec![EventBinding::Submit { form: "bannerForm" }]
    }

    async fn submit(&self, api: &ApiClient, form: &FormData) -> Option<SubmitOutcome> {
        let draft = match BannerDraft::from_form(form) {
            Ok(draft) => draft,
            Err(message) => return Some(SubmitOutcome::invalid(message)),
        };

        Some(match banners::create(api, &draft, form.file()).await {
            Ok(banner) => {
                tracing::info!(id = %banner.id, "Banner creado");
                SubmitOutcome::created("Banner creado con éxito", Route::Banners)
            }
            Err(e) => SubmitOutcome::failed(format!("Error al guardar: {e}")),
        })
    }
}
