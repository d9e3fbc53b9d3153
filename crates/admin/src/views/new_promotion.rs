//! New promotion form view.

use askama::Template;

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services::promotions::{self, PromotionDraft};
use crate::view::{EventBinding, FormData, Slot, SubmitOutcome, View};

use super::{ErrorAlert, render_template};

#[derive(Template)]
#[template(path = "views/new_promotion.html")]
struct NewPromotionTemplate;

/// The promotion creation form.
pub struct NewPromotionView;

impl View for NewPromotionView {
    fn route(&self) -> Route {
        Route::NewPromotion
    }

    fn slot(&self) -> Option<Slot> {
        None
    }

    fn render(&self) -> String {
        render_template(&NewPromotionTemplate)
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
        vec![EventBinding::Submit { form: "promoForm" }]
    }

    async fn submit(&self, api: &ApiClient, form: &FormData) -> Option<SubmitOutcome> {
        let draft = match PromotionDraft::from_form(form) {
            Ok(draft) => draft,
            Err(message) => return Some(SubmitOutcome::invalid(message)),
        };

        Some(match promotions::create(api, &draft).await {
            Ok(promotion) => {
                tracing::info!(id = %promotion.id, "Promoción creada");
                SubmitOutcome::created("Promoción creada con éxito", Route::Promotions)
            }
            Err(e) => SubmitOutcome::failed(format!("Error al guardar: {e}")),
        })
    }
}
