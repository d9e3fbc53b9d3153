//! New client form view.

use askama::Template;

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services::users::{self, UserDraft};
use crate::view::{EventBinding, FormData, Slot, SubmitOutcome, View};

use super::{ErrorAlert, render_template};

#[derive(Template)]
#[template(path = "views/new_client.html")]
struct NewClientTemplate;

/// The client creation form.
pub struct NewClientView;

impl View for NewClientView {
    fn route(&self) -> Route {
        Route::NewClient
    }

    fn slot(&self) -> Option<Slot> {
        None
    }

    fn render(&self) -> String {
        render_template(&NewClientTemplate)
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
        vec![EventBinding::Submit { form: "clientForm" }]
    }

    async fn submit(&self, api: &ApiClient, form: &FormData) -> Option<SubmitOutcome> {
        let draft = match UserDraft::from_form(form) {
            Ok(draft) => draft,
            Err(message) => return Some(SubmitOutcome::invalid(message)),
        };

        Some(match users::create(api, &draft).await {
            Ok(user) => {
                tracing::info!(id = %user.id, "Cliente creado");
                SubmitOutcome::created("Cliente creado con éxito", Route::Clients)
            }
            // The 409 duplicate-email message surfaces here verbatim.
            Err(e) => SubmitOutcome::failed(format!("Error al guardar: {e}")),
        })
    }
}
