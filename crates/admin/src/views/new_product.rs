//! New product form view.

use askama::Template;

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services::products::{self, ProductDraft};
use crate::view::{EventBinding, FormData, Slot, SubmitOutcome, View};

use super::{ErrorAlert, render_template};

#[derive(Template)]
#[template(path = "views/new_product.html")]
struct NewProductTemplate;

/// The product creation form.
pub struct NewProductView;

impl View for NewProductView {
    fn route(&self) -> Route {
        Route::NewProduct
    }

    fn slot(&self) -> Option<Slot> {
        None
    }

    fn render(&self) -> String {
        render_template(&NewProductTemplate)
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
        vec![EventBinding::Submit {
            form: "productForm",
        }]
    }

    async fn submit(&self, api: &ApiClient, form: &FormData) -> Option<SubmitOutcome> {
        let draft = match ProductDraft::from_form(form) {
            Ok(draft) => draft,
            Err(message) => return Some(SubmitOutcome::invalid(message)),
        };

        Some(match products::create(api, &draft, form.file()).await {
            Ok(product) => {
                tracing::info!(id = %product.id, "Producto creado");
                SubmitOutcome::created("Producto creado con éxito", Route::Products)
            }
            Err(e) => SubmitOutcome::failed(format!("Error al guardar: {e}")),
        })
    }
}
