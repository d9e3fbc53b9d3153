//! Settings view: loads the flat map into the form, bulk-saves on submit.

use askama::Template;

use backline_core::SettingsMap;

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services;
use crate::view::{EventBinding, FormData, Slot, SubmitOutcome, View};

use super::{ErrorAlert, render_template};

const SLOT: Slot = Slot {
    id: "settingsFields",
    tag: "div",
};

#[derive(Template)]
#[template(path = "views/settings.html")]
struct SettingsTemplate;

#[derive(Template)]
#[template(path = "views/settings_fields.html")]
struct SettingsFieldsTemplate {
    store_name: String,
    contact_email: String,
    shipping_cost: String,
    free_shipping_threshold: String,
}

impl SettingsFieldsTemplate {
    fn from_map(map: &SettingsMap) -> Self {
        let value = |key: &str| map.get(key).cloned().unwrap_or_default();
        Self {
            store_name: value("store_name"),
            contact_email: value("contact_email"),
            shipping_cost: value("shipping_cost"),
            free_shipping_threshold: value("free_shipping_threshold"),
        }
    }
}

/// The shop settings form.
pub struct SettingsView;

impl View for SettingsView {
    fn route(&self) -> Route {
        Route::Settings
    }

    fn slot(&self) -> Option<Slot> {
        Some(SLOT)
    }

    fn render(&self) -> String {
        render_template(&SettingsTemplate)
    }

    fn loading_fragment(&self) -> String {
        "<p>Cargando configuración...</p>".to_string()
    }

    async fn load_data(&self, api: &ApiClient) -> Result<Option<String>, ApiClientError> {
        let map = services::settings::get_all(api).await?;
        Ok(Some(render_template(&SettingsFieldsTemplate::from_map(
            &map,
        ))))
    }

    fn error_fragment(&self, message: &str) -> String {
        render_template(&ErrorAlert {
            message: &format!("No se pudo cargar la configuración: {message}"),
        })
    }

    fn init_events(&self) -> Vec<EventBinding> {
        vec![EventBinding::Submit {
            form: "settingsForm",
        }]
    }

    async fn submit(&self, api: &ApiClient, form: &FormData) -> Option<SubmitOutcome> {
        let map: SettingsMap = form
            .fields()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Some(match services::settings::update(api, &map).await {
            Ok(_) => SubmitOutcome::saved("Configuración guardada con éxito."),
            Err(e) => SubmitOutcome::failed(e.to_string()),
        })
    }
}
