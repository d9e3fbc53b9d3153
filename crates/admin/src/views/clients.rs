//! Clients listing view (read-only).

use askama::Template;

use backline_core::StoreUser;

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services;
use crate::view::{EventBinding, Slot, View};

use super::{ErrorRow, LoadingRow, format_datetime, render_template};

const SLOT: Slot = Slot {
    id: "clientesTableBody",
    tag: "tbody",
};

const COLSPAN: usize = 6;

#[derive(Template)]
#[template(path = "views/clients.html")]
struct ClientsTemplate;

#[derive(Template)]
#[template(path = "views/client_rows.html")]
struct ClientRowsTemplate {
    rows: Vec<ClientRow>,
}

/// One client, preformatted for the table.
struct ClientRow {
    id: i32,
    name: String,
    email: String,
    role: String,
    registered: String,
}

impl From<StoreUser> for ClientRow {
    fn from(user: StoreUser) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name,
            email: user.email.into_inner(),
            role: user.role.to_string(),
            registered: user
                .created_at
                .as_ref()
                .map_or_else(|| "-".to_string(), format_datetime),
        }
    }
}

/// The client listing; the detail action is a disabled stub.
pub struct ClientsView;

impl View for ClientsView {
    fn route(&self) -> Route {
        Route::Clients
    }

    fn slot(&self) -> Option<Slot> {
        Some(SLOT)
    }

    fn render(&self) -> String {
        render_template(&ClientsTemplate)
    }

    fn loading_fragment(&self) -> String {
        render_template(&LoadingRow {
            colspan: COLSPAN,
            label: "Cargando clientes...",
        })
    }

    async fn load_data(&self, api: &ApiClient) -> Result<Option<String>, ApiClientError> {
        let users = services::users::get_all(api).await?;
        let rows = ClientRowsTemplate {
            rows: users.into_iter().map(ClientRow::from).collect(),
        };
        Ok(Some(render_template(&rows)))
    }

    fn error_fragment(&self, message: &str) -> String {
        render_template(&ErrorRow {
            colspan: COLSPAN,
            message: &format!("No se pudieron cargar los clientes: {message}"),
        })
    }

    fn init_events(&self) -> Vec<EventBinding> {
        vec![EventBinding::Disabled {
            control: "client-detail",
        }]
    }
}
