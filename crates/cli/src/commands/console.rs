//! Render an admin view against a running API.
//!
//! A smoke tool: drives the SPA engine through one navigation and prints
//! the composed markup, so a view can be checked without a browser.

use url::Url;

use backline_admin::{AdminApp, ApiClient, LoadOutcome, SessionStore};

/// Navigate the admin app to `route` and print the result.
///
/// # Errors
///
/// Returns an error if the API URL is invalid.
#[allow(clippy::print_stdout)]
pub async fn render(route: &str, api_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let api_url = Url::parse(api_url)?;
    let api = ApiClient::new(&api_url, SessionStore::new());
    let mut app = AdminApp::new(api);

    let nav = app.navigate(route).await;

    match nav.outcome {
        LoadOutcome::Loaded | LoadOutcome::Skipped => {
            tracing::info!(route = %nav.route, redirected = nav.redirected, "Vista cargada");
        }
        LoadOutcome::Failed => {
            tracing::warn!(route = %nav.route, "La carga de datos falló; se muestra el error inline");
        }
        LoadOutcome::Superseded => {}
    }

    println!("{}", app.region().html());
    Ok(())
}
