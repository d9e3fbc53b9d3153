//! The SPA router.
//!
//! `navigate` sequences the view lifecycle for a hash change:
//!
//! 1. resolve the route, falling back to the dashboard for unregistered
//!    names (self-correcting, not an error - the recorded location is
//!    updated to match);
//! 2. replace the content region with the view's placeholder (synchronous,
//!    always succeeds);
//! 3. run the view's data load; while pending the region shows the
//!    placeholder's loading indicator, on success only the slot is
//!    replaced, on failure the slot shows an inline error;
//! 4. bind the view's event handlers;
//! 5. highlight the active nav entry, including the ancestor section for
//!    submenu leaves.
//!
//! Every navigation takes a ticket from a generation counter; a load that
//! completes under a stale ticket is discarded instead of overwriting the
//! view that superseded it.

use tracing::instrument;

use backline_core::ProductId;

use crate::client::{ApiClient, ApiClientError};
use crate::notify::Notification;
use crate::region::ContentRegion;
use crate::route::Route;
use crate::services;
use crate::view::{FormData, SubmitOutcome};
use crate::views;

/// A claim on one navigation. Only the most recently issued ticket may
/// write its load result into the region.
#[derive(Debug, Clone, Copy)]
pub struct NavigationTicket {
    seq: u64,
    pub route: Route,
    pub redirected: bool,
}

/// How a navigation's data step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Data rendered into the slot.
    Loaded,
    /// Load failed; the slot shows an inline error.
    Failed,
    /// The view has no data step.
    Skipped,
    /// A newer navigation started before this one resolved; the result was
    /// discarded.
    Superseded,
}

/// The result of one `navigate` call.
#[derive(Debug, Clone, Copy)]
pub struct Navigation {
    pub route: Route,
    /// Whether an unregistered name was corrected to the default route.
    pub redirected: bool,
    pub outcome: LoadOutcome,
}

/// A row-level action dispatched from a delegated click.
#[derive(Debug, Clone)]
pub enum UiAction {
    /// Delete a product and reload the listing.
    DeleteProduct { id: ProductId, name: String },
    /// Present as a button, still unimplemented.
    EditProduct { id: ProductId },
}

/// The admin panel application.
pub struct AdminApp {
    api: ApiClient,
    region: ContentRegion,
    route: Route,
    location: String,
    nav_seq: u64,
    notifications: Vec<Notification>,
}

impl AdminApp {
    /// Create the app. Nothing is rendered until the first `navigate`.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            region: ContentRegion::new(),
            route: Route::DEFAULT,
            location: String::new(),
            nav_seq: 0,
            notifications: Vec::new(),
        }
    }

    /// The resource client (and through it, the session).
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The content region holding the current view.
    #[must_use]
    pub fn region(&self) -> &ContentRegion {
        &self.region
    }

    /// The current route.
    #[must_use]
    pub const fn current_route(&self) -> Route {
        self.route
    }

    /// The recorded location hash (kept in sync with the browser bar).
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The window title for the current view.
    #[must_use]
    pub fn document_title(&self) -> String {
        format!("{} | Panel de Administración", self.route.title())
    }

    /// The nav entries to highlight: the sidebar section and the exact
    /// route. For a submenu leaf the section is its ancestor entry.
    #[must_use]
    pub const fn active_menu(&self) -> (Route, Route) {
        (self.route.menu_section(), self.route)
    }

    /// Pending notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Dismiss a notification by index.
    pub fn dismiss_notification(&mut self, index: usize) {
        if index < self.notifications.len() {
            self.notifications.remove(index);
        }
    }

    /// Navigate to a hash name, running the full lifecycle.
    #[instrument(skip(self))]
    pub async fn navigate(&mut self, requested: &str) -> Navigation {
        let ticket = self.begin_navigation(requested);
        let result = views::load(ticket.route, &self.api).await;
        self.finish_navigation(&ticket, result)
    }

    /// Steps 1-2: resolve the route and show its placeholder. Returns the
    /// ticket the load must present to apply its result.
    pub fn begin_navigation(&mut self, requested: &str) -> NavigationTicket {
        let name = requested.trim_start_matches('#');
        let (route, redirected) = if name.is_empty() {
            (Route::DEFAULT, false)
        } else {
            match Route::parse(name) {
                Some(route) => (route, false),
                None => {
                    tracing::warn!(
                        requested = %name,
                        "Unregistered route, redirecting to {}",
                        Route::DEFAULT
                    );
                    (Route::DEFAULT, true)
                }
            }
        };

        self.route = route;
        self.location = route.hash().to_string();
        self.nav_seq += 1;

        let (slot, page, loading) = views::placeholder(route);
        self.region.show_placeholder(slot, page, loading);

        NavigationTicket {
            seq: self.nav_seq,
            route,
            redirected,
        }
    }

    /// Steps 3-5: apply a load result under the given ticket. A stale
    /// ticket's result is discarded.
    pub fn finish_navigation(
        &mut self,
        ticket: &NavigationTicket,
        result: Result<Option<String>, ApiClientError>,
    ) -> Navigation {
        if ticket.seq != self.nav_seq {
            tracing::debug!(route = %ticket.route, "Stale load discarded");
            return Navigation {
                route: ticket.route,
                redirected: ticket.redirected,
                outcome: LoadOutcome::Superseded,
            };
        }

        let outcome = match result {
            Ok(Some(html)) => {
                self.region.fill_slot(html);
                LoadOutcome::Loaded
            }
            Ok(None) => LoadOutcome::Skipped,
            Err(e) => {
                self.region
                    .fail_slot(views::error_fragment(ticket.route, &e.to_string()));
                LoadOutcome::Failed
            }
        };

        self.region.set_bindings(views::bindings(ticket.route));

        Navigation {
            route: ticket.route,
            redirected: ticket.redirected,
            outcome,
        }
    }

    /// Re-run the current view's data step in place (after a row action).
    pub async fn refresh(&mut self) {
        match views::load(self.route, &self.api).await {
            Ok(Some(html)) => self.region.fill_slot(html),
            Ok(None) => {}
            Err(e) => self
                .region
                .fail_slot(views::error_fragment(self.route, &e.to_string())),
        }
    }

    /// Submit the current view's form. Answers `None` when the current view
    /// has no form. On success the app navigates to the outcome's listing
    /// route; on failure the submit control is re-enabled and a notification
    /// is queued.
    pub async fn submit_form(&mut self, form: &FormData) -> Option<SubmitOutcome> {
        let outcome = views::submit(self.route, &self.api, form).await?;
        self.notifications.push(outcome.notification.clone());

        if let Some(next) = outcome.next {
            self.navigate(next.hash()).await;
        }

        Some(outcome)
    }

    /// Run a row-level action and queue its notification.
    pub async fn run_action(&mut self, action: UiAction) -> Notification {
        let notification = match action {
            UiAction::DeleteProduct { id, name } => {
                match services::products::remove(&self.api, id).await {
                    Ok(_) => {
                        self.refresh().await;
                        Notification::success(format!(
                            "Producto \"{name}\" eliminado correctamente"
                        ))
                    }
                    Err(e) => Notification::danger(format!("Error al eliminar: {e}")),
                }
            }
            UiAction::EditProduct { .. } => {
                Notification::info("La función de editar aún no está implementada.")
            }
        };

        self.notifications.push(notification.clone());
        notification
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use url::Url;

    use crate::region::ViewPhase;
    use crate::session::SessionStore;

    fn app() -> AdminApp {
        let api = ApiClient::new(
            &Url::parse("http://localhost:3000/api").unwrap(),
            SessionStore::new(),
        );
        AdminApp::new(api)
    }

    #[test]
    fn test_unregistered_route_redirects_to_dashboard() {
        let mut app = app();
        let ticket = app.begin_navigation("vista-inexistente");

        assert_eq!(ticket.route, Route::Dashboard);
        assert!(ticket.redirected);
        assert_eq!(app.location(), "dashboard");
        // The dashboard placeholder rendered without throwing.
        assert!(app.region().html().contains("Dashboard"));
    }

    #[test]
    fn test_empty_hash_is_dashboard_without_redirect() {
        let mut app = app();
        let ticket = app.begin_navigation("");
        assert_eq!(ticket.route, Route::Dashboard);
        assert!(!ticket.redirected);
    }

    #[test]
    fn test_stale_load_result_is_discarded() {
        let mut app = app();

        let first = app.begin_navigation("productos");
        let second = app.begin_navigation("pedidos");

        // The products load resolves after the user already left.
        let stale = app.finish_navigation(&first, Ok(Some("<tr><td>STALE</td></tr>".into())));
        assert_eq!(stale.outcome, LoadOutcome::Superseded);
        assert!(!app.region().html().contains("STALE"));

        let fresh = app.finish_navigation(&second, Ok(Some("<tr><td>#42</td></tr>".into())));
        assert_eq!(fresh.outcome, LoadOutcome::Loaded);
        assert!(app.region().html().contains("#42"));
    }

    #[test]
    fn test_failed_load_shows_inline_error_and_keeps_chrome() {
        let mut app = app();
        let ticket = app.begin_navigation("productos");

        let nav = app.finish_navigation(
            &ticket,
            Err(ApiClientError::Server {
                status: 500,
                message: "Error al obtener los productos.".into(),
            }),
        );

        assert_eq!(nav.outcome, LoadOutcome::Failed);
        assert_eq!(app.region().phase(), ViewPhase::Error);
        let html = app.region().html();
        // Outer navigation chrome unaffected; only the slot shows the error.
        assert!(html.contains("<h1>Productos</h1>"));
        assert!(html.contains("No se pudieron cargar los productos: Error al obtener los productos."));
    }

    #[test]
    fn test_submenu_leaf_highlights_ancestor_section() {
        let mut app = app();
        let ticket = app.begin_navigation("nuevo-producto");
        let nav = app.finish_navigation(&ticket, Ok(None));

        assert_eq!(nav.outcome, LoadOutcome::Skipped);
        assert_eq!(app.active_menu(), (Route::Products, Route::NewProduct));
    }

    #[test]
    fn test_form_placeholder_is_complete_and_bound() {
        let mut app = app();
        let ticket = app.begin_navigation("nueva-promocion");
        app.finish_navigation(&ticket, Ok(None));

        assert_eq!(app.region().phase(), ViewPhase::Loaded);
        assert!(app.region().html().contains("id=\"promoForm\""));
        assert_eq!(
            app.region().bindings(),
            &[crate::view::EventBinding::Submit { form: "promoForm" }]
        );
    }

    #[test]
    fn test_document_title_follows_route() {
        let mut app = app();
        app.begin_navigation("configuracion");
        assert_eq!(app.document_title(), "Configuración | Panel de Administración");
    }

    #[test]
    fn test_dismiss_notification() {
        let mut app = app();
        app.notifications.push(Notification::info("uno"));
        app.notifications.push(Notification::info("dos"));
        app.dismiss_notification(0);
        assert_eq!(app.notifications().len(), 1);
        assert_eq!(app.notifications()[0].message, "dos");
    }
}
