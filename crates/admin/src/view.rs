//! The view lifecycle contract.
//!
//! Every route resolves to a view implementing [`View`]: a synchronous
//! placeholder render, an async data-loading step, and an event-binding
//! declaration. The contract is total - there are no optionally-present
//! methods - and capabilities are expressed in return values (a form view's
//! `load_data` returns `Ok(None)`, a listing view without row actions
//! returns no bindings).

use std::collections::HashMap;

use crate::client::{ApiClient, ApiClientError};
use crate::notify::Notification;
use crate::route::Route;

/// The named element a view loads its data into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Element id, e.g. `productosTableBody`.
    pub id: &'static str,
    /// Element tag, e.g. `tbody`.
    pub tag: &'static str,
}

/// An event binding a view declares after its data is rendered.
///
/// Bindings are declarative and idempotent: binding the same list twice per
/// navigation is a no-op because the region replaces, never appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventBinding {
    /// Delegated click handler for row-level actions (`data-action` value).
    Delegated { action: &'static str },
    /// Submit handler bound to a form by element id.
    Submit { form: &'static str },
    /// A control that is rendered but intentionally inert.
    Disabled { control: &'static str },
}

/// A file attached to a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFile {
    /// Form field name the file is submitted under.
    pub field: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A serialized form: text fields plus at most one attached file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: HashMap<String, String>,
    file: Option<FormFile>,
}

impl FormData {
    /// Set a text field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Read a text field; empty strings count as absent (untouched inputs
    /// submit as `""`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Attach a file.
    pub fn attach_file(&mut self, field: impl Into<String>, filename: impl Into<String>, bytes: Vec<u8>) -> &mut Self {
        self.file = Some(FormFile {
            field: field.into(),
            filename: filename.into(),
            bytes,
        });
        self
    }

    /// The attached file, if any.
    #[must_use]
    pub const fn file(&self) -> Option<&FormFile> {
        self.file.as_ref()
    }

    /// Iterate over the non-empty text fields.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// What a form submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notification: Notification,
    /// Listing route to navigate to on success.
    pub next: Option<Route>,
    /// Whether the submit control must be re-enabled (failure path).
    pub reenable_submit: bool,
}

impl SubmitOutcome {
    /// A successful create: notify and go back to the parent listing.
    #[must_use]
    pub fn created(message: impl Into<String>, next: Route) -> Self {
        Self {
            notification: Notification::success(message),
            next: Some(next),
            reenable_submit: false,
        }
    }

    /// A saved-in-place success (no navigation).
    #[must_use]
    pub fn saved(message: impl Into<String>) -> Self {
        Self {
            notification: Notification::success(message),
            next: None,
            reenable_submit: true,
        }
    }

    /// A failed submission: notify and re-enable the submit control.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            notification: Notification::danger(message),
            next: None,
            reenable_submit: true,
        }
    }

    /// An invalid form caught before any request was made.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            notification: Notification::warning(message),
            next: None,
            reenable_submit: true,
        }
    }
}

/// The lifecycle contract all views implement.
pub trait View {
    /// The route this view is bound to.
    fn route(&self) -> Route;

    /// The slot `load_data` fills, or `None` for views whose placeholder is
    /// already complete (forms).
    fn slot(&self) -> Option<Slot>;

    /// Placeholder markup for the whole view. Synchronous; always succeeds.
    /// Contains the (empty) slot element when `slot()` is `Some`.
    fn render(&self) -> String;

    /// Markup shown inside the slot while `load_data` is pending.
    fn loading_fragment(&self) -> String;

    /// Fetch this view's data and render the slot fragment.
    ///
    /// Returns `Ok(None)` when the view has no data step.
    ///
    /// # Errors
    ///
    /// Any resource client error; the router renders it inline via
    /// [`View::error_fragment`].
    async fn load_data(&self, api: &ApiClient) -> Result<Option<String>, ApiClientError>;

    /// Inline error markup for the slot when `load_data` fails.
    fn error_fragment(&self, message: &str) -> String;

    /// Event bindings for the rendered view.
    fn init_events(&self) -> Vec<EventBinding>;

    /// Handle a form submission. Non-form views answer `None`.
    async fn submit(&self, api: &ApiClient, form: &FormData) -> Option<SubmitOutcome> {
        let _ = (api, form);
        None
    }
}
