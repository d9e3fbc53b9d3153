//! The content region.
//!
//! One region holds the current view: its chrome markup, the contents of its
//! named slot, and the event bindings declared for it. Replacing the region
//! is what "navigating" means; filling the slot is what "loading" means.

use crate::view::{EventBinding, Slot};

/// Lifecycle phase of the view currently in the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// Nothing rendered yet.
    #[default]
    Unloaded,
    /// Placeholder visible, data load pending.
    Loading,
    /// Data rendered into the slot (or no data step needed).
    Loaded,
    /// Load failed; the slot shows an inline error.
    Error,
}

/// The single region views render into.
#[derive(Debug, Default)]
pub struct ContentRegion {
    page: String,
    slot: Option<Slot>,
    slot_html: String,
    phase: ViewPhase,
    bindings: Vec<EventBinding>,
}

impl ContentRegion {
    /// Create an empty region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the region with a view's placeholder.
    ///
    /// With a slot the phase becomes `Loading` and the slot shows the loading
    /// fragment; without one the placeholder is already the complete view.
    pub fn show_placeholder(&mut self, slot: Option<Slot>, page: String, loading: String) {
        self.page = page;
        self.slot = slot;
        self.bindings.clear();
        if slot.is_some() {
            self.slot_html = loading;
            self.phase = ViewPhase::Loading;
        } else {
            self.slot_html = String::new();
            self.phase = ViewPhase::Loaded;
        }
    }

    /// Fill the slot with loaded data. Only the slot changes; the chrome
    /// stays.
    pub fn fill_slot(&mut self, html: String) {
        self.slot_html = html;
        self.phase = ViewPhase::Loaded;
    }

    /// Show an inline error in the slot. Navigation state is unaffected.
    pub fn fail_slot(&mut self, html: String) {
        self.slot_html = html;
        self.phase = ViewPhase::Error;
    }

    /// Record the view's event bindings.
    pub fn set_bindings(&mut self, bindings: Vec<EventBinding>) {
        self.bindings = bindings;
    }

    /// The current bindings.
    #[must_use]
    pub fn bindings(&self) -> &[EventBinding] {
        &self.bindings
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// The composed markup: the chrome with the slot's current contents
    /// spliced into the slot element.
    #[must_use]
    pub fn html(&self) -> String {
        let Some(slot) = self.slot else {
            return self.page.clone();
        };

        let empty = format!("<{tag} id=\"{id}\"></{tag}>", tag = slot.tag, id = slot.id);
        let filled = format!(
            "<{tag} id=\"{id}\">{content}</{tag}>",
            tag = slot.tag,
            id = slot.id,
            content = self.slot_html
        );
        self.page.replacen(&empty, &filled, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOT: Slot = Slot {
        id: "productosTableBody",
        tag: "tbody",
    };

    fn page() -> String {
        "<table><tbody id=\"productosTableBody\"></tbody></table>".to_string()
    }

    #[test]
    fn test_placeholder_shows_loading_fragment() {
        let mut region = ContentRegion::new();
        region.show_placeholder(Some(SLOT), page(), "<tr><td>Cargando...</td></tr>".into());

        assert_eq!(region.phase(), ViewPhase::Loading);
        assert!(region.html().contains("Cargando..."));
    }

    #[test]
    fn test_fill_slot_keeps_chrome() {
        let mut region = ContentRegion::new();
        region.show_placeholder(Some(SLOT), page(), "<tr><td>Cargando...</td></tr>".into());
        region.fill_slot("<tr><td>Parche</td></tr>".into());

        let html = region.html();
        assert_eq!(region.phase(), ViewPhase::Loaded);
        assert!(html.starts_with("<table>"));
        assert!(html.contains("Parche"));
        assert!(!html.contains("Cargando"));
    }

    #[test]
    fn test_fail_slot_shows_inline_error() {
        let mut region = ContentRegion::new();
        region.show_placeholder(Some(SLOT), page(), String::new());
        region.fail_slot("<tr><td>No se pudieron cargar los productos</td></tr>".into());

        assert_eq!(region.phase(), ViewPhase::Error);
        assert!(region.html().contains("No se pudieron cargar"));
    }

    #[test]
    fn test_slotless_placeholder_is_complete() {
        let mut region = ContentRegion::new();
        region.show_placeholder(None, "<form id=\"productForm\"></form>".into(), String::new());

        assert_eq!(region.phase(), ViewPhase::Loaded);
        assert_eq!(region.html(), "<form id=\"productForm\"></form>");
    }

    #[test]
    fn test_new_placeholder_clears_bindings() {
        let mut region = ContentRegion::new();
        region.set_bindings(vec![EventBinding::Delegated { action: "delete" }]);
        region.show_placeholder(Some(SLOT), page(), String::new());
        assert!(region.bindings().is_empty());
    }
}
