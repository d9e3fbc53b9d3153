//! Resource services.
//!
//! One module per entity, one flat function per REST verb-path pair. The
//! only logic here is shaping the request body: coercing numeric strings
//! from forms and stripping empty optional fields. Errors pass through
//! verbatim from the resource client; nothing retries.

pub mod auth;
pub mod banners;
pub mod orders;
pub mod products;
pub mod promotions;
pub mod settings;
pub mod users;

/// The validation message shown when a form is submitted incomplete.
pub(crate) const INCOMPLETE_FORM: &str = "Por favor, completa todos los campos requeridos.";
