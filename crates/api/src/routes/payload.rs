//! Request payload helpers for endpoints that accept JSON or multipart.
//!
//! The admin panel posts product and banner forms as multipart (so an image
//! can ride along), while API clients send plain JSON. Handlers branch on the
//! request content type and funnel both shapes through the same input structs.

use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{HeaderMap, header};

use crate::error::ApiError;

/// An image part captured from a multipart form.
#[derive(Debug)]
pub struct UploadedImage {
    /// Form field name the image arrived under.
    pub field: String,
    /// Client-supplied filename, if any.
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// A parsed multipart form: text fields plus at most one image part.
#[derive(Debug, Default)]
pub struct FormPayload {
    pub fields: HashMap<String, String>,
    pub image: Option<UploadedImage>,
}

impl FormPayload {
    /// Take a text field, treating the empty string as absent.
    ///
    /// Browsers submit untouched optional inputs as empty strings; those must
    /// not end up stored as `""`.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name).filter(|value| !value.is_empty())
    }
}

/// Whether the request carries a multipart form.
#[must_use]
pub fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

/// Read a multipart request into a [`FormPayload`].
///
/// Only the part named `image_field` is treated as a file; every other part
/// is collected as UTF-8 text.
///
/// # Errors
///
/// Returns `ApiError::BadRequest` if the multipart stream is malformed.
pub async fn read_multipart(
    req: Request,
    image_field: &str,
) -> Result<FormPayload, ApiError> {
    let mut multipart = Multipart::from_request(req, &())
        .await
        .map_err(|e| ApiError::BadRequest(format!("Formulario inválido: {e}")))?;

    let mut payload = FormPayload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Formulario inválido: {e}")))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if name == image_field {
            let filename = field.file_name().map(ToString::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Archivo inválido: {e}")))?;
            // An empty file input still submits a part; ignore it.
            if !bytes.is_empty() {
                payload.image = Some(UploadedImage {
                    field: name,
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Formulario inválido: {e}")))?;
            payload.fields.insert(name, text);
        }
    }

    Ok(payload)
}
