//! Banner route handlers.

use axum::{
    Json,
    extract::{FromRequest, Request, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use backline_core::{Banner, PublicationStatus};

use crate::datastore::banners::{self, NewBanner};
use crate::error::{ApiError, Result};
use crate::routes::payload::{self, FormPayload};
use crate::state::AppState;
use crate::uploads;

/// Multipart part name the admin form uses for the banner image.
const IMAGE_FIELD: &str = "banner_image_file";

/// JSON body for banner creation.
#[derive(Debug, Default, Deserialize)]
pub struct BannerBody {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<PublicationStatus>,
}

/// List all banners, most recent first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Banner>>> {
    let banners = banners::list(state.datastore()).await?;
    Ok(Json(banners))
}

/// Create a banner from JSON or a multipart form with an image.
pub async fn create(State(state): State<AppState>, req: Request) -> Result<impl IntoResponse> {
    let body = extract_body(&state, req).await?;

    let title = body
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("El título del banner es requerido.".to_string()))?;
    let image_url = body
        .image_url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::BadRequest("La imagen del banner es requerida.".to_string()))?;
    let start_date = body
        .start_date
        .ok_or_else(|| ApiError::BadRequest("La fecha de inicio es requerida.".to_string()))?;
    let end_date = body
        .end_date
        .ok_or_else(|| ApiError::BadRequest("La fecha de fin es requerida.".to_string()))?;

    let new_banner = NewBanner {
        title,
        image_url,
        // Empty link fields must not be stored as "".
        link_url: body.link_url.filter(|l| !l.is_empty()),
        start_date,
        end_date,
        status: body.status.unwrap_or_default(),
    };

    let banner = banners::insert(state.datastore(), &new_banner).await?;
    Ok((StatusCode::CREATED, Json(banner)))
}

/// Read either body shape; a multipart image part is stored and becomes
/// `image_url`.
async fn extract_body(state: &AppState, req: Request) -> Result<BannerBody> {
    if payload::is_multipart(req.headers()) {
        let mut form = payload::read_multipart(req, IMAGE_FIELD).await?;
        let uploaded_url = match form.image.take() {
            Some(image) => {
                let config = state.config();
                Some(
                    uploads::store_image(
                        &config.upload_dir,
                        &config.public_url,
                        &image.field,
                        image.filename.as_deref(),
                        &image.bytes,
                    )
                    .await
                    .map_err(|e| {
                        ApiError::Internal(format!("No se pudo guardar la imagen: {e}"))
                    })?,
                )
            }
            None => None,
        };
        form_to_body(form, uploaded_url)
    } else {
        let Json(body) = Json::<BannerBody>::from_request(req, &())
            .await
            .map_err(|e| ApiError::BadRequest(format!("Cuerpo JSON inválido: {e}")))?;
        Ok(body)
    }
}

/// Coerce multipart text fields into the typed body.
fn form_to_body(mut form: FormPayload, uploaded_url: Option<String>) -> Result<BannerBody> {
    let parse_date = |raw: String| {
        raw.parse::<NaiveDate>()
            .map_err(|_| ApiError::BadRequest("Fecha inválida.".to_string()))
    };
    let start_date = form.take("start_date").map(parse_date).transpose()?;
    let end_date = form.take("end_date").map(parse_date).transpose()?;
    let status = form
        .take("status")
        .map(|raw| {
            raw.parse::<PublicationStatus>()
                .map_err(|_| ApiError::BadRequest("Estado inválido.".to_string()))
        })
        .transpose()?;

    Ok(BannerBody {
        title: form.take("title"),
        image_url: uploaded_url.or_else(|| form.take("image_url")),
        link_url: form.take("link_url"),
        start_date,
        end_date,
        status,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_form_to_body_parses_dates_and_status() {
        let mut form = FormPayload::default();
        form.fields.insert("title".into(), "Oferta".into());
        form.fields.insert("start_date".into(), "2024-06-01".into());
        form.fields.insert("end_date".into(), "2024-06-30".into());
        form.fields.insert("status".into(), "inactive".into());
        form.fields.insert("link_url".into(), String::new());

        let body = form_to_body(form, None).unwrap();
        assert_eq!(body.status, Some(PublicationStatus::Inactive));
        assert_eq!(body.link_url, None);
        assert_eq!(
            body.start_date,
            Some("2024-06-01".parse::<NaiveDate>().unwrap())
        );
    }

    #[test]
    fn test_form_to_body_rejects_bad_date() {
        let mut form = FormPayload::default();
        form.fields.insert("start_date".into(), "junio".into());
        assert!(form_to_body(form, None).is_err());
    }
}
