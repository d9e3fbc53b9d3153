//! Banner resource service.

use chrono::NaiveDate;
use serde::Serialize;

use backline_core::{Banner, PublicationStatus};

use crate::client::{ApiClient, ApiClientError};
use crate::view::{FormData, FormFile};

use super::INCOMPLETE_FORM;

/// A banner as entered in the admin form.
#[derive(Debug, Clone, Serialize)]
pub struct BannerDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PublicationStatus,
}

impl BannerDraft {
    /// Build a draft from serialized form fields.
    ///
    /// # Errors
    ///
    /// Returns the user-facing validation message when a required field is
    /// missing or a date does not parse.
    pub fn from_form(form: &FormData) -> Result<Self, String> {
        let title = form.get("title").ok_or(INCOMPLETE_FORM)?.to_string();
        let start_date = form
            .get("start_date")
            .and_then(|raw| raw.parse::<NaiveDate>().ok())
            .ok_or(INCOMPLETE_FORM)?;
        let end_date = form
            .get("end_date")
            .and_then(|raw| raw.parse::<NaiveDate>().ok())
            .ok_or(INCOMPLETE_FORM)?;
        let status = form
            .get("status")
            .and_then(|raw| raw.parse::<PublicationStatus>().ok())
            .unwrap_or_default();

        Ok(Self {
            title,
            image_url: form.get("image_url").map(ToString::to_string),
            // Untouched link inputs submit as ""; never store that.
            link_url: form.get("link_url").map(ToString::to_string),
            start_date,
            end_date,
            status,
        })
    }
}

/// `GET /banners`
pub async fn get_all(api: &ApiClient) -> Result<Vec<Banner>, ApiClientError> {
    api.get_json("/banners").await
}

/// `POST /banners` - multipart when an image rides along, JSON otherwise.
pub async fn create(
    api: &ApiClient,
    draft: &BannerDraft,
    image: Option<&FormFile>,
) -> Result<Banner, ApiClientError> {
    match image {
        Some(file) => {
            api.post_multipart("/banners", multipart_form(draft, file))
                .await
        }
        None => api.post_json("/banners", draft).await,
    }
}

/// Serialize the draft as multipart text fields plus the image part.
fn multipart_form(draft: &BannerDraft, file: &FormFile) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new()
        .text("title", draft.title.clone())
        .text("start_date", draft.start_date.to_string())
        .text("end_date", draft.end_date.to_string())
        .text("status", draft.status.to_string());

    if let Some(link_url) = &draft.link_url {
        form = form.text("link_url", link_url.clone());
    }
    if let Some(image_url) = &draft.image_url {
        form = form.text("image_url", image_url.clone());
    }

    let part = reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
    form.part(file.field.clone(), part)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_strips_empty_link() {
        let mut form = FormData::default();
        form.set("title", "Stock nuevo")
            .set("link_url", "")
            .set("start_date", "2024-06-01")
            .set("end_date", "2024-06-30")
            .set("status", "active");

        let draft = BannerDraft::from_form(&form).unwrap();
        assert!(draft.link_url.is_none());

        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("link_url"));
    }

    #[test]
    fn test_from_form_requires_title() {
        let mut form = FormData::default();
        form.set("start_date", "2024-06-01")
            .set("end_date", "2024-06-30");
        assert!(BannerDraft::from_form(&form).is_err());
    }
}
