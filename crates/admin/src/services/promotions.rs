//! Promotion resource service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use backline_core::{DiscountType, Promotion, PublicationStatus};

use crate::client::{ApiClient, ApiClientError};
use crate::view::FormData;

use super::INCOMPLETE_FORM;

/// A promotion as entered in the admin form.
#[derive(Debug, Clone, Serialize)]
pub struct PromotionDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PublicationStatus,
}

impl PromotionDraft {
    /// Build a draft from serialized form fields, coercing the discount
    /// value and dates.
    ///
    /// # Errors
    ///
    /// Returns the user-facing validation message when a required field is
    /// missing or does not parse.
    pub fn from_form(form: &FormData) -> Result<Self, String> {
        let name = form.get("name").ok_or(INCOMPLETE_FORM)?.to_string();
        let discount_type = form
            .get("discount_type")
            .and_then(|raw| raw.parse::<DiscountType>().ok())
            .ok_or(INCOMPLETE_FORM)?;
        let discount_value = form
            .get("discount_value")
            .and_then(|raw| raw.parse::<Decimal>().ok())
            .ok_or(INCOMPLETE_FORM)?;
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
            name,
            description: form.get("description").map(ToString::to_string),
            discount_type,
            discount_value,
            start_date,
            end_date,
            status,
        })
    }
}

/// `GET /promotions`
pub async fn get_all(api: &ApiClient) -> Result<Vec<Promotion>, ApiClientError> {
    api.get_json("/promotions").await
}

/// `POST /promotions`
pub async fn create(
    api: &ApiClient,
    draft: &PromotionDraft,
) -> Result<Promotion, ApiClientError> {
    api.post_json("/promotions", draft).await
}
