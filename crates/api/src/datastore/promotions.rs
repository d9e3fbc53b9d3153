//! Promotion table operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use backline_core::{DiscountType, Promotion, PublicationStatus};

use super::{DataServiceClient, DataServiceError};

const TABLE: &str = "promotions";

/// Payload for inserting a promotion.
#[derive(Debug, Clone, Serialize)]
pub struct NewPromotion {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PublicationStatus,
}

/// Fetch every promotion, most recent first.
pub async fn list(client: &DataServiceClient) -> Result<Vec<Promotion>, DataServiceError> {
    client
        .select(TABLE, &[("select", "*"), ("order", "created_at.desc")])
        .await
}

/// Insert a promotion, returning the created row.
pub async fn insert(
    client: &DataServiceClient,
    promotion: &NewPromotion,
) -> Result<Promotion, DataServiceError> {
    client.insert(TABLE, promotion).await
}
