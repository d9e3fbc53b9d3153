//! Banner table operations.

use chrono::NaiveDate;
use serde::Serialize;

use backline_core::{Banner, PublicationStatus};

use super::{DataServiceClient, DataServiceError};

const TABLE: &str = "banners";

/// Payload for inserting a banner.
///
/// An absent `link_url` is skipped entirely so the service stores NULL.
#[derive(Debug, Clone, Serialize)]
pub struct NewBanner {
    pub title: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PublicationStatus,
}

/// Fetch every banner, most recent first.
pub async fn list(client: &DataServiceClient) -> Result<Vec<Banner>, DataServiceError> {
    client
        .select(TABLE, &[("select", "*"), ("order", "created_at.desc")])
        .await
}

/// Insert a banner, returning the created row.
pub async fn insert(
    client: &DataServiceClient,
    banner: &NewBanner,
) -> Result<Banner, DataServiceError> {
    client.insert(TABLE, banner).await
}
