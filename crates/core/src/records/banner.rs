//! Banner record and storefront display rule.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{BannerId, PublicationStatus};

/// A storefront marquee banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub title: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PublicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Banner {
    /// Whether the storefront marquee should display this banner on `today`.
    ///
    /// Same rule as promotions: `active` status and an end date of today or
    /// later.
    #[must_use]
    pub fn is_live(&self, today: NaiveDate) -> bool {
        self.status == PublicationStatus::Active && self.end_date >= today
    }
}
