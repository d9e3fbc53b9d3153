//! Promotion record and storefront display rule.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{DiscountType, PromotionId, PublicationStatus};

/// A shop promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: PromotionId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PublicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Promotion {
    /// Whether the storefront should display this promotion on `today`.
    ///
    /// A promotion is live while its status is `active` and its end date has
    /// not passed. The comparison is date-only: a promotion ending today is
    /// still live.
    #[must_use]
    pub fn is_live(&self, today: NaiveDate) -> bool {
        self.status == PublicationStatus::Active && self.end_date >= today
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn promo(status: PublicationStatus, end: &str) -> Promotion {
        Promotion {
            id: PromotionId::new(1),
            name: "20% en CDs".into(),
            description: None,
            discount_type: DiscountType::Percentage,
            discount_value: Decimal::new(20, 0),
            start_date: "2024-01-01".parse().unwrap(),
            end_date: end.parse().unwrap(),
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_active_and_future_end_is_live() {
        let today: NaiveDate = "2024-06-15".parse().unwrap();
        assert!(promo(PublicationStatus::Active, "2024-07-01").is_live(today));
    }

    #[test]
    fn test_active_ending_today_is_live() {
        let today: NaiveDate = "2024-06-15".parse().unwrap();
        assert!(promo(PublicationStatus::Active, "2024-06-15").is_live(today));
    }

    #[test]
    fn test_active_but_past_end_is_not_live() {
        let today: NaiveDate = "2024-06-15".parse().unwrap();
        assert!(!promo(PublicationStatus::Active, "2024-06-14").is_live(today));
    }

    #[test]
    fn test_inactive_and_expired_are_not_live() {
        let today: NaiveDate = "2024-06-15".parse().unwrap();
        assert!(!promo(PublicationStatus::Inactive, "2024-07-01").is_live(today));
        assert!(!promo(PublicationStatus::Expired, "2024-07-01").is_live(today));
    }
}
