//! Product record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A catalog product.
///
/// `price` and `stock` are non-negative; the API layer coerces and validates
/// form input before a record is ever constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_row() {
        // Rows predating the image upload feature have no image_url.
        let product: Product = serde_json::from_str(
            r#"{"id":1,"name":"Parche bordado","category":"Parches","price":"15.50","stock":12}"#,
        )
        .unwrap();
        assert_eq!(product.id.as_i32(), 1);
        assert_eq!(product.price, Decimal::new(1550, 2));
        assert_eq!(product.stock, 12);
        assert!(product.image_url.is_none());
    }

    #[test]
    fn test_price_accepts_json_number() {
        let product: Product = serde_json::from_str(
            r#"{"id":2,"name":"Vinilo","category":"Vinilos","price":89.9,"stock":3}"#,
        )
        .unwrap();
        assert_eq!(product.price, Decimal::new(899, 1));
    }
}
