//! Product table operations.

use rust_decimal::Decimal;
use serde::Serialize;

use backline_core::{Product, ProductId};

use super::{DataServiceClient, DataServiceError};

const TABLE: &str = "products";

/// Payload for inserting a product.
///
/// Empty optional fields are skipped so the service stores NULL instead of
/// empty strings.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Partial payload for updating a product; only present fields change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Fetch every product.
pub async fn list(client: &DataServiceClient) -> Result<Vec<Product>, DataServiceError> {
    client.select(TABLE, &[("select", "*")]).await
}

/// Fetch one product by id.
pub async fn fetch(
    client: &DataServiceClient,
    id: ProductId,
) -> Result<Product, DataServiceError> {
    client
        .select_one(TABLE, &[("select", "*"), ("id", &format!("eq.{id}"))])
        .await
}

/// Insert a product, returning the created row.
pub async fn insert(
    client: &DataServiceClient,
    product: &NewProduct,
) -> Result<Product, DataServiceError> {
    client.insert(TABLE, product).await
}

/// Update a product by id, returning the updated row.
pub async fn update(
    client: &DataServiceClient,
    id: ProductId,
    patch: &ProductPatch,
) -> Result<Product, DataServiceError> {
    client
        .update(TABLE, &[("id", &format!("eq.{id}"))], patch)
        .await
}

/// Delete a product by id, returning the deleted row.
pub async fn delete(
    client: &DataServiceClient,
    id: ProductId,
) -> Result<Product, DataServiceError> {
    client.delete(TABLE, &[("id", &format!("eq.{id}"))]).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = ProductPatch {
            stock: Some(4),
            ..ProductPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"stock":4}"#);
    }

    #[test]
    fn test_new_product_skips_empty_optionals() {
        let product = NewProduct {
            name: "Parche bordado".into(),
            category: "Parches".into(),
            price: Decimal::new(1550, 2),
            stock: 10,
            description: None,
            image_url: None,
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(!json.contains("description"));
        assert!(!json.contains("image_url"));
    }
}
