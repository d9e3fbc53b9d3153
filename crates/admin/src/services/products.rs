//! Product resource service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backline_core::{Product, ProductId};

use crate::client::{ApiClient, ApiClientError};
use crate::view::{FormData, FormFile};

use super::INCOMPLETE_FORM;

/// A product as entered in the admin form.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Build a draft from serialized form fields, coercing the numeric
    /// strings.
    ///
    /// # Errors
    ///
    /// Returns the user-facing validation message when a required field is
    /// missing or a number does not parse.
    pub fn from_form(form: &FormData) -> Result<Self, String> {
        let name = form.get("name").ok_or(INCOMPLETE_FORM)?.to_string();
        let category = form.get("category").ok_or(INCOMPLETE_FORM)?.to_string();
        let price = form
            .get("price")
            .and_then(|raw| raw.parse::<Decimal>().ok())
            .ok_or(INCOMPLETE_FORM)?;
        let stock = form
            .get("stock")
            .and_then(|raw| raw.parse::<i32>().ok())
            .ok_or(INCOMPLETE_FORM)?;

        Ok(Self {
            name,
            category,
            price,
            stock,
            description: form.get("description").map(ToString::to_string),
            image_url: form.get("image_url").map(ToString::to_string),
        })
    }
}

/// Response from `DELETE /products/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(rename = "deletedProduct")]
    pub deleted_product: Product,
}

/// `GET /products`
pub async fn get_all(api: &ApiClient) -> Result<Vec<Product>, ApiClientError> {
    api.get_json("/products").await
}

/// `GET /products/{id}`
pub async fn get_by_id(api: &ApiClient, id: ProductId) -> Result<Product, ApiClientError> {
    api.get_json(&format!("/products/{id}")).await
}

/// `POST /products` - multipart when an image rides along, JSON otherwise.
pub async fn create(
    api: &ApiClient,
    draft: &ProductDraft,
    image: Option<&FormFile>,
) -> Result<Product, ApiClientError> {
    match image {
        Some(file) => {
            api.post_multipart("/products", multipart_form(draft, file))
                .await
        }
        None => api.post_json("/products", draft).await,
    }
}

/// `PUT /products/{id}`
pub async fn update(
    api: &ApiClient,
    id: ProductId,
    draft: &ProductDraft,
) -> Result<Product, ApiClientError> {
    api.put_json(&format!("/products/{id}"), draft).await
}

/// `DELETE /products/{id}`
pub async fn remove(api: &ApiClient, id: ProductId) -> Result<DeleteResponse, ApiClientError> {
    api.delete_json(&format!("/products/{id}")).await
}

/// Serialize the draft as multipart text fields plus the image part.
fn multipart_form(draft: &ProductDraft, file: &FormFile) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new()
        .text("name", draft.name.clone())
        .text("category", draft.category.clone())
        .text("price", draft.price.to_string())
        .text("stock", draft.stock.to_string());

    if let Some(description) = &draft.description {
        form = form.text("description", description.clone());
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
    fn test_from_form_coerces_numbers() {
        let mut form = FormData::default();
        form.set("name", "Parche bordado")
            .set("category", "Parches")
            .set("price", "15.50")
            .set("stock", "12")
            .set("description", "");

        let draft = ProductDraft::from_form(&form).unwrap();
        assert_eq!(draft.price, Decimal::new(1550, 2));
        assert_eq!(draft.stock, 12);
        assert!(draft.description.is_none());
    }

    #[test]
    fn test_from_form_missing_required_field() {
        let mut form = FormData::default();
        form.set("name", "Parche").set("price", "10");
        assert_eq!(
            ProductDraft::from_form(&form).unwrap_err(),
            INCOMPLETE_FORM
        );
    }

    #[test]
    fn test_from_form_rejects_unparseable_price() {
        let mut form = FormData::default();
        form.set("name", "Parche")
            .set("category", "Parches")
            .set("price", "quince")
            .set("stock", "1");
        assert!(ProductDraft::from_form(&form).is_err());
    }
}
