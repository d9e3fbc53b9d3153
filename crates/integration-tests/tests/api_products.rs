//! Product REST surface tests.

use backline_integration_tests::TestContext;
use serde_json::{Value, json};

#[tokio::test]
async fn test_created_product_reads_back_with_same_price_and_stock() {
    let ctx = TestContext::new().await;

    let created = ctx.create_product("Parche bordado", "15.50", 12).await;
    let id = created["id"].as_i64().expect("id");

    let fetched: Value = ctx
        .client
        .get(ctx.url(&format!("/api/products/{id}")))
        .send()
        .await
        .expect("get product")
        .json()
        .await
        .expect("product body");

    assert_eq!(fetched["price"], created["price"]);
    assert_eq!(fetched["stock"], json!(12));
    assert_eq!(fetched["name"], json!("Parche bordado"));
}

#[tokio::test]
async fn test_unknown_product_is_404_with_message() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .get(ctx.url("/api/products/999"))
        .send()
        .await
        .expect("get product");
    assert_eq!(response.status().as_u16(), 404);

    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["message"], json!("Producto con ID 999 no encontrado."));
}

#[tokio::test]
async fn test_deleting_missing_product_fails_and_leaves_collection_alone() {
    let ctx = TestContext::new().await;
    ctx.create_product("Polo de gira", "45.00", 60).await;

    let response = ctx
        .client
        .delete(ctx.url("/api/products/999"))
        .send()
        .await
        .expect("delete product");
    assert!(!response.status().is_success());

    let products: Value = ctx
        .client
        .get(ctx.url("/api/products"))
        .send()
        .await
        .expect("list products")
        .json()
        .await
        .expect("products body");
    assert_eq!(products.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn test_delete_echoes_removed_product() {
    let ctx = TestContext::new().await;
    let created = ctx.create_product("Llavero púa", "8.00", 5).await;
    let id = created["id"].as_i64().expect("id");

    let response = ctx
        .client
        .delete(ctx.url(&format!("/api/products/{id}")))
        .send()
        .await
        .expect("delete product");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("delete body");
    assert_eq!(
        body["message"],
        json!(format!("Producto con ID {id} eliminado correctamente."))
    );
    assert_eq!(body["deletedProduct"]["name"], json!("Llavero púa"));

    let products: Value = ctx
        .client
        .get(ctx.url("/api/products"))
        .send()
        .await
        .expect("list products")
        .json()
        .await
        .expect("products body");
    assert!(products.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn test_update_changes_only_submitted_fields() {
    let ctx = TestContext::new().await;
    let created = ctx.create_product("Vinilo 180g", "89.90", 8).await;
    let id = created["id"].as_i64().expect("id");

    let response = ctx
        .client
        .put(ctx.url(&format!("/api/products/{id}")))
        .json(&json!({ "stock": 3 }))
        .send()
        .await
        .expect("update product");
    assert_eq!(response.status().as_u16(), 200);

    let updated: Value = response.json().await.expect("updated body");
    assert_eq!(updated["stock"], json!(3));
    assert_eq!(updated["name"], json!("Vinilo 180g"));
    assert_eq!(updated["price"], created["price"]);
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post(ctx.url("/api/products"))
        .json(&json!({
            "name": "Parche",
            "category": "Parches",
            "price": "-1.00",
            "stock": 1,
        }))
        .send()
        .await
        .expect("create product");
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_multipart_create_stores_image_and_absolute_url() {
    let ctx = TestContext::new().await;

    let image = reqwest::multipart::Part::bytes(b"fake-png-bytes".to_vec())
        .file_name("cover.png")
        .mime_str("image/png")
        .expect("image part");
    let form = reqwest::multipart::Form::new()
        .text("name", "CD en vivo")
        .text("category", "CDs")
        .text("price", "35.00")
        .text("stock", "25")
        .text("description", "")
        .part("image_file", image);

    let response = ctx
        .client
        .post(ctx.url("/api/products"))
        .multipart(form)
        .send()
        .await
        .expect("multipart create");
    assert_eq!(response.status().as_u16(), 201);

    let created: Value = response.json().await.expect("created body");
    let image_url = created["image_url"].as_str().expect("image_url");
    assert!(image_url.starts_with(&format!("{}/uploads/", ctx.api_url)));
    // Empty description fields must not be stored as "".
    assert!(created.get("description").is_none() || created["description"].is_null());

    // The stored image is served back from the public uploads path.
    let served = ctx
        .client
        .get(image_url)
        .send()
        .await
        .expect("fetch upload");
    assert_eq!(served.status().as_u16(), 200);
    let bytes = served.bytes().await.expect("upload bytes");
    assert_eq!(&bytes[..], b"fake-png-bytes");
}
