//! Authentication and user REST surface tests.

use backline_integration_tests::TestContext;
use serde_json::{Value, json};

#[tokio::test]
async fn test_login_without_fields_is_400() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({ "email": "a@b.com" }))
        .send()
        .await
        .expect("login");
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["message"], json!("Email y contraseña son requeridos."));
}

#[tokio::test]
async fn test_login_with_unknown_user_is_401() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({ "email": "a@b.com", "password": "x" }))
        .send()
        .await
        .expect("login");
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["message"], json!("Credenciales incorrectas."));
}

#[tokio::test]
async fn test_signup_then_login_succeeds() {
    let ctx = TestContext::new().await;
    ctx.create_user("Ana Quispe", "ana@example.com", "secreta123")
        .await;

    let response = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({ "email": "ana@example.com", "password": "secreta123" }))
        .send()
        .await
        .expect("login");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("login body");
    assert_eq!(body["message"], json!("Login exitoso"));
    assert!(!body["token"].as_str().expect("token").is_empty());
    assert_eq!(body["user"]["email"], json!("ana@example.com"));
    assert_eq!(body["user"]["role"], json!("cliente"));
}

#[tokio::test]
async fn test_wrong_password_is_401() {
    let ctx = TestContext::new().await;
    ctx.create_user("Ana", "ana@example.com", "secreta123").await;

    let response = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({ "email": "ana@example.com", "password": "otra" }))
        .send()
        .await
        .expect("login");
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["message"], json!("Credenciales incorrectas."));
}

#[tokio::test]
async fn test_duplicate_email_is_409_and_creates_no_row() {
    let ctx = TestContext::new().await;
    ctx.create_user("Ana", "ana@example.com", "secreta123").await;

    let response = ctx
        .client
        .post(ctx.url("/api/users"))
        .json(&json!({
            "name": "Otra Ana",
            "email": "ana@example.com",
            "password": "diferente1",
        }))
        .send()
        .await
        .expect("duplicate signup");
    assert_eq!(response.status().as_u16(), 409);

    let body: Value = response.json().await.expect("error body");
    assert_eq!(
        body["message"],
        json!("El correo electrónico ya está registrado.")
    );
    assert_eq!(ctx.table("users").len(), 1);
}

#[tokio::test]
async fn test_passwords_are_stored_hashed_and_never_listed() {
    let ctx = TestContext::new().await;
    let created = ctx
        .create_user("Ana", "ana@example.com", "secreta123")
        .await;

    // The create response exposes no credential material.
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    // The stored row carries a salted argon2 hash, not the password.
    let rows = ctx.table("users");
    let stored = rows.first().expect("stored user");
    let hash = stored["password_hash"].as_str().expect("hash");
    assert!(hash.starts_with("$argon2"));
    assert_ne!(hash, "secreta123");

    // Listings project credential material away.
    let users: Value = ctx
        .client
        .get(ctx.url("/api/users"))
        .send()
        .await
        .expect("list users")
        .json()
        .await
        .expect("users body");
    let listing = users.as_array().expect("array");
    assert_eq!(listing.len(), 1);
    assert!(listing[0].get("password").is_none());
    assert!(listing[0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_short_password_is_400() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post(ctx.url("/api/users"))
        .json(&json!({ "name": "Ana", "email": "ana@example.com", "password": "abc" }))
        .send()
        .await
        .expect("signup");
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("error body");
    assert_eq!(
        body["message"],
        json!("La contraseña debe tener al menos 6 caracteres.")
    );
}

#[tokio::test]
async fn test_empty_optional_fields_are_not_stored() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post(ctx.url("/api/users"))
        .json(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "password": "secreta123",
            "phone": "",
            "address": "",
        }))
        .send()
        .await
        .expect("signup");
    assert_eq!(response.status().as_u16(), 201);

    let rows = ctx.table("users");
    let stored = rows.first().expect("stored user");
    assert!(stored.get("phone").is_none());
    assert!(stored.get("address").is_none());
    // Role is forced server-side.
    assert_eq!(stored["role"], json!("cliente"));
}
