//! HTTP route handlers for the REST backend.
//!
//! # Route Structure
//!
//! ```text
//! GET    /api/products          - Product listing
//! GET    /api/products/{id}     - Product detail
//! POST   /api/products          - Create product (JSON or multipart with image_file)
//! PUT    /api/products/{id}     - Update product (JSON or multipart with image_file)
//! DELETE /api/products/{id}     - Delete product
//!
//! POST   /api/auth/login        - Login, returns token + user
//!
//! GET    /api/users             - User listing (password hash never exposed)
//! POST   /api/users             - Create user (public signup / admin form)
//!
//! GET    /api/promotions        - Promotion listing
//! POST   /api/promotions        - Create promotion
//!
//! GET    /api/banners           - Banner listing
//! POST   /api/banners           - Create banner (JSON or multipart with banner_image_file)
//!
//! GET    /api/orders            - Order listing (joined with user name/email)
//!
//! GET    /api/settings          - Flat key/value settings map
//! PUT    /api/settings          - Bulk upsert settings
//! ```

pub mod auth;
pub mod banners;
pub mod orders;
pub mod payload;
pub mod products;
pub mod promotions;
pub mod settings;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the `/api` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/auth/login", post(auth::login))
        .route("/users", get(users::list).post(users::create))
        .route(
            "/promotions",
            get(promotions::list).post(promotions::create),
        )
        .route("/banners", get(banners::list).post(banners::create))
        .route("/orders", get(orders::list))
        .route("/settings", get(settings::show).put(settings::update))
}
