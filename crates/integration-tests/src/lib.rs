//! Integration tests for Backline.
//!
//! # Harness
//!
//! [`TestContext`] boots two in-process servers on ephemeral ports:
//!
//! 1. the [`stub`] data service - an in-memory stand-in for the hosted
//!    relational data service, speaking the dialect subset the backend's
//!    datastore client uses;
//! 2. the real `backline-api` router, configured against the stub.
//!
//! Tests then talk to the API over real HTTP with `reqwest`, or drive the
//! whole stack through the `backline-admin` SPA engine.
//!
//! # Running
//!
//! ```bash
//! cargo test -p backline-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod stub;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use secrecy::SecretString;
use serde_json::{Value, json};
use url::Url;

use backline_admin::{AdminApp, ApiClient, SessionStore};
use backline_api::config::{ApiConfig, DataServiceConfig};
use backline_api::state::AppState;

use stub::SharedDb;

/// A running API + stub data service pair.
pub struct TestContext {
    pub client: reqwest::Client,
    pub api_url: String,
    stub_db: SharedDb,
    upload_dir: PathBuf,
}

impl TestContext {
    /// Boot a fresh stub data service and API server.
    ///
    /// # Panics
    ///
    /// Panics if either server fails to bind; tests cannot proceed without
    /// them.
    pub async fn new() -> Self {
        let (stub_router, stub_db) = stub::stub_service();
        let stub_addr = serve(stub_router).await;

        let upload_dir =
            std::env::temp_dir().join(format!("backline-tests-{}", uuid::Uuid::new_v4()));

        // Bind the API listener first so the public URL in the config can
        // carry the real port (upload URLs are composed from it).
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind API listener");
        let api_addr = listener.local_addr().expect("API listener address");

        let config = ApiConfig {
            host: api_addr.ip(),
            port: api_addr.port(),
            public_url: Url::parse(&format!("http://{api_addr}/")).expect("public URL"),
            upload_dir: upload_dir.clone(),
            data_service: DataServiceConfig {
                url: Url::parse(&format!("http://{stub_addr}/")).expect("stub URL"),
                service_key: SecretString::from("test-service-key"),
            },
            sentry_dsn: None,
        };

        let app = backline_api::app(AppState::new(config));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("API server error");
        });

        Self {
            client: reqwest::Client::new(),
            api_url: format!("http://{api_addr}"),
            stub_db,
            upload_dir,
        }
    }

    /// Full URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// Build an admin SPA engine wired to this API.
    ///
    /// # Panics
    ///
    /// Panics if the API base URL does not parse (cannot happen for a bound
    /// address).
    #[must_use]
    pub fn admin_app(&self) -> AdminApp {
        let base = Url::parse(&format!("{}/api", self.api_url)).expect("API base URL");
        AdminApp::new(ApiClient::new(&base, SessionStore::new()))
    }

    /// Seed a row directly into the stub data service (for read-only tables
    /// like `orders` that have no create endpoint).
    ///
    /// # Panics
    ///
    /// Panics if the stub database lock is poisoned.
    pub fn seed_row(&self, table: &str, row: Value) -> Value {
        self.stub_db
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert_row(table, row)
    }

    /// Snapshot a stub table.
    ///
    /// # Panics
    ///
    /// Panics if the stub database lock is poisoned.
    #[must_use]
    pub fn table(&self, table: &str) -> Vec<Value> {
        self.stub_db
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .rows(table)
    }

    /// The directory this context stores uploads in.
    #[must_use]
    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }

    /// Create a product through the API; returns the created row.
    ///
    /// # Panics
    ///
    /// Panics on transport errors or a non-201 response.
    pub async fn create_product(&self, name: &str, price: &str, stock: i32) -> Value {
        let response = self
            .client
            .post(self.url("/api/products"))
            .json(&json!({
                "name": name,
                "category": "Merch",
                "price": price,
                "stock": stock,
            }))
            .send()
            .await
            .expect("create product request");
        assert_eq!(response.status().as_u16(), 201, "create product status");
        response.json().await.expect("create product body")
    }

    /// Create a user through the API; returns the created row.
    ///
    /// # Panics
    ///
    /// Panics on transport errors or a non-201 response.
    pub async fn create_user(&self, name: &str, email: &str, password: &str) -> Value {
        let response = self
            .client
            .post(self.url("/api/users"))
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("create user request");
        assert_eq!(response.status().as_u16(), 201, "create user status");
        response.json().await.expect("create user body")
    }
}

/// Serve a router on an ephemeral port and return its address.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server error");
    });
    addr
}
