//! Low-level client for the hosted data service's REST dialect.
//!
//! The service exposes each table under `rest/v1/<table>` with filters as
//! query parameters (`id=eq.3`), `Prefer` headers controlling mutation
//! responses, and a JSON error body `{code, message, details, hint}`.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::DataServiceConfig;

use super::DataServiceError;

/// `Accept` value asking the service for exactly one object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Error code the service uses for unique-constraint violations.
const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Error code the service uses when a single-object request matches no rows.
const NO_ROWS_CODE: &str = "PGRST116";

/// Shape of the service's JSON error body.
#[derive(Debug, serde::Deserialize)]
struct ServiceErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the hosted data service.
///
/// Cheaply cloneable; the HTTP connection pool and credentials live behind an
/// `Arc`.
#[derive(Clone)]
pub struct DataServiceClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    rest_root: Url,
    service_key: String,
}

impl DataServiceClient {
    /// Create a new data service client.
    ///
    /// # Panics
    ///
    /// Panics if the configured base URL cannot be extended with the REST
    /// root path, which only happens for non-hierarchical URLs rejected at
    /// config load time.
    #[must_use]
    #[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
    pub fn new(config: &DataServiceConfig) -> Self {
        let mut rest_root = config.url.clone();
        rest_root
            .path_segments_mut()
            .unwrap()
            .pop_if_empty()
            .extend(["rest", "v1", ""]);

        Self {
            inner: Arc::new(ClientInner {
                http: reqwest::Client::new(),
                rest_root,
                service_key: config.service_key.expose_secret().to_string(),
            }),
        }
    }

    fn table_url(&self, table: &str) -> Result<Url, DataServiceError> {
        self.inner.rest_root.join(table).map_err(|e| {
            DataServiceError::Service {
                status: 0,
                message: format!("invalid table name {table}: {e}"),
            }
        })
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.inner.service_key)
            .bearer_auth(&self.inner.service_key)
    }

    /// Select rows from a table.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, DataServiceError> {
        let req = self
            .authed(self.inner.http.get(self.table_url(table)?))
            .query(query);
        self.execute(req).await
    }

    /// Select exactly one row from a table.
    ///
    /// # Errors
    ///
    /// Returns [`DataServiceError::RowNotFound`] when nothing matches.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DataServiceError> {
        let req = self
            .authed(self.inner.http.get(self.table_url(table)?))
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .query(query);
        self.execute(req).await
    }

    /// Insert one row, returning the created representation.
    pub async fn insert<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, DataServiceError> {
        let req = self
            .authed(self.inner.http.post(self.table_url(table)?))
            .header("Prefer", "return=representation")
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .json(body);
        self.execute(req).await
    }

    /// Update the rows matched by `query`, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`DataServiceError::RowNotFound`] when nothing matches.
    pub async fn update<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        table: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<T, DataServiceError> {
        let req = self
            .authed(self.inner.http.patch(self.table_url(table)?))
            .header("Prefer", "return=representation")
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .query(query)
            .json(body);
        self.execute(req).await
    }

    /// Delete the rows matched by `query`, returning the deleted row.
    ///
    /// # Errors
    ///
    /// Returns [`DataServiceError::RowNotFound`] when nothing matches.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DataServiceError> {
        let req = self
            .authed(self.inner.http.delete(self.table_url(table)?))
            .header("Prefer", "return=representation")
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .query(query);
        self.execute(req).await
    }

    /// Upsert rows, merging on the `on_conflict` column.
    pub async fn upsert<B: Serialize + ?Sized>(
        &self,
        table: &str,
        on_conflict: &str,
        rows: &B,
    ) -> Result<(), DataServiceError> {
        let req = self
            .authed(self.inner.http.post(self.table_url(table)?))
            .header("Prefer", "resolution=merge-duplicates")
            .query(&[("on_conflict", on_conflict)])
            .json(rows);

        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(error_from_response(status, &response.text().await?))
    }

    /// Send a request and decode a successful JSON body.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, DataServiceError> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Unexpected data service response shape"
            );
            DataServiceError::Decode(e)
        })
    }
}

/// Map a non-success response to the error taxonomy.
fn error_from_response(status: reqwest::StatusCode, body: &str) -> DataServiceError {
    let parsed: Option<ServiceErrorBody> = serde_json::from_str(body).ok();
    let code = parsed.as_ref().and_then(|b| b.code.as_deref());
    let message = parsed
        .as_ref()
        .and_then(|b| b.message.clone())
        .unwrap_or_else(|| body.chars().take(200).collect());

    match code {
        Some(UNIQUE_VIOLATION_CODE) => DataServiceError::UniqueViolation(message),
        Some(NO_ROWS_CODE) => DataServiceError::RowNotFound,
        _ if status == reqwest::StatusCode::NOT_ACCEPTABLE => DataServiceError::RowNotFound,
        _ => {
            tracing::error!(
                status = %status,
                message = %message,
                "Data service returned an error"
            );
            DataServiceError::Service {
                status: status.as_u16(),
                message,
            }
        }
    }
}
