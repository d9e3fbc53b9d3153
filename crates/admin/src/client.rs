//! The resource client.
//!
//! Wraps HTTP with the API base URL, default JSON headers, the session's
//! bearer token, and uniform error surfacing: any non-2xx response becomes
//! an error carrying the server-supplied `message` field, falling back to a
//! generic message when the body has none.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::session::SessionStore;

/// Fallback when an error response carries no `message` field.
const GENERIC_ERROR: &str = "Error en la petición";

/// Errors surfaced by the resource client.
///
/// The `Display` output is user-facing: views show it inline or in a
/// notification, so it carries the server's message verbatim.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Non-2xx response from the API.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Transport failure (server unreachable, connection dropped, ...).
    #[error("{GENERIC_ERROR}")]
    Http(#[from] reqwest::Error),

    /// 2xx response whose body did not match the expected shape.
    #[error("{GENERIC_ERROR}")]
    Decode(#[from] serde_json::Error),
}

/// Shape of the API's error body.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the Backline REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

#[derive(Debug)]
struct ApiClientInner {
    http: reqwest::Client,
    /// Base URL including the `/api` prefix, without a trailing slash.
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new resource client.
    #[must_use]
    pub fn new(base_url: &Url, session: SessionStore) -> Self {
        let base_url = base_url.as_str().trim_end_matches('/').to_string();

        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url,
                session,
            }),
        }
    }

    /// The session this client authenticates with.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        self.execute(self.inner.http.get(self.url(path))).await
    }

    /// POST a JSON body.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiClientError> {
        self.execute(self.inner.http.post(self.url(path)).json(body))
            .await
    }

    /// PUT a JSON body.
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiClientError> {
        self.execute(self.inner.http.put(self.url(path)).json(body))
            .await
    }

    /// DELETE a resource.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        self.execute(self.inner.http.delete(self.url(path))).await
    }

    /// POST a multipart form.
    ///
    /// No content type is set by hand: the transport picks its own boundary.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiClientError> {
        self.execute(self.inner.http.post(self.url(path)).multipart(form))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Attach default headers and the bearer token, send, and surface errors
    /// uniformly.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiClientError> {
        let mut req = req.header(reqwest::header::ACCEPT, "application/json");

        if let Some(token) = self.inner.session.token() {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| GENERIC_ERROR.to_string());
            tracing::debug!(status = %status, message = %message, "API request failed");
            return Err(ApiClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_loses_trailing_slash() {
        let client = ApiClient::new(
            &Url::parse("http://localhost:3000/api/").unwrap(),
            SessionStore::new(),
        );
        assert_eq!(client.url("/products"), "http://localhost:3000/api/products");
    }

    #[test]
    fn test_server_error_displays_message() {
        let err = ApiClientError::Server {
            status: 401,
            message: "Credenciales incorrectas.".into(),
        };
        assert_eq!(err.to_string(), "Credenciales incorrectas.");
    }

    #[test]
    fn test_decode_error_displays_generic_message() {
        let err = ApiClientError::Decode(serde_json::from_str::<i32>("x").unwrap_err());
        assert_eq!(err.to_string(), GENERIC_ERROR);
    }
}
