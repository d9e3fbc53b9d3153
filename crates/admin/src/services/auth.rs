//! Authentication service.

use serde::Deserialize;
use serde_json::json;

use backline_core::UserSummary;

use crate::client::{ApiClient, ApiClientError};

/// Response from `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

/// Log in and store the token + user into the session.
///
/// # Errors
///
/// `ApiClientError::Server` with the server's message (401 "Credenciales
/// incorrectas." on bad credentials).
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiClientError> {
    let response: LoginResponse = api
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": password }),
        )
        .await?;

    api.session()
        .store_login(response.token.clone(), response.user.clone());

    Ok(response)
}

/// Clear the session.
pub fn logout(api: &ApiClient) {
    api.session().clear();
}

/// The logged-in user, if any.
#[must_use]
pub fn current_user(api: &ApiClient) -> Option<UserSummary> {
    api.session().user()
}

/// Whether a token is present.
#[must_use]
pub fn is_authenticated(api: &ApiClient) -> bool {
    api.session().is_authenticated()
}
