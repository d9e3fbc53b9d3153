//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use backline_core::UserSummary;

use crate::auth;
use crate::datastore::users;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

/// Verify credentials and issue an opaque session token.
///
/// Unknown email and wrong password are indistinguishable: both answer 401
/// with the same message.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (
        body.email.filter(|e| !e.is_empty()),
        body.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::BadRequest(
            "Email y contraseña son requeridos.".to_string(),
        ));
    };

    let row = users::find_by_email(state.datastore(), &email)
        .await?
        .ok_or_else(invalid_credentials)?;

    // A wrong password and an unparseable stored hash both read as a bad
    // login; neither detail belongs in the response.
    auth::verify_password(&password, &row.password_hash).map_err(|_| invalid_credentials())?;

    tracing::info!(user_id = %row.id, "Login exitoso");

    Ok(Json(LoginResponse {
        message: "Login exitoso".to_string(),
        token: auth::generate_token(),
        user: UserSummary {
            id: row.id,
            email: row.email,
            name: row.name,
            role: row.role,
        },
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Credenciales incorrectas.".to_string())
}
