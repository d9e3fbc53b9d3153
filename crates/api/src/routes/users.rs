//! User (client) route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use backline_core::{Email, Role, StoreUser};

use crate::auth;
use crate::datastore::users::{self, NewUserRow};
use crate::datastore::DataServiceError;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request body for creating a user (public signup or admin form).
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// List all users. Password hashes never appear in the projection.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StoreUser>>> {
    let users = users::list(state.datastore()).await?;
    Ok(Json(users))
}

/// Create a user with the default `cliente` role.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<impl IntoResponse> {
    let name = body
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::BadRequest("El nombre es requerido.".to_string()))?;
    let email = body
        .email
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("El correo electrónico es requerido.".to_string()))?;
    let email = Email::parse(email)
        .map_err(|_| ApiError::BadRequest("Correo electrónico inválido.".to_string()))?;
    let password = body
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("La contraseña es requerida.".to_string()))?;

    let password_hash = auth::hash_password(&password).map_err(|e| match e {
        auth::AuthError::WeakPassword => ApiError::BadRequest(
            "La contraseña debe tener al menos 6 caracteres.".to_string(),
        ),
        _ => ApiError::Internal("No se pudo crear el usuario.".to_string()),
    })?;

    let row = NewUserRow {
        name,
        email: email.into_inner(),
        password_hash,
        // New signups are always clients; admins are promoted via the CLI.
        role: Role::Cliente,
        phone: body.phone.filter(|p| !p.is_empty()),
        address: body.address.filter(|a| !a.is_empty()),
    };

    let user = users::insert(state.datastore(), &row)
        .await
        .map_err(|e| match e {
            DataServiceError::UniqueViolation(_) => {
                ApiError::Conflict("El correo electrónico ya está registrado.".to_string())
            }
            other => ApiError::DataService(other),
        })?;

    Ok((StatusCode::CREATED, Json(user)))
}
