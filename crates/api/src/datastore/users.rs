//! User table operations.
//!
//! Listing queries project the password hash away; only the login lookup
//! reads it, and the [`LoginRow`] type never leaves the backend.

use serde::{Deserialize, Serialize};

use backline_core::{Email, Role, StoreUser, UserId};

use super::{DataServiceClient, DataServiceError};

const TABLE: &str = "users";

/// Columns exposed by user listings. The password hash is never selected.
const LISTING_COLUMNS: &str = "id,name,email,role,created_at";

/// Payload for inserting a user. The password arrives here already hashed.
#[derive(Debug, Clone, Serialize)]
pub struct NewUserRow {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// The row shape used to verify a login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRow {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    pub password_hash: String,
}

/// Fetch every user, with listing columns only.
pub async fn list(client: &DataServiceClient) -> Result<Vec<StoreUser>, DataServiceError> {
    client.select(TABLE, &[("select", LISTING_COLUMNS)]).await
}

/// Look up one user by email, including the password hash.
///
/// Returns `Ok(None)` when no user has that email.
pub async fn find_by_email(
    client: &DataServiceClient,
    email: &str,
) -> Result<Option<LoginRow>, DataServiceError> {
    let result = client
        .select_one(
            TABLE,
            &[
                ("select", "id,email,name,role,password_hash"),
                ("email", &format!("eq.{email}")),
            ],
        )
        .await;

    match result {
        Ok(row) => Ok(Some(row)),
        Err(DataServiceError::RowNotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Insert a user, returning the created row (listing shape).
///
/// # Errors
///
/// Returns [`DataServiceError::UniqueViolation`] when the email is taken.
pub async fn insert(
    client: &DataServiceClient,
    user: &NewUserRow,
) -> Result<StoreUser, DataServiceError> {
    client.insert(TABLE, user).await
}
