//! Create shop users with hashed passwords.

use tracing::info;

use backline_api::auth::hash_password;
use backline_api::datastore::{DataServiceClient, users::NewUserRow};
use backline_core::{Email, Role, StoreUser};

/// Create a user through the data service.
///
/// # Errors
///
/// Returns an error for an invalid email/role, a weak password, or a failed
/// insert (including a duplicate email).
pub async fn create(
    email: &str,
    name: &str,
    password: &str,
    role: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email)?;
    let role: Role = role.parse()?;
    let password_hash = hash_password(password)?;

    let config = super::data_service_from_env()?;
    let client = DataServiceClient::new(&config);

    let row = NewUserRow {
        name: name.to_string(),
        email: email.into_inner(),
        password_hash,
        role,
        phone: None,
        address: None,
    };

    let created: StoreUser = backline_api::datastore::users::insert(&client, &row).await?;
    info!(id = %created.id, email = %created.email, role = %created.role, "Usuario creado");

    Ok(())
}
