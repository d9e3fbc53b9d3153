//! User (client) resource service.

use serde::Serialize;

use backline_core::StoreUser;

use crate::client::{ApiClient, ApiClientError};
use crate::view::FormData;

use super::INCOMPLETE_FORM;

/// A client as entered in the admin form or the public signup.
#[derive(Debug, Clone, Serialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UserDraft {
    /// Build a draft from serialized form fields.
    ///
    /// # Errors
    ///
    /// Returns the user-facing validation message when a required field is
    /// missing.
    pub fn from_form(form: &FormData) -> Result<Self, String> {
        Ok(Self {
            name: form.get("name").ok_or(INCOMPLETE_FORM)?.to_string(),
            email: form.get("email").ok_or(INCOMPLETE_FORM)?.to_string(),
            password: form.get("password").ok_or(INCOMPLETE_FORM)?.to_string(),
            phone: form.get("phone").map(ToString::to_string),
            address: form.get("address").map(ToString::to_string),
        })
    }
}

/// `GET /users`
pub async fn get_all(api: &ApiClient) -> Result<Vec<StoreUser>, ApiClientError> {
    api.get_json("/users").await
}

/// `POST /users`
pub async fn create(api: &ApiClient, draft: &UserDraft) -> Result<StoreUser, ApiClientError> {
    api.post_json("/users", draft).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_strips_empty_optionals() {
        let mut form = FormData::default();
        form.set("name", "Ana Quispe")
            .set("email", "ana@example.com")
            .set("password", "secreta")
            .set("phone", "")
            .set("address", "");

        let draft = UserDraft::from_form(&form).unwrap();
        assert!(draft.phone.is_none());
        assert!(draft.address.is_none());

        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("phone"));
        assert!(!json.contains("address"));
    }

    #[test]
    fn test_from_form_requires_password() {
        let mut form = FormData::default();
        form.set("name", "Ana").set("email", "ana@example.com");
        assert!(UserDraft::from_form(&form).is_err());
    }
}
