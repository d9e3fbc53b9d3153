//! Settings resource service.

use serde::Deserialize;

use backline_core::SettingsMap;

use crate::client::{ApiClient, ApiClientError};

/// Response from `PUT /settings`.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsSaved {
    pub message: String,
    pub data: SettingsMap,
}

/// `GET /settings`
pub async fn get_all(api: &ApiClient) -> Result<SettingsMap, ApiClientError> {
    api.get_json("/settings").await
}

/// `PUT /settings` - bulk upsert of the submitted subset.
pub async fn update(
    api: &ApiClient,
    settings: &SettingsMap,
) -> Result<SettingsSaved, ApiClientError> {
    api.put_json("/settings", settings).await
}
