//! Settings table operations.

use backline_core::{SettingRow, SettingsMap, map_to_rows, rows_to_map};

use super::{DataServiceClient, DataServiceError};

const TABLE: &str = "settings";

/// Fetch all settings as a flat key-to-value mapping.
pub async fn fetch_all(client: &DataServiceClient) -> Result<SettingsMap, DataServiceError> {
    let rows: Vec<SettingRow> = client.select(TABLE, &[("select", "key,value")]).await?;
    Ok(rows_to_map(rows))
}

/// Upsert the given subset of settings; existing keys are updated, other
/// keys are left untouched.
pub async fn upsert(
    client: &DataServiceClient,
    settings: &SettingsMap,
) -> Result<(), DataServiceError> {
    client.upsert(TABLE, "key", &map_to_rows(settings)).await
}
