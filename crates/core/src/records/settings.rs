//! Shop settings.
//!
//! Settings live in a key/value table on the data service and are exposed to
//! clients as one flat mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The flat key-to-value mapping exposed by `GET /api/settings`.
pub type SettingsMap = BTreeMap<String, String>;

/// A single settings row, as stored by the data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
}

/// Collapse settings rows into the flat mapping.
#[must_use]
pub fn rows_to_map(rows: Vec<SettingRow>) -> SettingsMap {
    rows.into_iter().map(|row| (row.key, row.value)).collect()
}

/// Expand a flat mapping into upsertable rows.
#[must_use]
pub fn map_to_rows(map: &SettingsMap) -> Vec<SettingRow> {
    map.iter()
        .map(|(key, value)| SettingRow {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}
