//! Settings route handlers.

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use backline_core::SettingsMap;

use crate::datastore::settings;
use crate::error::Result;
use crate::state::AppState;

/// Fetch all settings as one flat key/value object.
pub async fn show(State(state): State<AppState>) -> Result<Json<SettingsMap>> {
    let map = settings::fetch_all(state.datastore()).await?;
    Ok(Json(map))
}

/// Bulk-upsert the submitted settings subset and echo it back.
///
/// Keys not present in the body are left untouched; repeating the same PUT
/// is a no-op.
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<SettingsMap>,
) -> Result<impl IntoResponse> {
    settings::upsert(state.datastore(), &body).await?;

    Ok(Json(json!({
        "message": "Configuración actualizada correctamente",
        "data": body,
    })))
}
