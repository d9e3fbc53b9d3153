//! Promotion route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use backline_core::{DiscountType, Promotion, PublicationStatus};

use crate::datastore::promotions::{self, NewPromotion};
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request body for creating a promotion.
#[derive(Debug, Deserialize)]
pub struct CreatePromotionRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: PublicationStatus,
}

/// List all promotions, most recent first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Promotion>>> {
    let promotions = promotions::list(state.datastore()).await?;
    Ok(Json(promotions))
}

/// Create a promotion.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreatePromotionRequest>,
) -> Result<impl IntoResponse> {
    if body.name.is_empty() {
        return Err(ApiError::BadRequest(
            "El nombre de la promoción es requerido.".to_string(),
        ));
    }
    if body.discount_value < Decimal::ZERO {
        return Err(ApiError::BadRequest(
            "El valor del descuento no puede ser negativo.".to_string(),
        ));
    }
    if body.end_date < body.start_date {
        return Err(ApiError::BadRequest(
            "La fecha de fin debe ser posterior a la de inicio.".to_string(),
        ));
    }

    let new_promotion = NewPromotion {
        name: body.name,
        description: body.description.filter(|d| !d.is_empty()),
        discount_type: body.discount_type,
        discount_value: body.discount_value,
        start_date: body.start_date,
        end_date: body.end_date,
        status: body.status,
    };

    let promotion = promotions::insert(state.datastore(), &new_promotion).await?;
    Ok((StatusCode::CREATED, Json(promotion)))
}
