//! Product route handlers.

use axum::{
    Json,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use backline_core::{Product, ProductId};

use crate::datastore::products::{self, NewProduct, ProductPatch};
use crate::datastore::DataServiceError;
use crate::error::{ApiError, Result};
use crate::routes::payload::{self, FormPayload};
use crate::state::AppState;
use crate::uploads;

/// JSON body for product create/update. Every field is optional so the same
/// shape serves PUT's partial updates; create validates presence itself.
#[derive(Debug, Default, Deserialize)]
pub struct ProductBody {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// List all products.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = products::list(state.datastore()).await?;
    Ok(Json(products))
}

/// Fetch one product by id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let product = products::fetch(state.datastore(), id)
        .await
        .map_err(|e| not_found_or(e, id))?;
    Ok(Json(product))
}

/// Create a product from JSON or a multipart form with an optional image.
pub async fn create(State(state): State<AppState>, req: Request) -> Result<impl IntoResponse> {
    let body = extract_body(&state, req, "image_file").await?;

    let name = body
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("El nombre del producto es requerido.".to_string()))?;
    let category = body
        .category
        .filter(|category| !category.is_empty())
        .ok_or_else(|| ApiError::BadRequest("La categoría es requerida.".to_string()))?;
    let price = body
        .price
        .ok_or_else(|| ApiError::BadRequest("El precio es requerido.".to_string()))?;
    let stock = body
        .stock
        .ok_or_else(|| ApiError::BadRequest("El stock es requerido.".to_string()))?;
    validate_amounts(Some(price), Some(stock))?;

    let new_product = NewProduct {
        name,
        category,
        price,
        stock,
        description: body.description.filter(|d| !d.is_empty()),
        image_url: body.image_url,
    };

    let product = products::insert(state.datastore(), &new_product).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product; only submitted fields change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    req: Request,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let body = extract_body(&state, req, "image_file").await?;
    validate_amounts(body.price, body.stock)?;

    let patch = ProductPatch {
        name: body.name.filter(|n| !n.is_empty()),
        category: body.category.filter(|c| !c.is_empty()),
        price: body.price,
        stock: body.stock,
        description: body.description,
        image_url: body.image_url,
    };

    let product = products::update(state.datastore(), id, &patch)
        .await
        .map_err(|e| not_found_or(e, id))?;
    Ok(Json(product))
}

/// Delete a product, echoing the removed row.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = ProductId::new(id);
    let deleted = products::delete(state.datastore(), id)
        .await
        .map_err(|e| not_found_or(e, id))?;

    Ok(Json(json!({
        "message": format!("Producto con ID {id} eliminado correctamente."),
        "deletedProduct": deleted,
    })))
}

/// Read either body shape; a multipart image part is stored and becomes
/// `image_url`.
async fn extract_body(
    state: &AppState,
    req: Request,
    image_field: &str,
) -> Result<ProductBody> {
    if payload::is_multipart(req.headers()) {
        let mut form = payload::read_multipart(req, image_field).await?;
        let image_url = store_form_image(state, &mut form).await?;
        form_to_body(form, image_url)
    } else {
        let Json(body) = Json::<ProductBody>::from_request(req, &())
            .await
            .map_err(|e| ApiError::BadRequest(format!("Cuerpo JSON inválido: {e}")))?;
        Ok(body)
    }
}

/// Persist the uploaded image, if any, and return its public URL.
async fn store_form_image(
    state: &AppState,
    form: &mut FormPayload,
) -> Result<Option<String>> {
    let Some(image) = form.image.take() else {
        return Ok(None);
    };
    let config = state.config();
    let url = uploads::store_image(
        &config.upload_dir,
        &config.public_url,
        &image.field,
        image.filename.as_deref(),
        &image.bytes,
    )
    .await
    .map_err(|e| ApiError::Internal(format!("No se pudo guardar la imagen: {e}")))?;
    Ok(Some(url))
}

/// Coerce multipart text fields into the typed body.
fn form_to_body(mut form: FormPayload, image_url: Option<String>) -> Result<ProductBody> {
    let price = form
        .take("price")
        .map(|raw| {
            raw.parse::<Decimal>()
                .map_err(|_| ApiError::BadRequest("Precio inválido.".to_string()))
        })
        .transpose()?;
    let stock = form
        .take("stock")
        .map(|raw| {
            raw.parse::<i32>()
                .map_err(|_| ApiError::BadRequest("Stock inválido.".to_string()))
        })
        .transpose()?;

    Ok(ProductBody {
        name: form.take("name"),
        category: form.take("category"),
        price,
        stock,
        description: form.take("description"),
        // A freshly uploaded image wins over a pasted URL.
        image_url: image_url.or_else(|| form.take("image_url")),
    })
}

/// Price and stock are always non-negative.
fn validate_amounts(price: Option<Decimal>, stock: Option<i32>) -> Result<()> {
    if price.is_some_and(|p| p < Decimal::ZERO) {
        return Err(ApiError::BadRequest(
            "El precio no puede ser negativo.".to_string(),
        ));
    }
    if stock.is_some_and(|s| s < 0) {
        return Err(ApiError::BadRequest(
            "El stock no puede ser negativo.".to_string(),
        ));
    }
    Ok(())
}

/// Map a single-product miss to the observed 404 message.
fn not_found_or(err: DataServiceError, id: ProductId) -> ApiError {
    match err {
        DataServiceError::RowNotFound => {
            ApiError::NotFound(format!("Producto con ID {id} no encontrado."))
        }
        other => ApiError::DataService(other),
    }
}
