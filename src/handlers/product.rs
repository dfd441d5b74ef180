// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::dtos::product::{Paginated, ProductPayload, ProductQueryParams};
use crate::error::AppError;
use crate::models::product::Product;
use crate::query;
use crate::state::AppState;

// GET /products - List products with filtering, sorting and pagination
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQueryParams>,
) -> Result<Json<Paginated<Product>>, AppError> {
    params.validate()?;

    let (items, total) = query::select(state.catalog.products(), &params);

    Ok(Json(Paginated::new(
        items,
        total,
        params.page_number,
        params.page_size,
    )))
}

// GET /products/{id} - Get single product
#[instrument(skip(state), fields(id))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(product))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    payload.validate()?;

    let product = state.catalog.create(payload.into_product(0));

    Ok((StatusCode::CREATED, Json(product)))
}

// PUT /products/{id} - Update product; body id must match path id
#[instrument(skip(state, payload), fields(id))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, AppError> {
    payload.validate()?;

    if payload.id != id {
        return Err(AppError::bad_request("ID in URL must match ID in request body"));
    }

    let product = state
        .catalog
        .update(id, payload.into_product(id))
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(product))
}

// DELETE /products/{id} - Delete product
#[instrument(skip(state), fields(id))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !state.catalog.delete(id) {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

// GET /products/categories - Distinct category values
#[instrument(skip(state))]
pub async fn get_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories())
}
