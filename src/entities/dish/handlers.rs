//! Dish HTTP handlers

use super::model::{Dish, DishDraft};
use super::validators::DishChains;
use crate::core::{
    ApiError, DataResponse, Envelope, ResourceState, ValidationContext, decode_payload, fresh_id,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// Dish-specific AppState
pub type DishAppState = ResourceState<Dish, DishChains>;

pub async fn list_dishes(
    State(state): State<DishAppState>,
) -> Result<Json<DataResponse<Vec<Dish>>>, ApiError> {
    let dishes = state.store.list().await?;
    Ok(Json(DataResponse::new(dishes)))
}

pub async fn create_dish(
    State(state): State<DishAppState>,
    Envelope(data): Envelope,
) -> Result<(StatusCode, Json<DataResponse<Dish>>), ApiError> {
    let _writes = state.lock_writes().await;

    let mut ctx = ValidationContext::new(data);
    state.chains.create.run(&mut ctx).await?;
    let draft: DishDraft = decode_payload::<Dish, _>(ctx.into_data())?;

    let id = fresh_id(state.ids.as_ref(), state.store.as_ref()).await?;
    let dish = state.store.append(draft.into_dish(id)).await?;

    tracing::info!(dish_id = %dish.id, name = %dish.name, "dish created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(dish))))
}

pub async fn read_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<DataResponse<Dish>>, ApiError> {
    let mut ctx = ValidationContext::new(Default::default()).with_route_id(dish_id);
    state.chains.read.run(&mut ctx).await?;
    Ok(Json(DataResponse::new(ctx.take_bound()?)))
}

pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    Envelope(data): Envelope,
) -> Result<Json<DataResponse<Dish>>, ApiError> {
    let _writes = state.lock_writes().await;

    let mut ctx = ValidationContext::new(data).with_route_id(dish_id);
    state.chains.update.run(&mut ctx).await?;
    let mut dish = ctx.take_bound()?;
    let draft: DishDraft = decode_payload::<Dish, _>(ctx.into_data())?;

    draft.apply_to(&mut dish);
    let dish = state
        .store
        .replace(dish)
        .await?
        .ok_or_else(|| ApiError::internal("bound dish vanished before update"))?;

    tracing::info!(dish_id = %dish.id, "dish updated");
    Ok(Json(DataResponse::new(dish)))
}
