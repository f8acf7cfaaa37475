//! Order HTTP handlers

use super::model::{Order, OrderDraft};
use super::validators::OrderChains;
use crate::core::{
    ApiError, DataResponse, Envelope, ResourceState, ValidationContext, decode_payload, fresh_id,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// Order-specific AppState
pub type OrderAppState = ResourceState<Order, OrderChains>;

pub async fn list_orders(
    State(state): State<OrderAppState>,
) -> Result<Json<DataResponse<Vec<Order>>>, ApiError> {
    let orders = state.store.list().await?;
    Ok(Json(DataResponse::new(orders)))
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    Envelope(data): Envelope,
) -> Result<(StatusCode, Json<DataResponse<Order>>), ApiError> {
    let _writes = state.lock_writes().await;

    let mut ctx = ValidationContext::new(data);
    state.chains.create.run(&mut ctx).await?;
    let draft: OrderDraft = decode_payload::<Order, _>(ctx.into_data())?;

    let id = fresh_id(state.ids.as_ref(), state.store.as_ref()).await?;
    let order = state.store.append(draft.into_order(id)).await?;

    tracing::info!(
        order_id = %order.id,
        status = %order.status,
        lines = order.dishes.len(),
        "order created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse::new(order))))
}

pub async fn read_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> Result<Json<DataResponse<Order>>, ApiError> {
    let mut ctx = ValidationContext::new(Default::default()).with_route_id(order_id);
    state.chains.read.run(&mut ctx).await?;
    Ok(Json(DataResponse::new(ctx.take_bound()?)))
}

pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    Envelope(data): Envelope,
) -> Result<Json<DataResponse<Order>>, ApiError> {
    let _writes = state.lock_writes().await;

    let mut ctx = ValidationContext::new(data).with_route_id(order_id);
    state.chains.update.run(&mut ctx).await?;
    let mut order = ctx.take_bound()?;
    let previous = order.status;
    let draft: OrderDraft = decode_payload::<Order, _>(ctx.into_data())?;

    draft.apply_to(&mut order);
    let order = state
        .store
        .replace(order)
        .await?
        .ok_or_else(|| ApiError::internal("bound order vanished before update"))?;

    tracing::info!(order_id = %order.id, from = %previous, to = %order.status, "order updated");
    Ok(Json(DataResponse::new(order)))
}

pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let _writes = state.lock_writes().await;

    let mut ctx = ValidationContext::new(Default::default()).with_route_id(order_id);
    state.chains.delete.run(&mut ctx).await?;
    let order = ctx.take_bound()?;

    let index = state
        .store
        .position(&order.id)
        .await?
        .ok_or_else(|| ApiError::internal("bound order vanished before delete"))?;
    state.store.remove_at(index).await?;

    tracing::info!(order_id = %order.id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
