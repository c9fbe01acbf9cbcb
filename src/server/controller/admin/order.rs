use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, Paginated},
        order::{OrderDetailDto, OrderDto, OrderFilterParams, UpdateOrderStatusDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::session::require_role},
        error::Error,
        model::app::AppState,
        service::order::{OrderActor, OrderService},
    },
};

/// List orders matching the given filters, newest first
#[utoipa::path(
    get,
    path = "/admin/orders",
    tag = ADMIN_TAG,
    params(OrderFilterParams),
    responses(
        (status = 200, description = "One page of orders", body = Paginated<OrderDto>),
        (status = 400, description = "Start date after end date", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<OrderFilterParams>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let orders = OrderService::new(&state.db).list(params).await?;

    Ok(Json(orders))
}

/// Orders placed today that are neither delivered nor cancelled
#[utoipa::path(
    get,
    path = "/admin/orders/live",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Live orders", body = Vec<OrderDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn live_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let orders = OrderService::new(&state.db).live().await?;

    Ok(Json(orders))
}

/// Order with its items, payments, delivery address and seller
#[utoipa::path(
    get,
    path = "/admin/orders/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order detail", body = OrderDetailDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn order_detail(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let order = OrderService::new(&state.db).detail(order_id).await?;

    Ok(Json(order))
}

/// Move an order one step along its lifecycle
///
/// # Responses
/// - 200 (Success): Status updated
/// - 400 (Bad Request): Transition not permitted from the current status
/// - 404 (Not Found): Order does not exist
/// - 409 (Conflict): Status changed concurrently, reload and retry
#[utoipa::path(
    put,
    path = "/admin/orders/{id}/status",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Updated order", body = OrderDto),
        (status = 400, description = "Transition not permitted", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Status changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(update): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let order = OrderService::new(&state.db)
        .update_status(order_id, update.status, OrderActor::Admin)
        .await?;

    Ok(Json(order))
}
