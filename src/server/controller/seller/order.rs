use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        order::{OrderDto, SellerOrderDto, UpdateOrderStatusDto},
    },
    server::{
        controller::{seller::SELLER_TAG, util::session::current_seller},
        error::Error,
        model::app::AppState,
        service::order::{OrderActor, OrderService},
    },
};

/// Orders assigned to the caller, newest first, with their items
#[utoipa::path(
    get,
    path = "/seller/orders",
    tag = SELLER_TAG,
    responses(
        (status = 200, description = "Seller orders", body = Vec<SellerOrderDto>),
        (status = 403, description = "Caller is not a seller", body = ErrorDto),
        (status = 404, description = "Seller account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seller_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let seller = current_seller(&state, &session).await?;

    let orders = OrderService::new(&state.db).seller_orders(seller.id).await?;

    Ok(Json(orders))
}

/// Move one of the caller's orders one step along its lifecycle
#[utoipa::path(
    put,
    path = "/seller/orders/{id}/status",
    tag = SELLER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Updated order", body = OrderDto),
        (status = 400, description = "Transition not permitted", body = ErrorDto),
        (status = 403, description = "Order belongs to another seller", body = ErrorDto),
        (status = 404, description = "Order or seller account not found", body = ErrorDto),
        (status = 409, description = "Status changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_seller_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(update): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let seller = current_seller(&state, &session).await?;

    let order = OrderService::new(&state.db)
        .update_status(order_id, update.status, OrderActor::Seller(seller.id))
        .await?;

    Ok(Json(order))
}
