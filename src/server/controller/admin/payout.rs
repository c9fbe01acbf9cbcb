use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        payout::{CreatePayoutDto, PayoutDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::session::require_role},
        error::Error,
        model::app::AppState,
        service::payout::PayoutService,
    },
};

/// List payouts newest first
#[utoipa::path(
    get,
    path = "/admin/payouts",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Payouts", body = Vec<PayoutDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_payouts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let payouts = PayoutService::new(&state.db).list().await?;

    Ok(Json(payouts))
}

/// Create a pending payout covering a seller's delivered orders within a date window
#[utoipa::path(
    post,
    path = "/admin/payouts",
    tag = ADMIN_TAG,
    request_body = CreatePayoutDto,
    responses(
        (status = 201, description = "Pending payout", body = PayoutDto),
        (status = 400, description = "Window invalid or without delivered orders", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payout(
    State(state): State<AppState>,
    session: Session,
    Json(create): Json<CreatePayoutDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let payout = PayoutService::new(&state.db).create(create).await?;

    Ok((StatusCode::CREATED, Json(payout)))
}

/// Mark a pending payout as released
#[utoipa::path(
    post,
    path = "/admin/payouts/{id}/release",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Payout ID")),
    responses(
        (status = 200, description = "Released payout", body = PayoutDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Payout not found", body = ErrorDto),
        (status = 409, description = "Payout already released", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn release_payout(
    State(state): State<AppState>,
    session: Session,
    Path(payout_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let payout = PayoutService::new(&state.db).release(payout_id).await?;

    Ok(Json(payout))
}
