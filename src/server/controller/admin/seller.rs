use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        seller::{
            SellerDetailDto, SellerDto, SellerListParams, SetActiveDto, UpdateSellerFinancialsDto,
        },
    },
    server::{
        controller::{admin::ADMIN_TAG, util::session::require_role},
        error::Error,
        model::app::AppState,
        service::seller::SellerService,
    },
};

/// List sellers, optionally only active or inactive ones
#[utoipa::path(
    get,
    path = "/admin/sellers",
    tag = ADMIN_TAG,
    params(SellerListParams),
    responses(
        (status = 200, description = "Sellers", body = Vec<SellerDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sellers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SellerListParams>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let sellers = SellerService::new(&state.db)
        .list(params.status.unwrap_or_default())
        .await?;

    Ok(Json(sellers))
}

/// Get a seller with their profile and area
#[utoipa::path(
    get,
    path = "/admin/sellers/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller with profile and area", body = SellerDetailDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seller_detail(
    State(state): State<AppState>,
    session: Session,
    Path(seller_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let seller = SellerService::new(&state.db).detail(seller_id).await?;

    Ok(Json(seller))
}

/// Replace a seller's commission, tech fee and assigned area
#[utoipa::path(
    put,
    path = "/admin/sellers/{id}/financials",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = UpdateSellerFinancialsDto,
    responses(
        (status = 200, description = "Updated seller", body = SellerDto),
        (status = 400, description = "Commission or tech fee out of range", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Seller or area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_seller_financials(
    State(state): State<AppState>,
    session: Session,
    Path(seller_id): Path<i32>,
    Json(update): Json<UpdateSellerFinancialsDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let seller = SellerService::new(&state.db)
        .update_financials(seller_id, update)
        .await?;

    Ok(Json(seller))
}

/// Verify or suspend a seller
#[utoipa::path(
    put,
    path = "/admin/sellers/{id}/active",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = SetActiveDto,
    responses(
        (status = 200, description = "Updated seller", body = SellerDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_seller_active(
    State(state): State<AppState>,
    session: Session,
    Path(seller_id): Path<i32>,
    Json(update): Json<SetActiveDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let seller = SellerService::new(&state.db)
        .set_active(seller_id, update.is_active)
        .await?;

    Ok(Json(seller))
}
