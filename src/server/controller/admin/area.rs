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
        seller::{AreaDto, AreaWithSellerDto, CreateAreaDto, SetActiveDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::session::require_role},
        error::Error,
        model::app::AppState,
        service::area::AreaService,
    },
};

/// List delivery areas with the seller serving each one
#[utoipa::path(
    get,
    path = "/admin/areas",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Areas", body = Vec<AreaWithSellerDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_areas(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let areas = AreaService::new(&state.db).list().await?;

    Ok(Json(areas))
}

/// Create an area, optionally assigning a seller to it in the same transaction
#[utoipa::path(
    post,
    path = "/admin/areas",
    tag = ADMIN_TAG,
    request_body = CreateAreaDto,
    responses(
        (status = 201, description = "Created area", body = AreaWithSellerDto),
        (status = 400, description = "Area name missing", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_area(
    State(state): State<AppState>,
    session: Session,
    Json(create): Json<CreateAreaDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let area = AreaService::new(&state.db).create(create).await?;

    Ok((StatusCode::CREATED, Json(area)))
}

/// Enable or disable ordering in an area
#[utoipa::path(
    put,
    path = "/admin/areas/{id}/active",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Area ID")),
    request_body = SetActiveDto,
    responses(
        (status = 200, description = "Updated area", body = AreaDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_area_active(
    State(state): State<AppState>,
    session: Session,
    Path(area_id): Path<i32>,
    Json(update): Json<SetActiveDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let area = AreaService::new(&state.db)
        .set_active(area_id, update.is_active)
        .await?;

    Ok(Json(area))
}
