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
        user::{UpdateRoleDto, UserDetailDto, UserListParams, UserSummaryDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::session::require_role},
        error::Error,
        model::app::AppState,
        service::{role::RoleService, user::UserService},
    },
};

/// Page through user profiles with their resolved roles
///
/// Filtering by `role=delivery` lists delivery partners.
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = ADMIN_TAG,
    params(UserListParams),
    responses(
        (status = 200, description = "One page of users", body = Paginated<UserSummaryDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let users = UserService::new(&state.db).list(params).await?;

    Ok(Json(users))
}

/// Get a user with their role and saved addresses
#[utoipa::path(
    get,
    path = "/admin/users/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User with role and addresses", body = UserDetailDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn user_detail(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let user = UserService::new(&state.db).detail(user_id).await?;

    Ok(Json(user))
}

/// Assign a role to a user, replacing any previous role
#[utoipa::path(
    put,
    path = "/admin/users/{id}/role",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role assigned", body = UpdateRoleDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(update): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let role = RoleService::new(&state.db)
        .set_role(user_id, update.role)
        .await?;

    Ok(Json(UpdateRoleDto { role }))
}
