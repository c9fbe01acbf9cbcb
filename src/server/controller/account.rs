use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{ProfileDto, UpdateProfileDto},
    },
    server::{
        controller::util::session::current_user, error::Error, model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag for the logged in user's own account routes
pub static ACCOUNT_TAG: &str = "account";

/// Get the profile of the logged in user
#[utoipa::path(
    get,
    path = "/account/profile",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Profile of the logged in user", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = current_user(&state, &session).await?;

    let profile = UserService::new(&state.db).profile(caller.user_id).await?;

    Ok(Json(profile))
}

/// Update the name and phone number of the logged in user
#[utoipa::path(
    put,
    path = "/account/profile",
    tag = ACCOUNT_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 400, description = "Name missing or phone invalid", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(update): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = current_user(&state, &session).await?;

    let profile = UserService::new(&state.db)
        .update_profile(caller.user_id, update)
        .await?;

    Ok(Json(profile))
}
