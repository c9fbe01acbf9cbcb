use axum::{extract::State, response::IntoResponse, Json};
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::AdminDashboardDto},
    server::{
        controller::{admin::ADMIN_TAG, util::session::require_role},
        error::Error,
        model::app::AppState,
        service::dashboard::DashboardService,
    },
};

/// Admin role home with today's order figures
#[utoipa::path(
    get,
    path = "/admin",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard figures", body = AdminDashboardDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let dashboard = DashboardService::new(&state.db).admin().await?;

    Ok(Json(dashboard))
}
