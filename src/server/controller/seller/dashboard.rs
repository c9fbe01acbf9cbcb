use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::SellerDashboardDto},
    server::{
        controller::{seller::SELLER_TAG, util::session::current_seller},
        error::Error,
        model::app::AppState,
        service::dashboard::DashboardService,
    },
};

/// Seller role home with the seller's verification state, listing and order figures
#[utoipa::path(
    get,
    path = "/seller",
    tag = SELLER_TAG,
    responses(
        (status = 200, description = "Dashboard figures", body = SellerDashboardDto),
        (status = 403, description = "Caller is not a seller", body = ErrorDto),
        (status = 404, description = "Seller account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seller_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let seller = current_seller(&state, &session).await?;

    let dashboard = DashboardService::new(&state.db).seller(seller).await?;

    Ok(Json(dashboard))
}
