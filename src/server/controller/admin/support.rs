use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        support::{
            CallbackRequestDto, SupportTicketDto, UpdateTicketNotesDto, UpdateTicketStatusDto,
        },
    },
    server::{
        controller::{admin::ADMIN_TAG, util::session::require_role},
        error::Error,
        model::app::AppState,
        service::support::SupportService,
    },
};

/// List support tickets
#[utoipa::path(
    get,
    path = "/admin/tickets",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Support tickets, newest first", body = Vec<SupportTicketDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let tickets = SupportService::new(&state.db).list_tickets().await?;

    Ok(Json(tickets))
}

/// Move a ticket to `in_progress` or `closed`
#[utoipa::path(
    put,
    path = "/admin/tickets/{id}/status",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = UpdateTicketStatusDto,
    responses(
        (status = 200, description = "Updated ticket", body = SupportTicketDto),
        (status = 400, description = "Transition not permitted", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 409, description = "Status changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket_status(
    State(state): State<AppState>,
    session: Session,
    Path(ticket_id): Path<i32>,
    Json(update): Json<UpdateTicketStatusDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let ticket = SupportService::new(&state.db)
        .update_ticket_status(ticket_id, update.status)
        .await?;

    Ok(Json(ticket))
}

/// Replace the internal notes of a support ticket
#[utoipa::path(
    put,
    path = "/admin/tickets/{id}/notes",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = UpdateTicketNotesDto,
    responses(
        (status = 200, description = "Updated ticket", body = SupportTicketDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket_notes(
    State(state): State<AppState>,
    session: Session,
    Path(ticket_id): Path<i32>,
    Json(update): Json<UpdateTicketNotesDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let ticket = SupportService::new(&state.db)
        .update_ticket_notes(ticket_id, update.admin_notes)
        .await?;

    Ok(Json(ticket))
}

/// List callback requests
#[utoipa::path(
    get,
    path = "/admin/callbacks",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Callback requests, newest first", body = Vec<CallbackRequestDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_callbacks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let callbacks = SupportService::new(&state.db).list_callbacks().await?;

    Ok(Json(callbacks))
}

/// Mark a pending callback request resolved
#[utoipa::path(
    post,
    path = "/admin/callbacks/{id}/resolve",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Callback request ID")),
    responses(
        (status = 200, description = "Resolved callback request", body = CallbackRequestDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Callback request not found", body = ErrorDto),
        (status = 409, description = "Callback request already resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_callback(
    State(state): State<AppState>,
    session: Session,
    Path(callback_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let callback = SupportService::new(&state.db)
        .resolve_callback(callback_id)
        .await?;

    Ok(Json(callback))
}
