use axum::extract::Path;
use bazaar::{
    model::support::{SupportTicketDto, UpdateTicketNotesDto, UpdateTicketStatusDto},
    server::controller::admin::support::{
        resolve_callback, update_ticket_notes, update_ticket_status,
    },
};
use entity::sea_orm_active_enums::{CallbackStatus, TicketStatus};

use super::*;

/// Expect open tickets to close and closed tickets to stay closed
#[tokio::test]
async fn updates_ticket_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_support_tables()
        .build()
        .await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let ticket = test.support().insert_ticket(TicketStatus::Open).await?;

    let result = update_ticket_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(ticket.id),
        Json(UpdateTicketStatusDto {
            status: TicketStatus::Closed,
        }),
    )
    .await;
    let updated: SupportTicketDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(updated.status, TicketStatus::Closed);

    let result = update_ticket_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(ticket.id),
        Json(UpdateTicketStatusDto {
            status: TicketStatus::Open,
        }),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect notes to be stored trimmed
#[tokio::test]
async fn stores_ticket_notes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_support_tables()
        .build()
        .await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let ticket = test.support().insert_ticket(TicketStatus::Open).await?;

    let result = update_ticket_notes(
        State(test.into_app_state()),
        test.session.clone(),
        Path(ticket.id),
        Json(UpdateTicketNotesDto {
            admin_notes: Some("  Refund issued ".to_string()),
        }),
    )
    .await;

    let updated: SupportTicketDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(updated.admin_notes.as_deref(), Some("Refund issued"));

    Ok(())
}

/// Expect a callback request to resolve once and conflict afterwards
#[tokio::test]
async fn resolves_callback_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_support_tables()
        .build()
        .await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let callback = test.support().insert_callback(CallbackStatus::Pending).await?;

    let result = resolve_callback(
        State(test.into_app_state()),
        test.session.clone(),
        Path(callback.id),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = resolve_callback(
        State(test.into_app_state()),
        test.session.clone(),
        Path(callback.id),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
