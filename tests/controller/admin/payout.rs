use axum::extract::Path;
use bazaar::{
    model::payout::{CreatePayoutDto, PayoutDto},
    server::controller::admin::payout::{create_payout, release_payout},
};
use chrono::Utc;
use entity::sea_orm_active_enums::{OrderStatus, PayoutStatus};
use rust_decimal::Decimal;

use super::*;

/// Expect a pending payout net of commission and tech fees for delivered orders
#[tokio::test]
async fn creates_payout_for_delivered_orders() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let admin_id = login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let (_, seller) = test
        .seller()
        .insert_seller(TEST_SELLER_PHONE, "Fresh Mart")
        .await?;
    test.order()
        .insert_order(admin_id, Some(seller.id), 100, OrderStatus::Delivered)
        .await?;
    test.order()
        .insert_order(admin_id, Some(seller.id), 300, OrderStatus::Shipped)
        .await?;

    let today = Utc::now().date_naive();
    let result = create_payout(
        State(test.into_app_state()),
        test.session.clone(),
        Json(CreatePayoutDto {
            seller_id: seller.id,
            start_date: today,
            end_date: today,
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let payout: PayoutDto = json_body(resp).await;
    assert_eq!(payout.payout_status, PayoutStatus::Pending);
    assert_eq!(payout.total_order_amount, Decimal::from(100));
    assert_eq!(payout.final_payout_amount, Decimal::from(85));

    Ok(())
}

/// Expect release to succeed once and conflict afterwards
#[tokio::test]
async fn releases_payout_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let (_, seller) = test
        .seller()
        .insert_seller(TEST_SELLER_PHONE, "Fresh Mart")
        .await?;
    let payout = test
        .order()
        .insert_payout(seller.id, 500, PayoutStatus::Pending)
        .await?;

    let result = release_payout(
        State(test.into_app_state()),
        test.session.clone(),
        Path(payout.id),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let released: PayoutDto = json_body(resp).await;
    assert_eq!(released.payout_status, PayoutStatus::Released);
    assert!(released.released_at.is_some());

    let result = release_payout(
        State(test.into_app_state()),
        test.session.clone(),
        Path(payout.id),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
