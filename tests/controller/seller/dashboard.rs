use bazaar::{model::dashboard::SellerDashboardDto, server::controller::seller::dashboard::seller_dashboard};
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;

use super::*;

/// Expect figures scoped to the caller's seller account
#[tokio::test]
async fn returns_own_figures() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let seller = login_as_seller(&test).await?;
    let (customer, _) = test.user().insert_user(TEST_PHONE, "Meera").await?;
    test.order()
        .insert_order(customer.id, Some(seller.id), 200, OrderStatus::Delivered)
        .await?;
    test.order()
        .insert_order(customer.id, Some(seller.id), 100, OrderStatus::Confirmed)
        .await?;
    test.order()
        .insert_order(customer.id, None, 500, OrderStatus::Delivered)
        .await?;

    let result = seller_dashboard(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let dashboard: SellerDashboardDto = json_body(resp).await;
    assert_eq!(dashboard.seller_name, "Fresh Mart");
    assert!(dashboard.is_active);
    assert!(dashboard.area.is_none());
    assert_eq!(dashboard.total_orders, 2);
    assert_eq!(dashboard.delivered_revenue, Decimal::from(200));

    Ok(())
}

/// Expect a seller awaiting verification to see its area and pending state
#[tokio::test]
async fn shows_pending_verification() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let seller = login_as_seller(&test).await?;
    let area = test.seller().insert_area("Koramangala").await?;
    test.seller()
        .place_seller(seller, Some(area.id), false)
        .await?;

    let result = seller_dashboard(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let dashboard: SellerDashboardDto = json_body(resp).await;
    assert_eq!(dashboard.seller_name, "Fresh Mart");
    assert!(!dashboard.is_active);
    assert_eq!(dashboard.area.map(|a| a.id), Some(area.id));

    Ok(())
}

/// Expect 404 for a seller role without a seller account
#[tokio::test]
async fn requires_seller_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    login_with_role(&test, TEST_SELLER_PHONE, Role::Seller).await?;

    let result = seller_dashboard(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 403 for admins, who use the admin console instead
#[tokio::test]
async fn rejects_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;

    let result = seller_dashboard(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
