use axum::extract::{Path, Query};
use bazaar::{
    model::{
        api::Paginated,
        order::{OrderDto, OrderFilterParams, UpdateOrderStatusDto},
    },
    server::controller::admin::order::{list_orders, order_detail, update_order_status},
};
use entity::sea_orm_active_enums::OrderStatus;

use super::*;

/// Expect admins to page through orders filtered by status
#[tokio::test]
async fn lists_orders_by_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let admin_id = login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    test.order()
        .insert_order(admin_id, None, 100, OrderStatus::Confirmed)
        .await?;
    test.order()
        .insert_order(admin_id, None, 200, OrderStatus::Delivered)
        .await?;

    let params = OrderFilterParams {
        status: Some(OrderStatus::Delivered),
        ..Default::default()
    };
    let result = list_orders(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Paginated<OrderDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].status, OrderStatus::Delivered);

    Ok(())
}

/// Expect 403 for callers without the admin role
#[tokio::test]
async fn rejects_non_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Delivery).await?;

    let result = list_orders(
        State(test.into_app_state()),
        test.session.clone(),
        Query(OrderFilterParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 for an unknown order
#[tokio::test]
async fn detail_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;

    let result = order_detail(State(test.into_app_state()), test.session.clone(), Path(99)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect one-step advances to succeed and moves out of a terminal status to fail with 400
#[tokio::test]
async fn updates_status_along_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let admin_id = login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let confirmed = test
        .order()
        .insert_order(admin_id, None, 100, OrderStatus::Confirmed)
        .await?;
    let delivered = test
        .order()
        .insert_order(admin_id, None, 100, OrderStatus::Delivered)
        .await?;

    let result = update_order_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(confirmed.id),
        Json(UpdateOrderStatusDto {
            status: OrderStatus::Processing,
        }),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let order: OrderDto = json_body(resp).await;
    assert_eq!(order.status, OrderStatus::Processing);

    let result = update_order_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(delivered.id),
        Json(UpdateOrderStatusDto {
            status: OrderStatus::Processing,
        }),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
