use axum::extract::Path;
use bazaar::{
    model::order::{OrderDto, SellerOrderDto, UpdateOrderStatusDto},
    server::controller::seller::order::{seller_orders, update_seller_order_status},
};
use entity::sea_orm_active_enums::{OrderStatus, TechFeeType};

use super::*;

/// Expect only the caller's orders, each with its items
#[tokio::test]
async fn lists_own_orders() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let seller = login_as_seller(&test).await?;
    let (customer, _) = test.user().insert_user(TEST_PHONE, "Meera").await?;
    let order = test
        .order()
        .insert_order(customer.id, Some(seller.id), 100, OrderStatus::Confirmed)
        .await?;
    test.order()
        .insert_order_item(order.id, None, "Tomato", 50, 2)
        .await?;
    test.order()
        .insert_order(customer.id, None, 100, OrderStatus::Confirmed)
        .await?;

    let result = seller_orders(State(test.into_app_state()), test.session.clone()).await;

    let orders: Vec<SellerOrderDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order.id, order.id);
    assert_eq!(orders[0].items.len(), 1);

    Ok(())
}

/// Expect the caller to advance their own order and be refused another seller's order
#[tokio::test]
async fn updates_only_own_orders() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let seller = login_as_seller(&test).await?;
    let (_, other) = test
        .seller()
        .insert_seller_with_terms("+919811111111", "Green Basket", 10, TechFeeType::Fixed, 50)
        .await?;
    let (customer, _) = test.user().insert_user(TEST_PHONE, "Meera").await?;
    let own = test
        .order()
        .insert_order(customer.id, Some(seller.id), 100, OrderStatus::Confirmed)
        .await?;
    let foreign = test
        .order()
        .insert_order(customer.id, Some(other.id), 100, OrderStatus::Confirmed)
        .await?;

    let result = update_seller_order_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(own.id),
        Json(UpdateOrderStatusDto {
            status: OrderStatus::Processing,
        }),
    )
    .await;
    let updated: OrderDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(updated.status, OrderStatus::Processing);

    let result = update_seller_order_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(foreign.id),
        Json(UpdateOrderStatusDto {
            status: OrderStatus::Processing,
        }),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
