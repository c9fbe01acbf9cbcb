use super::*;

/// Expect an admin to advance an order one step
#[tokio::test]
async fn admin_advances_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let (account, _) = test.user().insert_user(TEST_PHONE, "Asha").await?;
    let order = test
        .order()
        .insert_order(account.id, None, 100, OrderStatus::Confirmed)
        .await?;

    let order_service = OrderService::new(&test.db);
    let updated = order_service
        .update_status(order.id, OrderStatus::Processing, OrderActor::Admin)
        .await
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Processing);

    Ok(())
}

/// Expect skipping a step to be rejected
#[tokio::test]
async fn rejects_skipped_step() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let (account, _) = test.user().insert_user(TEST_PHONE, "Asha").await?;
    let order = test
        .order()
        .insert_order(account.id, None, 100, OrderStatus::Confirmed)
        .await?;

    let order_service = OrderService::new(&test.db);
    let result = order_service
        .update_status(order.id, OrderStatus::Delivered, OrderActor::Admin)
        .await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::InvalidTransition { .. }))
    ));

    Ok(())
}

/// Expect nothing to leave a terminal status
#[tokio::test]
async fn rejects_leaving_terminal_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let (account, _) = test.user().insert_user(TEST_PHONE, "Asha").await?;
    let order = test
        .order()
        .insert_order(account.id, None, 100, OrderStatus::Cancelled)
        .await?;

    let order_service = OrderService::new(&test.db);
    let result = order_service
        .update_status(order.id, OrderStatus::Processing, OrderActor::Admin)
        .await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::InvalidTransition { .. }))
    ));

    Ok(())
}

/// Expect a seller to move only orders assigned to them
#[tokio::test]
async fn seller_limited_to_own_orders() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let (account, _) = test.user().insert_user(TEST_PHONE, "Asha").await?;
    let (_, owner) = test
        .seller()
        .insert_seller(TEST_SELLER_PHONE, "Fresh Farms")
        .await?;
    let (_, other) = test
        .seller()
        .insert_seller("+919800000001", "Green Basket")
        .await?;
    let order = test
        .order()
        .insert_order(account.id, Some(owner.id), 100, OrderStatus::Confirmed)
        .await?;

    let order_service = OrderService::new(&test.db);
    let denied = order_service
        .update_status(order.id, OrderStatus::Processing, OrderActor::Seller(other.id))
        .await;
    let allowed = order_service
        .update_status(order.id, OrderStatus::Processing, OrderActor::Seller(owner.id))
        .await;

    assert!(matches!(
        denied,
        Err(Error::OrderError(OrderError::NotOwned { .. }))
    ));
    assert!(allowed.is_ok());

    Ok(())
}

/// Expect NotFound for an unknown order
#[tokio::test]
async fn fails_for_unknown_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;

    let order_service = OrderService::new(&test.db);
    let result = order_service
        .update_status(3, OrderStatus::Processing, OrderActor::Admin)
        .await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::NotFound(3)))
    ));

    Ok(())
}
