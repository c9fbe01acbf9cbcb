use chrono::Duration;

use super::*;

/// Expect today's figures to skip older orders and cancelled revenue
#[tokio::test]
async fn summarizes_today() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let (account, _) = test.user().insert_user(TEST_PHONE, "Asha").await?;
    test.user()
        .insert_user_with_role("+919800000002", "Ravi", Role::Delivery)
        .await?;

    test.order()
        .insert_order(account.id, None, 100, OrderStatus::Confirmed)
        .await?;
    test.order()
        .insert_order(account.id, None, 200, OrderStatus::Cancelled)
        .await?;
    test.order()
        .insert_order_at(
            account.id,
            None,
            300,
            OrderStatus::Processing,
            Utc::now().naive_utc() - Duration::days(3),
        )
        .await?;

    let dashboard_service = DashboardService::new(&test.db);
    let dashboard = dashboard_service.admin().await.unwrap();

    assert_eq!(dashboard.orders_today, 2);
    assert_eq!(dashboard.open_orders, 2);
    assert_eq!(dashboard.revenue_today, Decimal::from(120));
    assert_eq!(dashboard.delivery_partners, 1);

    Ok(())
}

/// Expect the latest orders newest first with their customers, cut at the limit
#[tokio::test]
async fn lists_recent_orders() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    let (asha, _) = test.user().insert_user(TEST_PHONE, "Asha").await?;
    let guest = test.user().insert_account("+919800000003").await?;

    let now = Utc::now().naive_utc();
    let oldest = test
        .order()
        .insert_order_at(asha.id, None, 100, OrderStatus::Delivered, now - Duration::days(2))
        .await?;
    for hours in (1..=10).rev() {
        test.order()
            .insert_order_at(
                asha.id,
                None,
                100,
                OrderStatus::Confirmed,
                now - Duration::hours(hours),
            )
            .await?;
    }
    let newest = test
        .order()
        .insert_order_at(guest.id, None, 100, OrderStatus::Confirmed, now)
        .await?;

    let dashboard_service = DashboardService::new(&test.db);
    let dashboard = dashboard_service.admin().await.unwrap();

    assert_eq!(dashboard.recent_orders.len(), RECENT_ORDER_LIMIT as usize);
    assert!(dashboard
        .recent_orders
        .iter()
        .all(|recent| recent.order.id != oldest.id));

    let first = &dashboard.recent_orders[0];
    assert_eq!(first.order.id, newest.id);
    assert!(first.customer_name.is_none());

    let second = &dashboard.recent_orders[1];
    assert_eq!(second.customer_name.as_deref(), Some("Asha"));
    assert_eq!(second.customer_phone.as_deref(), Some(TEST_PHONE));

    Ok(())
}
