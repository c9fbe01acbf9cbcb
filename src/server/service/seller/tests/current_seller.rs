use super::*;

/// Expect the seller row linked to the user
#[tokio::test]
async fn returns_linked_seller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seller_tables().build().await?;
    let (account, seller) = test
        .seller()
        .insert_seller(TEST_SELLER_PHONE, "Fresh Farms")
        .await?;

    let seller_service = SellerService::new(&test.db);
    let result = seller_service.current_seller(account.id).await.unwrap();

    assert_eq!(result.id, seller.id);

    Ok(())
}

/// Expect AccountNotFound for a user without a seller row
#[tokio::test]
async fn fails_without_seller_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seller_tables().build().await?;
    let (account, _) = test.user().insert_user(TEST_PHONE, "Asha").await?;

    let seller_service = SellerService::new(&test.db);
    let result = seller_service.current_seller(account.id).await;

    assert!(matches!(
        result,
        Err(Error::SellerError(SellerError::AccountNotFound(_)))
    ));

    Ok(())
}
