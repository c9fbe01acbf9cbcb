//! Tests for seller console endpoints.

mod dashboard;
mod order;
mod product;

use super::*;

/// Inserts a seller account with its seller row and logs it into the test session
async fn login_as_seller(test: &TestContext) -> Result<entity::seller::Model, TestError> {
    let (account, seller) = test
        .seller()
        .insert_seller(TEST_SELLER_PHONE, "Fresh Mart")
        .await?;
    SessionUserId::insert(&test.session, account.id)
        .await
        .unwrap();

    Ok(seller)
}
