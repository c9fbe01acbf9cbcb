use axum::extract::Path;
use bazaar::{
    model::user::UpdateRoleDto,
    server::{controller::admin::user::update_user_role, service::role::RoleService},
};

use super::*;

/// Expect the assigned role to replace the previous one
#[tokio::test]
async fn assigns_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let (account, _) = test.user().insert_user(TEST_SELLER_PHONE, "Ravi").await?;

    for role in [Role::Delivery, Role::Seller] {
        let result = update_user_role(
            State(test.into_app_state()),
            test.session.clone(),
            Path(account.id),
            Json(UpdateRoleDto { role }),
        )
        .await;
        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
    }

    let role = RoleService::new(&test.db).resolve_role(account.id).await.unwrap();
    assert_eq!(role, Role::Seller);

    Ok(())
}

/// Expect 404 when assigning a role to an unknown user
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;

    let result = update_user_role(
        State(test.into_app_state()),
        test.session.clone(),
        Path(999),
        Json(UpdateRoleDto { role: Role::Seller }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
