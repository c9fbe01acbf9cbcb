use bazaar::{
    model::{auth::LoginInfoDto, user::HomeDto},
    server::controller::auth::{access_denied, home, login_page},
};

use super::*;

/// Expect the login page to point at both OTP endpoints
#[tokio::test]
async fn login_page_describes_otp_flow() -> Result<(), TestError> {
    let resp = login_page().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let info: LoginInfoDto = json_body(resp).await;
    assert_eq!(info.request_otp, "/auth/otp/request");
    assert_eq!(info.verify_otp, "/auth/otp/verify");

    Ok(())
}

/// Expect 403 from the access denied landing route
#[tokio::test]
async fn access_denied_returns_forbidden() -> Result<(), TestError> {
    let resp = access_denied().await.into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect home to identify a logged in delivery partner
#[tokio::test]
async fn home_identifies_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_id = login_with_role(&test, TEST_PHONE, Role::Delivery).await?;

    let result = home(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let home: HomeDto = json_body(resp).await;
    assert_eq!(home.user_id, Some(user_id));
    assert_eq!(home.role, Some(Role::Delivery));

    Ok(())
}

/// Expect an empty payload for anonymous callers
#[tokio::test]
async fn home_is_empty_for_anonymous() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = home(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let home: HomeDto = json_body(resp).await;
    assert!(home.user_id.is_none());
    assert!(home.role.is_none());

    Ok(())
}
