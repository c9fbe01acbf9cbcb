use bazaar::{
    model::auth::VerifyOtpDto,
    server::{controller::auth::verify_otp, util::otp::hash_code},
};
use chrono::{Duration, Utc};

use super::*;

const CODE: &str = "482913";

fn verify(code: &str) -> Json<VerifyOtpDto> {
    Json(VerifyOtpDto {
        phone: TEST_PHONE.to_string(),
        code: code.to_string(),
    })
}

async fn insert_valid_challenge(test: &TestContext) -> Result<(), TestError> {
    test.auth()
        .insert_challenge(
            TEST_PHONE,
            &hash_code(CODE),
            0,
            Utc::now().naive_utc() + Duration::minutes(5),
        )
        .await?;

    Ok(())
}

/// Expect a first login to create the account, store it in session and land on `/`
#[tokio::test]
async fn logs_in_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_otp_tables().build().await?;
    insert_valid_challenge(&test).await?;

    let result = verify_otp(
        State(test.into_app_state()),
        test.session.clone(),
        verify(CODE),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/");

    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(user_id.is_some());

    Ok(())
}

/// Expect admins to be redirected to the admin console
#[tokio::test]
async fn redirects_admin_to_console() -> Result<(), TestError> {
    let test = TestBuilder::new().with_otp_tables().build().await?;
    let (account, _) = test
        .user()
        .insert_user_with_role(TEST_PHONE, "Asha", Role::Admin)
        .await?;
    insert_valid_challenge(&test).await?;

    let result = verify_otp(
        State(test.into_app_state()),
        test.session.clone(),
        verify(CODE),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/admin");

    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(user_id, Some(account.id));

    Ok(())
}

/// Expect 400 and no session user for an incorrect code
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), TestError> {
    let test = TestBuilder::new().with_otp_tables().build().await?;
    insert_valid_challenge(&test).await?;

    let result = verify_otp(
        State(test.into_app_state()),
        test.session.clone(),
        verify("000000"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(user_id.is_none());

    Ok(())
}

/// Expect 400 once the code has expired
#[tokio::test]
async fn rejects_expired_code() -> Result<(), TestError> {
    let test = TestBuilder::new().with_otp_tables().build().await?;
    test.auth()
        .insert_challenge(
            TEST_PHONE,
            &hash_code(CODE),
            0,
            Utc::now().naive_utc() - Duration::minutes(1),
        )
        .await?;

    let result = verify_otp(
        State(test.into_app_state()),
        test.session.clone(),
        verify(CODE),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
