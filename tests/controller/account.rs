//! Tests for account self-service endpoints.

use bazaar::{
    model::user::{ProfileDto, UpdateProfileDto},
    server::controller::account::{get_profile, update_profile},
};

use super::*;

/// Expect 200 with the caller's own profile
#[tokio::test]
async fn returns_own_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user_id = login_with_role(&test, TEST_PHONE, Role::User).await?;

    let result = get_profile(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: ProfileDto = json_body(resp).await;
    assert_eq!(profile.user_id, user_id);

    Ok(())
}

/// Expect 401 when nobody is logged in
#[tokio::test]
async fn requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_profile(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 and a cleared session when the logged in identity was deleted
#[tokio::test]
async fn clears_session_of_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = get_profile(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect the new name to be stored and a blank name rejected with 400
#[tokio::test]
async fn updates_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::User).await?;

    let result = update_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Json(UpdateProfileDto {
            name: "Kavya".to_string(),
            phone: None,
        }),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: ProfileDto = json_body(resp).await;
    assert_eq!(profile.name, "Kavya");

    let result = update_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Json(UpdateProfileDto {
            name: "   ".to_string(),
            phone: None,
        }),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
