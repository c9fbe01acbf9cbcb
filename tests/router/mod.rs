//! End-to-end tests driving the full router with a cookie based session layer.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Method, Request, StatusCode,
    },
    Router,
};
use bazaar::{
    model::dashboard::AdminDashboardDto,
    server::{router::app, util::otp::hash_code},
};
use bazaar_test_utils::prelude::*;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::Role;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{json_body, TestContextExt};

const CODE: &str = "731904";

fn test_app(test: &TestContext) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    app(test.into_app_state()).layer(session_layer)
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

/// Logs in through the OTP endpoint and returns the session cookie
async fn login(app: &Router, test: &TestContext) -> Result<String, TestError> {
    test.auth()
        .insert_challenge(
            TEST_PHONE,
            &hash_code(CODE),
            0,
            Utc::now().naive_utc() + Duration::minutes(5),
        )
        .await?;

    let body = serde_json::json!({ "phone": TEST_PHONE, "code": CODE }).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/otp/verify")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/admin");

    let cookie = response.headers()[SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    Ok(cookie)
}

/// Expect anonymous console requests to be redirected to login
#[tokio::test]
async fn redirects_anonymous_console_requests() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test_app(&test);

    for path in ["/admin", "/admin/orders", "/seller/products"] {
        let response = app.clone().oneshot(get(path, None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(response.headers()[LOCATION], "/login", "{path}");
    }

    Ok(())
}

/// Expect an admin to log in, reach the console and be sent away from the login page
#[tokio::test]
async fn admin_login_flow() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.user()
        .insert_user_with_role(TEST_PHONE, "Asha", Role::Admin)
        .await?;
    let app = test_app(&test);

    let cookie = login(&app, &test).await?;

    let response = app
        .clone()
        .oneshot(get("/admin", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let dashboard: AdminDashboardDto = json_body(response).await;
    assert_eq!(dashboard.orders_today, 0);
    assert!(dashboard.recent_orders.is_empty());

    let response = app
        .clone()
        .oneshot(get("/login", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/admin");

    let response = app
        .clone()
        .oneshot(get("/seller", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/access-denied");

    let response = app
        .clone()
        .oneshot(get("/auth/logout", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/login");

    let response = app.oneshot(get("/admin", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/login");

    Ok(())
}

/// Expect the OpenAPI document to describe the console routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test_app(&test);

    let response = app
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let document: serde_json::Value = json_body(response).await;
    assert!(document["paths"]["/admin/orders"].is_object());
    assert!(document["paths"]["/seller/products/{id}/price"].is_object());

    Ok(())
}
