//! Access gate applied in front of every route.
//!
//! The gate resolves the caller from the session, looks up their role and applies
//! [`guard_route`]. Any failure while resolving the caller leaves them anonymous, so the
//! protected consoles stay closed when the role store cannot be reached.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::server::{
    model::{app::AppState, session::user::SessionUserId},
    policy::access::{guard_route, Caller, GateDecision},
    service::role::RoleService,
};

/// Redirects the request with `303 See Other` when the gate denies it, otherwise runs the
/// rest of the stack.
pub async fn access_gate(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    let caller = resolve_session_caller(&state, &session).await;

    match guard_route(request.uri().path(), caller) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Redirect(to) => {
            tracing::debug!(
                "Redirecting {:?} request for {} to {}",
                caller,
                request.uri().path(),
                to
            );

            Redirect::to(to).into_response()
        }
    }
}

/// Resolves who is calling from the session.
///
/// A session naming an identity that no longer exists is cleared.
pub async fn resolve_session_caller(state: &AppState, session: &Session) -> Caller {
    let user_id = match SessionUserId::get(session).await {
        Ok(Some(user_id)) => user_id,
        Ok(None) => return Caller::Anonymous,
        Err(err) => {
            tracing::warn!("Failed to read user from session, treating caller as anonymous: {}", err);

            return Caller::Anonymous;
        }
    };

    match RoleService::new(&state.db).resolve_caller(user_id).await {
        Ok(Some(role)) => Caller::Authenticated(role),
        Ok(None) => {
            session.clear().await;

            tracing::warn!(
                "Cleared session for user ID {} which no longer exists in the database",
                user_id
            );

            Caller::Anonymous
        }
        Err(err) => {
            tracing::warn!(
                "Role lookup for user ID {} failed, treating caller as anonymous: {}",
                user_id,
                err
            );

            Caller::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header::LOCATION, Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use bazaar_test_utils::prelude::*;
    use entity::sea_orm_active_enums::Role;
    use tower::ServiceExt;

    use crate::server::{
        middleware::{access_gate, resolve_session_caller},
        model::{app::AppState, session::user::SessionUserId},
        policy::access::Caller,
        sms::SmsGateway,
    };

    fn app_state(test: &TestContext) -> AppState {
        AppState {
            db: test.db.clone(),
            sms: SmsGateway::new(
                reqwest::Client::new(),
                test.sms_gateway_url(),
                test.sms_api_key(),
            ),
            otp_ttl: chrono::Duration::seconds(300),
        }
    }

    fn gated_router(state: AppState) -> Router {
        Router::new()
            .route("/admin/orders", get(|| async { "orders" }))
            .route("/seller", get(|| async { "seller" }))
            .route("/", get(|| async { "home" }))
            .layer(from_fn_with_state(state.clone(), access_gate))
            .with_state(state)
    }

    fn request(test: &TestContext, path: &str) -> Request<Body> {
        let mut request = Request::builder().uri(path).body(Body::empty()).unwrap();
        request.extensions_mut().insert(test.session.clone());

        request
    }

    mod resolve_session_caller {
        use super::*;

        /// Expect a session without a user to be anonymous
        #[tokio::test]
        async fn anonymous_without_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;

            let caller = resolve_session_caller(&app_state(&test), &test.session).await;

            assert_eq!(caller, Caller::Anonymous);

            Ok(())
        }

        /// Expect the stored role of a logged in user
        #[tokio::test]
        async fn resolves_role() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (account, _) = test
                .user()
                .insert_user_with_role(TEST_PHONE, "Asha", Role::Admin)
                .await?;
            SessionUserId::insert(&test.session, account.id).await.unwrap();

            let caller = resolve_session_caller(&app_state(&test), &test.session).await;

            assert_eq!(caller, Caller::Authenticated(Role::Admin));

            Ok(())
        }

        /// Expect a session for a deleted identity to be cleared
        #[tokio::test]
        async fn clears_stale_session() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            SessionUserId::insert(&test.session, 404).await.unwrap();

            let caller = resolve_session_caller(&app_state(&test), &test.session).await;

            assert_eq!(caller, Caller::Anonymous);
            assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

            Ok(())
        }

        /// Expect a failing role lookup to leave the caller anonymous
        #[tokio::test]
        async fn fails_closed_on_store_error() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            SessionUserId::insert(&test.session, 1).await.unwrap();

            let caller = resolve_session_caller(&app_state(&test), &test.session).await;

            assert_eq!(caller, Caller::Anonymous);

            Ok(())
        }
    }

    mod access_gate {
        use super::*;

        /// Expect anonymous callers to be redirected to login with 303
        #[tokio::test]
        async fn redirects_anonymous_admin_request() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let app = gated_router(app_state(&test));

            let response = app.oneshot(request(&test, "/admin/orders")).await.unwrap();

            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[LOCATION], "/login");

            Ok(())
        }

        /// Expect a seller to be denied the admin console
        #[tokio::test]
        async fn denies_wrong_role() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (account, _) = test
                .user()
                .insert_user_with_role(TEST_SELLER_PHONE, "Fresh Mart", Role::Seller)
                .await?;
            SessionUserId::insert(&test.session, account.id).await.unwrap();
            let app = gated_router(app_state(&test));

            let response = app.oneshot(request(&test, "/admin/orders")).await.unwrap();

            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[LOCATION], "/access-denied");

            Ok(())
        }

        /// Expect matching roles and public routes to reach the handler
        #[tokio::test]
        async fn allows_permitted_requests() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (account, _) = test
                .user()
                .insert_user_with_role(TEST_SELLER_PHONE, "Fresh Mart", Role::Seller)
                .await?;
            SessionUserId::insert(&test.session, account.id).await.unwrap();
            let app = gated_router(app_state(&test));

            let response = app
                .clone()
                .oneshot(request(&test, "/seller"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let response = app.oneshot(request(&test, "/")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            Ok(())
        }

        /// Expect the consoles to stay closed when roles cannot be read
        #[tokio::test]
        async fn fails_closed_when_store_unavailable() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            SessionUserId::insert(&test.session, 1).await.unwrap();
            let app = gated_router(app_state(&test));

            let response = app.oneshot(request(&test, "/seller")).await.unwrap();

            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[LOCATION], "/login");

            Ok(())
        }
    }
}
