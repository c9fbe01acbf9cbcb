//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database and session, verifying status
//! codes, response bodies and the role checks each console applies.

mod account;
mod admin;
mod auth;
mod seller;

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};
use bazaar::server::model::session::user::SessionUserId;
use bazaar_test_utils::prelude::*;
use entity::sea_orm_active_enums::Role;

use crate::util::{json_body, TestContextExt};

/// Inserts a user holding `role` and logs them into the test session
async fn login_with_role(test: &TestContext, phone: &str, role: Role) -> Result<i32, TestError> {
    let (account, _) = test
        .user()
        .insert_user_with_role(phone, "Test User", role)
        .await?;
    SessionUserId::insert(&test.session, account.id)
        .await
        .unwrap();

    Ok(account.id)
}
