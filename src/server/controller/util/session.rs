use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId},
    service::{role::RoleService, seller::SellerService},
};

/// Logged in caller together with their resolved role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    /// ID of the logged in user
    pub user_id: i32,
    /// Effective role, `User` when none was ever assigned
    pub role: Role,
}

/// Retrieves the caller from session and then from database
///
/// # Returns
/// - `Ok(CurrentUser)`: User found, with resolved role
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not
///   found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn current_user(state: &AppState, session: &Session) -> Result<CurrentUser, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(role) = RoleService::new(&state.db).resolve_caller(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(CurrentUser { user_id, role })
}

/// Retrieves the caller and ensures they hold `required`
///
/// # Returns
/// - `Ok(i32)`: ID of the caller
/// - `Err(Error::AuthError(AuthError::AccessDenied))`: Caller holds a different role
pub async fn require_role(
    state: &AppState,
    session: &Session,
    required: Role,
) -> Result<i32, Error> {
    let caller = current_user(state, session).await?;

    if caller.role != required {
        return Err(AuthError::AccessDenied(caller.user_id).into());
    }

    Ok(caller.user_id)
}

/// Retrieves the seller row of a caller holding the seller role
///
/// # Returns
/// - `Ok(entity::seller::Model)`: Seller account of the caller
/// - `Err(Error::SellerError(SellerError::AccountNotFound))`: Caller has no seller row
pub async fn current_seller(
    state: &AppState,
    session: &Session,
) -> Result<entity::seller::Model, Error> {
    let user_id = require_role(state, session, Role::Seller).await?;

    SellerService::new(&state.db).current_seller(user_id).await
}
