//! Role resolution and role administration.
//!
//! Every identity holds at most one role row. An identity without a row is a plain
//! [`Role::User`]. Role changes are upserts against the unique index on `user_id`, so
//! concurrent writes converge on a single row.

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, user_role::UserRoleRepository},
    error::{user::UserError, Error},
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    /// Creates a new instance of [`RoleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Role held by `user_id`, [`Role::User`] when no role was ever assigned
    pub async fn resolve_role(&self, user_id: i32) -> Result<Role, Error> {
        let user_role_repo = UserRoleRepository::new(self.db);

        let role = user_role_repo.find_role(user_id).await?;

        Ok(role.unwrap_or(Role::User))
    }

    /// Resolves the role of a caller whose ID was read from their session.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - Account exists, with its resolved role
    /// - `Ok(None)` - Account no longer exists, the session is stale
    /// - `Err(Error::DbErr)` - Lookup failed
    pub async fn resolve_caller(&self, user_id: i32) -> Result<Option<Role>, Error> {
        let account_repo = AccountRepository::new(self.db);

        let Some((_, maybe_role)) = account_repo.get_with_role(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(maybe_role.map(|r| r.role).unwrap_or(Role::User)))
    }

    /// Assigns `role` to `user_id`, replacing any previous role.
    ///
    /// # Returns
    /// - `Ok(Role)` - The role now held
    /// - `Err(Error::UserError(UserError::NotFound))` - No account with this ID
    /// - `Err(Error::DbErr)` - Lookup or upsert failed
    pub async fn set_role(&self, user_id: i32, role: Role) -> Result<Role, Error> {
        let account_repo = AccountRepository::new(self.db);
        let user_role_repo = UserRoleRepository::new(self.db);

        if account_repo.get_with_role(user_id).await?.is_none() {
            return Err(UserError::NotFound(user_id).into());
        }

        let user_role = user_role_repo.upsert(user_id, role).await?;

        tracing::info!("User ID {} now holds role {:?}", user_id, user_role.role);

        Ok(user_role.role)
    }
}
