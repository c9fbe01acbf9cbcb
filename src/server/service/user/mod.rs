//! User administration and profile self-service.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::{PageRequest, Paginated},
        order::AddressDto,
        user::{ProfileDto, UpdateProfileDto, UserDetailDto, UserListParams, UserSummaryDto},
    },
    server::{
        data::{
            address::AddressRepository,
            profile::{ProfileFilter, ProfileRepository},
            user_role::UserRoleRepository,
        },
        error::{user::UserError, Error},
        service::role::RoleService,
        util::phone::normalize_phone,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Paginated profiles, newest first, each with its resolved role.
    ///
    /// Filtering by [`Role::User`] matches identities without any role row as well as
    /// those explicitly holding it.
    pub async fn list(&self, params: UserListParams) -> Result<Paginated<UserSummaryDto>, Error> {
        let profile_repo = ProfileRepository::new(self.db);
        let user_role_repo = UserRoleRepository::new(self.db);

        let mut filter = ProfileFilter {
            search: params.search,
            ..Default::default()
        };
        match params.role {
            Some(Role::User) => {
                filter.exclude_user_ids = user_role_repo.user_ids_without_role(Role::User).await?;
            }
            Some(role) => {
                filter.include_user_ids = Some(user_role_repo.user_ids_with_role(role).await?);
            }
            None => {}
        }

        let page = PageRequest::new(params.page, params.per_page);
        let (profiles, total) = profile_repo.search(&filter, page).await?;

        let user_ids: Vec<i32> = profiles.iter().map(|p| p.user_id).collect();
        let roles: HashMap<i32, Role> = user_role_repo
            .find_by_user_ids(&user_ids)
            .await?
            .into_iter()
            .map(|r| (r.user_id, r.role))
            .collect();

        let items = profiles
            .into_iter()
            .map(|profile| UserSummaryDto {
                role: roles.get(&profile.user_id).copied().unwrap_or(Role::User),
                profile: ProfileDto::from(profile),
            })
            .collect();

        Ok(page.wrap(items, total))
    }

    /// Profile, role and saved addresses of a user
    pub async fn detail(&self, user_id: i32) -> Result<UserDetailDto, Error> {
        let address_repo = AddressRepository::new(self.db);

        let profile = self.profile(user_id).await?;
        let role = RoleService::new(self.db).resolve_role(user_id).await?;
        let addresses = address_repo.list_by_user(user_id).await?;

        Ok(UserDetailDto {
            profile,
            role,
            addresses: addresses.into_iter().map(AddressDto::from).collect(),
        })
    }

    pub async fn profile(&self, user_id: i32) -> Result<ProfileDto, Error> {
        let profile_repo = ProfileRepository::new(self.db);

        let Some(profile) = profile_repo.find_by_user_id(user_id).await? else {
            return Err(UserError::NotFound(user_id).into());
        };

        Ok(ProfileDto::from(profile))
    }

    /// Replaces the caller's display name and contact phone.
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - Updated profile
    /// - `Err(Error::UserError(UserError::InvalidName))` - Blank name
    /// - `Err(Error::AuthError(AuthError::InvalidPhone))` - Phone given but not valid
    /// - `Err(Error::UserError(UserError::NotFound))` - User has no profile
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn update_profile(
        &self,
        user_id: i32,
        update: UpdateProfileDto,
    ) -> Result<ProfileDto, Error> {
        let profile_repo = ProfileRepository::new(self.db);

        let name = update.name.trim();
        if name.is_empty() {
            return Err(UserError::InvalidName.into());
        }

        let phone = match update.phone.as_deref().map(str::trim) {
            Some(phone) if !phone.is_empty() => Some(normalize_phone(phone)?),
            _ => None,
        };

        let Some(profile) = profile_repo.update(user_id, name, phone).await? else {
            return Err(UserError::NotFound(user_id).into());
        };

        Ok(ProfileDto::from(profile))
    }
}
