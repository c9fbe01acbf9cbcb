use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::Role;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::order::AddressDto;

/// A user's profile
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::profile::Model> for ProfileDto {
    fn from(profile: entity::profile::Model) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            name: profile.name,
            phone: profile.phone,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// A profile together with the role resolved for its identity
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub profile: ProfileDto,
    #[schema(value_type = String, example = "user")]
    pub role: Role,
}

/// A user with their role and saved addresses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserDetailDto {
    pub profile: ProfileDto,
    #[schema(value_type = String, example = "user")]
    pub role: Role,
    pub addresses: Vec<AddressDto>,
}

/// Query string of the admin user list
#[derive(Default, Deserialize, IntoParams)]
pub struct UserListParams {
    /// Case-insensitive substring of the name, or substring of the phone number
    pub search: Option<String>,
    /// Restrict to identities holding this role, `delivery` lists delivery partners
    #[param(value_type = Option<String>)]
    pub role: Option<Role>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Assign a role to a user
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    #[schema(value_type = String, example = "seller")]
    pub role: Role,
}

/// Update the caller's own profile
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: String,
    pub phone: Option<String>,
}

/// Landing payload for the role home of plain users
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub user_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub role: Option<Role>,
}
