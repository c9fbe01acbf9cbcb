use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::TechFeeType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::user::ProfileDto;

/// A seller with their commercial terms
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerDto {
    pub id: i32,
    pub user_id: i32,
    pub seller_name: String,
    pub area_id: Option<i32>,
    pub commission_percentage: Decimal,
    #[schema(value_type = String, example = "per_order")]
    pub tech_fee_type: TechFeeType,
    pub tech_fee_amount: Decimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::seller::Model> for SellerDto {
    fn from(seller: entity::seller::Model) -> Self {
        Self {
            id: seller.id,
            user_id: seller.user_id,
            seller_name: seller.seller_name,
            area_id: seller.area_id,
            commission_percentage: seller.commission_percentage,
            tech_fee_type: seller.tech_fee_type,
            tech_fee_amount: seller.tech_fee_amount,
            is_active: seller.is_active,
            created_at: seller.created_at,
        }
    }
}

/// Seller name and contact shown next to an order
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerSummaryDto {
    pub id: i32,
    pub seller_name: String,
}

impl From<entity::seller::Model> for SellerSummaryDto {
    fn from(seller: entity::seller::Model) -> Self {
        Self {
            id: seller.id,
            seller_name: seller.seller_name,
        }
    }
}

/// A seller with their owner's profile and area
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SellerDetailDto {
    pub seller: SellerDto,
    pub profile: Option<ProfileDto>,
    pub area: Option<AreaDto>,
}

/// Replace a seller's commercial terms and area
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateSellerFinancialsDto {
    /// Percentage of the subtotal kept as commission, 0 to 100
    pub commission_percentage: Decimal,
    #[schema(value_type = String, example = "per_order")]
    pub tech_fee_type: TechFeeType,
    pub tech_fee_amount: Decimal,
    /// Must reference an active area when present
    pub area_id: Option<i32>,
}

/// Toggle the active flag of a seller or area
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetActiveDto {
    pub is_active: bool,
}

/// Which sellers the admin seller list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SellerStatusFilter {
    /// Every seller
    #[default]
    All,
    /// Verified sellers only
    Active,
    /// Sellers awaiting verification or suspended
    Inactive,
}

/// Query string of the admin seller list
#[derive(Default, Deserialize, IntoParams)]
pub struct SellerListParams {
    /// One of `all`, `active` or `inactive`
    #[param(value_type = Option<String>)]
    pub status: Option<SellerStatusFilter>,
}

/// A delivery area
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaDto {
    pub id: i32,
    pub name: String,
    pub pincode: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::area::Model> for AreaDto {
    fn from(area: entity::area::Model) -> Self {
        Self {
            id: area.id,
            name: area.name,
            pincode: area.pincode,
            is_active: area.is_active,
            created_at: area.created_at,
        }
    }
}

/// An area with the seller serving it, if any
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AreaWithSellerDto {
    pub area: AreaDto,
    pub seller: Option<SellerSummaryDto>,
}

/// Create a delivery area
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateAreaDto {
    pub name: String,
    pub pincode: Option<String>,
    /// Seller to assign to the new area
    pub seller_id: Option<i32>,
}
