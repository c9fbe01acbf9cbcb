use chrono::Utc;
use entity::sea_orm_active_enums::{Role, TechFeeType};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn seller<'a>(&'a self) -> SellerFixtures<'a> {
        SellerFixtures { setup: self }
    }
}

pub struct SellerFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SellerFixtures<'a> {
    pub async fn insert_area(&self, name: &str) -> Result<entity::area::Model, TestError> {
        Ok(
            entity::prelude::Area::insert(entity::area::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                pincode: ActiveValue::Set(Some("560038".to_string())),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an active seller charging 10% commission and a per-order tech fee of 5.
    ///
    /// Creates the account, profile and `seller` role the seller row depends on.
    pub async fn insert_seller(
        &self,
        phone: &str,
        seller_name: &str,
    ) -> Result<(entity::account::Model, entity::seller::Model), TestError> {
        self.insert_seller_with_terms(phone, seller_name, 10, TechFeeType::PerOrder, 5)
            .await
    }

    pub async fn insert_seller_with_terms(
        &self,
        phone: &str,
        seller_name: &str,
        commission_percentage: i64,
        tech_fee_type: TechFeeType,
        tech_fee_amount: i64,
    ) -> Result<(entity::account::Model, entity::seller::Model), TestError> {
        let (account, _) = self
            .setup
            .user()
            .insert_user_with_role(phone, seller_name, Role::Seller)
            .await?;

        let seller = entity::prelude::Seller::insert(entity::seller::ActiveModel {
            user_id: ActiveValue::Set(account.id),
            seller_name: ActiveValue::Set(seller_name.to_string()),
            area_id: ActiveValue::Set(None),
            commission_percentage: ActiveValue::Set(Decimal::from(commission_percentage)),
            tech_fee_type: ActiveValue::Set(tech_fee_type),
            tech_fee_amount: ActiveValue::Set(Decimal::from(tech_fee_amount)),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        Ok((account, seller))
    }

    /// Move a seller into an area and set whether it has been verified
    pub async fn place_seller(
        &self,
        seller: entity::seller::Model,
        area_id: Option<i32>,
        is_active: bool,
    ) -> Result<entity::seller::Model, TestError> {
        let mut seller_am = seller.into_active_model();
        seller_am.area_id = ActiveValue::Set(area_id);
        seller_am.is_active = ActiveValue::Set(is_active);

        Ok(seller_am.update(&self.setup.db).await?)
    }
}
