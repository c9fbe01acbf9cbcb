use entity::sea_orm_active_enums::TechFeeType;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Repository for sellers
pub struct SellerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SellerRepository<'a, C> {
    /// Creates a new instance of [`SellerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a seller by ID
    pub async fn get(&self, seller_id: i32) -> Result<Option<entity::seller::Model>, DbErr> {
        entity::prelude::Seller::find_by_id(seller_id).one(self.db).await
    }

    /// Get the seller row owned by an account
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::seller::Model>, DbErr> {
        entity::prelude::Seller::find()
            .filter(entity::seller::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Get a seller together with the area it operates in
    pub async fn get_with_area(
        &self,
        seller_id: i32,
    ) -> Result<Option<(entity::seller::Model, Option<entity::area::Model>)>, DbErr> {
        entity::prelude::Seller::find_by_id(seller_id)
            .find_also_related(entity::area::Entity)
            .one(self.db)
            .await
    }

    /// List sellers newest first, optionally only active or only inactive ones
    pub async fn list(&self, is_active: Option<bool>) -> Result<Vec<entity::seller::Model>, DbErr> {
        let mut query = entity::prelude::Seller::find();

        if let Some(is_active) = is_active {
            query = query.filter(entity::seller::Column::IsActive.eq(is_active));
        }

        query
            .order_by_desc(entity::seller::Column::CreatedAt)
            .order_by_desc(entity::seller::Column::Id)
            .all(self.db)
            .await
    }

    /// Sellers with the given IDs, unknown IDs are skipped
    pub async fn find_by_ids(
        &self,
        seller_ids: &[i32],
    ) -> Result<Vec<entity::seller::Model>, DbErr> {
        if seller_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Seller::find()
            .filter(entity::seller::Column::Id.is_in(seller_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Replace the commercial terms and operating area of a seller
    ///
    /// Returns `None` if the seller does not exist.
    pub async fn update_financials(
        &self,
        seller_id: i32,
        commission_percentage: Decimal,
        tech_fee_type: TechFeeType,
        tech_fee_amount: Decimal,
        area_id: Option<i32>,
    ) -> Result<Option<entity::seller::Model>, DbErr> {
        let Some(seller) = self.get(seller_id).await? else {
            return Ok(None);
        };

        let mut seller_am = seller.into_active_model();
        seller_am.commission_percentage = ActiveValue::Set(commission_percentage);
        seller_am.tech_fee_type = ActiveValue::Set(tech_fee_type);
        seller_am.tech_fee_amount = ActiveValue::Set(tech_fee_amount);
        seller_am.area_id = ActiveValue::Set(area_id);

        let seller = seller_am.update(self.db).await?;

        Ok(Some(seller))
    }

    /// Returns `None` if the seller does not exist.
    pub async fn set_active(
        &self,
        seller_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::seller::Model>, DbErr> {
        let Some(seller) = self.get(seller_id).await? else {
            return Ok(None);
        };

        let mut seller_am = seller.into_active_model();
        seller_am.is_active = ActiveValue::Set(is_active);

        let seller = seller_am.update(self.db).await?;

        Ok(Some(seller))
    }

    /// Returns `None` if the seller does not exist.
    pub async fn assign_area(
        &self,
        seller_id: i32,
        area_id: i32,
    ) -> Result<Option<entity::seller::Model>, DbErr> {
        let Some(seller) = self.get(seller_id).await? else {
            return Ok(None);
        };

        let mut seller_am = seller.into_active_model();
        seller_am.area_id = ActiveValue::Set(Some(area_id));

        let seller = seller_am.update(self.db).await?;

        Ok(Some(seller))
    }
}
