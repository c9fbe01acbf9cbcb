use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Seller specific listings of catalog products
pub struct SellerPriceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SellerPriceRepository<'a, C> {
    /// Creates a new instance of [`SellerPriceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists a product for a seller at `price`.
    ///
    /// Fails with a unique constraint violation if the seller already lists the product.
    pub async fn create(
        &self,
        seller_id: i32,
        product_id: i32,
        price: Decimal,
    ) -> Result<entity::seller_specific_price::Model, DbErr> {
        let listing = entity::seller_specific_price::ActiveModel {
            seller_id: ActiveValue::Set(seller_id),
            product_id: ActiveValue::Set(product_id),
            price: ActiveValue::Set(price),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        listing.insert(self.db).await
    }

    /// Get the listing of a product by a seller, if the seller lists it
    pub async fn find(
        &self,
        seller_id: i32,
        product_id: i32,
    ) -> Result<Option<entity::seller_specific_price::Model>, DbErr> {
        entity::prelude::SellerSpecificPrice::find()
            .filter(entity::seller_specific_price::Column::SellerId.eq(seller_id))
            .filter(entity::seller_specific_price::Column::ProductId.eq(product_id))
            .one(self.db)
            .await
    }

    /// Get a listing together with its product
    pub async fn get_with_product(
        &self,
        listing_id: i32,
    ) -> Result<
        Option<(
            entity::seller_specific_price::Model,
            Option<entity::product::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::SellerSpecificPrice::find_by_id(listing_id)
            .find_also_related(entity::product::Entity)
            .one(self.db)
            .await
    }

    /// Every listing of a seller with its product, most recently priced first
    pub async fn list_by_seller(
        &self,
        seller_id: i32,
    ) -> Result<
        Vec<(
            entity::seller_specific_price::Model,
            Option<entity::product::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::SellerSpecificPrice::find()
            .filter(entity::seller_specific_price::Column::SellerId.eq(seller_id))
            .order_by_desc(entity::seller_specific_price::Column::UpdatedAt)
            .order_by_desc(entity::seller_specific_price::Column::Id)
            .find_also_related(entity::product::Entity)
            .all(self.db)
            .await
    }

    /// Number of products a seller lists
    pub async fn count_by_seller(&self, seller_id: i32) -> Result<u64, DbErr> {
        entity::prelude::SellerSpecificPrice::find()
            .filter(entity::seller_specific_price::Column::SellerId.eq(seller_id))
            .count(self.db)
            .await
    }

    /// Returns `None` if the listing does not exist.
    pub async fn update_price(
        &self,
        listing_id: i32,
        price: Decimal,
    ) -> Result<Option<entity::seller_specific_price::Model>, DbErr> {
        let Some(listing) = entity::prelude::SellerSpecificPrice::find_by_id(listing_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut listing_am = listing.into_active_model();
        listing_am.price = ActiveValue::Set(price);
        listing_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let listing = listing_am.update(self.db).await?;

        Ok(Some(listing))
    }

    /// Removes every seller listing of a product
    pub async fn delete_by_product(&self, product_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SellerSpecificPrice::delete_many()
            .filter(entity::seller_specific_price::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use bazaar_test_utils::prelude::*;
        use rust_decimal::Decimal;

        use crate::server::data::{is_unique_violation, seller_price::SellerPriceRepository};

        /// Expect a second listing of the same product to be refused by the unique index
        #[tokio::test]
        async fn refuses_duplicate_listing() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let (_, seller) = test
                .seller()
                .insert_seller("+919000000001", "Fresh Farms")
                .await?;
            let product = test.catalog().insert_product("Tomato", "Veg").await?;

            let listing_repo = SellerPriceRepository::new(&test.db);
            listing_repo
                .create(seller.id, product.id, Decimal::from(40))
                .await?;
            let result = listing_repo
                .create(seller.id, product.id, Decimal::from(42))
                .await;

            assert!(result.is_err_and(|err| is_unique_violation(&err)));

            Ok(())
        }
    }

    mod list_by_seller {
        use bazaar_test_utils::prelude::*;

        use crate::server::data::seller_price::SellerPriceRepository;

        /// Expect only the seller's own listings, each with its product
        #[tokio::test]
        async fn returns_own_listings() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let (_, seller) = test
                .seller()
                .insert_seller("+919000000001", "Fresh Farms")
                .await?;
            let (_, other) = test
                .seller()
                .insert_seller("+919000000002", "Green Basket")
                .await?;
            let product = test.catalog().insert_product("Tomato", "Veg").await?;
            test.catalog().insert_listing(seller.id, product.id, 40).await?;
            test.catalog().insert_listing(other.id, product.id, 45).await?;

            let listing_repo = SellerPriceRepository::new(&test.db);
            let result = listing_repo.list_by_seller(seller.id).await?;

            assert_eq!(result.len(), 1);
            assert_eq!(result[0].0.seller_id, seller.id);
            assert_eq!(result[0].1.as_ref().map(|p| p.id), Some(product.id));
            assert_eq!(listing_repo.count_by_seller(seller.id).await?, 1);

            Ok(())
        }
    }

    mod find {
        use bazaar_test_utils::prelude::*;

        use crate::server::data::seller_price::SellerPriceRepository;

        /// Expect None when the seller has not listed the product
        #[tokio::test]
        async fn returns_none_for_unlisted_product() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let (_, seller) = test
                .seller()
                .insert_seller(TEST_SELLER_PHONE, "Fresh Farms")
                .await?;
            let product = test.catalog().insert_product("Tomato", "Veg").await?;

            let listing_repo = SellerPriceRepository::new(&test.db);
            let result = listing_repo.find(seller.id, product.id).await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod update_price {
        use bazaar_test_utils::prelude::*;
        use rust_decimal::Decimal;

        use crate::server::data::seller_price::SellerPriceRepository;

        /// Expect the new price to be stored
        #[tokio::test]
        async fn updates_price() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let (_, seller) = test
                .seller()
                .insert_seller(TEST_SELLER_PHONE, "Fresh Farms")
                .await?;
            let product = test.catalog().insert_product("Tomato", "Veg").await?;
            let listing = test.catalog().insert_listing(seller.id, product.id, 40).await?;

            let listing_repo = SellerPriceRepository::new(&test.db);
            let result = listing_repo
                .update_price(listing.id, Decimal::from(35))
                .await?;

            assert_eq!(result.unwrap().price, Decimal::from(35));

            Ok(())
        }
    }
}
