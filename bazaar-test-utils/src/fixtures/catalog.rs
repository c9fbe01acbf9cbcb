use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_category(&self, name: &str) -> Result<entity::category::Model, TestError> {
        let slug = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();

        Ok(
            entity::prelude::Category::insert(entity::category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(slug),
                image_url: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a product selling at 100 with an MRP of 120 that sellers cannot reprice
    /// unless `categories` mentions veg.
    pub async fn insert_product(
        &self,
        name: &str,
        categories: &str,
    ) -> Result<entity::product::Model, TestError> {
        self.insert_product_with(
            name,
            categories,
            Some(Decimal::from(100)),
            Some(Decimal::from(120)),
            false,
        )
        .await
    }

    pub async fn insert_product_with(
        &self,
        name: &str,
        categories: &str,
        price_selling: Option<Decimal>,
        price_mrp: Option<Decimal>,
        is_seller_editable: bool,
    ) -> Result<entity::product::Model, TestError> {
        Ok(
            entity::prelude::Product::insert(entity::product::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                unit: ActiveValue::Set("1 kg".to_string()),
                image_url: ActiveValue::Set(None),
                categories: ActiveValue::Set(categories.to_string()),
                description: ActiveValue::Set(None),
                brand: ActiveValue::Set(None),
                in_stock: ActiveValue::Set(true),
                price_mrp: ActiveValue::Set(price_mrp),
                price_selling: ActiveValue::Set(price_selling),
                stock: ActiveValue::Set(Some(25)),
                is_seller_editable: ActiveValue::Set(is_seller_editable),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_listing(
        &self,
        seller_id: i32,
        product_id: i32,
        price: i64,
    ) -> Result<entity::seller_specific_price::Model, TestError> {
        Ok(entity::prelude::SellerSpecificPrice::insert(
            entity::seller_specific_price::ActiveModel {
                seller_id: ActiveValue::Set(seller_id),
                product_id: ActiveValue::Set(product_id),
                price: ActiveValue::Set(Decimal::from(price)),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
