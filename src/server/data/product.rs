use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::{api::PageRequest, catalog::ProductInputDto},
    server::data::contains_ignore_case,
};

/// Repository for catalog products
pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a product from the admin input
    pub async fn create(&self, input: ProductInputDto) -> Result<entity::product::Model, DbErr> {
        let mut product = entity::product::ActiveModel {
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        apply_input(&mut product, input);

        product.insert(self.db).await
    }

    /// Get a product by ID
    pub async fn get(&self, product_id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await
    }

    /// Replace every editable field of a product
    ///
    /// Returns `None` if the product does not exist.
    pub async fn update(
        &self,
        product_id: i32,
        input: ProductInputDto,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = self.get(product_id).await? else {
            return Ok(None);
        };

        let mut product_am = product.into_active_model();
        apply_input(&mut product_am, input);

        let product = product_am.update(self.db).await?;

        Ok(Some(product))
    }

    /// One page of products by name, optionally filtered by a case-insensitive name match
    pub async fn search(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<(Vec<entity::product::Model>, u64), DbErr> {
        let mut query = entity::prelude::Product::find();

        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(contains_ignore_case(entity::product::Column::Name, search));
        }

        let paginator = query
            .order_by_asc(entity::product::Column::Name)
            .order_by_asc(entity::product::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let products = paginator.fetch_page(page.index()).await?;

        Ok((products, total))
    }

    /// At most `limit` products whose name contains `name`, sorted by name
    pub async fn find_by_name(
        &self,
        name: &str,
        limit: u64,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(contains_ignore_case(entity::product::Column::Name, name))
            .order_by_asc(entity::product::Column::Name)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Check [`DeleteResult::rows_affected`] to learn whether the product existed
    pub async fn delete(&self, product_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Product::delete_by_id(product_id)
            .exec(self.db)
            .await
    }
}

fn apply_input(product: &mut entity::product::ActiveModel, input: ProductInputDto) {
    product.name = ActiveValue::Set(input.name);
    product.unit = ActiveValue::Set(input.unit);
    product.image_url = ActiveValue::Set(input.image_url);
    product.categories = ActiveValue::Set(input.categories);
    product.description = ActiveValue::Set(input.description);
    product.brand = ActiveValue::Set(input.brand);
    product.in_stock = ActiveValue::Set(input.in_stock);
    product.price_mrp = ActiveValue::Set(input.price_mrp);
    product.price_selling = ActiveValue::Set(input.price_selling);
    product.stock = ActiveValue::Set(input.stock);
    product.is_seller_editable = ActiveValue::Set(input.is_seller_editable);
}

#[cfg(test)]
mod tests {

    mod search {
        use bazaar_test_utils::prelude::*;

        use crate::{model::api::PageRequest, server::data::product::ProductRepository};

        /// Expect name search to ignore case
        #[tokio::test]
        async fn matches_name_case_insensitively() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            test.catalog().insert_product("Fresh Tomato", "Veg").await?;
            test.catalog().insert_product("Toned Milk", "Dairy").await?;

            let product_repo = ProductRepository::new(&test.db);
            let (products, total) = product_repo
                .search(Some("tomato"), PageRequest::default())
                .await?;

            assert_eq!(total, 1);
            assert_eq!(products[0].name, "Fresh Tomato");

            Ok(())
        }

        /// Expect every product when the search is blank
        #[tokio::test]
        async fn blank_search_lists_everything() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            test.catalog().insert_product("Fresh Tomato", "Veg").await?;
            test.catalog().insert_product("Toned Milk", "Dairy").await?;

            let product_repo = ProductRepository::new(&test.db);
            let (products, total) = product_repo
                .search(Some("  "), PageRequest::default())
                .await?;

            assert_eq!(total, 2);
            assert_eq!(products.len(), 2);

            Ok(())
        }
    }

    mod find_by_name {
        use bazaar_test_utils::prelude::*;

        use crate::server::data::product::ProductRepository;

        /// Expect the result to be capped at the limit
        #[tokio::test]
        async fn respects_limit() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            for i in 0..3 {
                test.catalog()
                    .insert_product(&format!("Onion {}", i), "Veg")
                    .await?;
            }

            let product_repo = ProductRepository::new(&test.db);
            let result = product_repo.find_by_name("onion", 2).await?;

            assert_eq!(result.len(), 2);

            Ok(())
        }
    }
}
