//! Category and product administration.

#[cfg(test)]
mod tests;

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::{PageRequest, Paginated},
        catalog::{CategoryDto, CreateCategoryDto, ProductDto, ProductInputDto, ProductSearchParams},
    },
    server::{
        data::{
            category::CategoryRepository, is_unique_violation, order::OrderRepository,
            product::ProductRepository, seller_price::SellerPriceRepository,
        },
        error::{catalog::CatalogError, Error},
        util::slug::slugify,
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryDto>, Error> {
        let category_repo = CategoryRepository::new(self.db);

        let categories = category_repo.list().await?;

        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    /// Creates a category whose slug is derived from its name.
    ///
    /// # Returns
    /// - `Ok(CategoryDto)` - Category created
    /// - `Err(Error::CatalogError(CatalogError::Validation))` - Blank name
    /// - `Err(Error::CatalogError(CatalogError::DuplicateSlug))` - Slug already taken
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn create_category(&self, create: CreateCategoryDto) -> Result<CategoryDto, Error> {
        let category_repo = CategoryRepository::new(self.db);

        let slug = slugify(&create.name);
        if slug.is_empty() {
            return Err(CatalogError::Validation("Category name is required".to_string()).into());
        }

        if category_repo.find_by_slug(&slug).await?.is_some() {
            return Err(CatalogError::DuplicateSlug(slug).into());
        }

        let image_url = create.image_url.filter(|url| !url.trim().is_empty());
        let category = match category_repo
            .create(create.name.trim(), &slug, image_url)
            .await
        {
            Ok(category) => category,
            Err(err) if is_unique_violation(&err) => {
                return Err(CatalogError::DuplicateSlug(slug).into())
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!("Created category {} ({})", category.name, category.slug);

        Ok(CategoryDto::from(category))
    }

    pub async fn delete_category(&self, category_id: i32) -> Result<(), Error> {
        let category_repo = CategoryRepository::new(self.db);

        let result = category_repo.delete(category_id).await?;
        if result.rows_affected == 0 {
            return Err(CatalogError::CategoryNotFound(category_id).into());
        }

        tracing::info!("Deleted category ID {}", category_id);

        Ok(())
    }

    pub async fn list_products(
        &self,
        params: ProductSearchParams,
    ) -> Result<Paginated<ProductDto>, Error> {
        let product_repo = ProductRepository::new(self.db);

        let page = PageRequest::new(params.page, params.per_page);
        let (products, total) = product_repo.search(params.search.as_deref(), page).await?;

        Ok(page.wrap(products.into_iter().map(ProductDto::from).collect(), total))
    }

    pub async fn product(&self, product_id: i32) -> Result<ProductDto, Error> {
        let product_repo = ProductRepository::new(self.db);

        let Some(product) = product_repo.get(product_id).await? else {
            return Err(CatalogError::ProductNotFound(product_id).into());
        };

        Ok(ProductDto::from(product))
    }

    pub async fn create_product(&self, input: ProductInputDto) -> Result<ProductDto, Error> {
        let product_repo = ProductRepository::new(self.db);

        let input = validate_product(input)?;
        let product = product_repo.create(input).await?;

        tracing::info!("Created product {} with ID {}", product.name, product.id);

        Ok(ProductDto::from(product))
    }

    pub async fn update_product(
        &self,
        product_id: i32,
        input: ProductInputDto,
    ) -> Result<ProductDto, Error> {
        let product_repo = ProductRepository::new(self.db);

        let input = validate_product(input)?;
        let Some(product) = product_repo.update(product_id, input).await? else {
            return Err(CatalogError::ProductNotFound(product_id).into());
        };

        Ok(ProductDto::from(product))
    }

    /// Removes a product from the catalog together with every seller listing of it.
    ///
    /// Past order items keep their name and price but lose the link to the product.
    ///
    /// # Returns
    /// - `Ok(())` - Product deleted
    /// - `Err(Error::CatalogError(CatalogError::ProductNotFound))` - No product with this ID
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn delete_product(&self, product_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let product_repo = ProductRepository::new(&txn);

        if product_repo.get(product_id).await?.is_none() {
            txn.rollback().await?;

            return Err(CatalogError::ProductNotFound(product_id).into());
        }

        let listings = SellerPriceRepository::new(&txn)
            .delete_by_product(product_id)
            .await?;
        OrderRepository::new(&txn).detach_product(product_id).await?;
        product_repo.delete(product_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted product ID {} and {} seller listings",
            product_id,
            listings.rows_affected
        );

        Ok(())
    }
}

/// Trims text fields and rejects blank names, blank units and negative amounts
fn validate_product(mut input: ProductInputDto) -> Result<ProductInputDto, CatalogError> {
    input.name = input.name.trim().to_string();
    input.unit = input.unit.trim().to_string();

    if input.name.is_empty() {
        return Err(CatalogError::Validation("Product name is required".to_string()));
    }
    if input.unit.is_empty() {
        return Err(CatalogError::Validation("Product unit is required".to_string()));
    }

    let negative_price = [input.price_mrp, input.price_selling]
        .into_iter()
        .flatten()
        .any(|price| price < Decimal::ZERO);
    if negative_price {
        return Err(CatalogError::Validation("Prices must not be negative".to_string()));
    }

    if input.stock.is_some_and(|stock| stock < 0) {
        return Err(CatalogError::Validation("Stock must not be negative".to_string()));
    }

    Ok(input)
}
