//! A seller's own product listings.
//!
//! Sellers list products from the global catalog at their own price. Whether a seller may
//! choose that price is decided by [`crate::server::policy::pricing`].

#[cfg(test)]
mod tests;

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{AddListingDto, ProductDto, SellerListingDto},
    server::{
        data::{
            is_unique_violation, product::ProductRepository, seller_price::SellerPriceRepository,
        },
        error::{catalog::CatalogError, Error},
        policy::pricing::{check_price_update, listing_price},
    },
};

/// Maximum number of products returned by a catalog search
pub const CATALOG_SEARCH_LIMIT: u64 = 20;

pub struct SellerCatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SellerCatalogService<'a> {
    /// Creates a new instance of [`SellerCatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn listings(&self, seller_id: i32) -> Result<Vec<SellerListingDto>, Error> {
        let seller_price_repo = SellerPriceRepository::new(self.db);

        let listings = seller_price_repo.list_by_seller(seller_id).await?;

        Ok(listings
            .into_iter()
            .map(|(listing, product)| SellerListingDto::new(listing, product))
            .collect())
    }

    /// Catalog products whose name contains `query`, capped at [`CATALOG_SEARCH_LIMIT`]
    pub async fn search_catalog(&self, query: Option<&str>) -> Result<Vec<ProductDto>, Error> {
        let product_repo = ProductRepository::new(self.db);

        let query = query.map(str::trim).unwrap_or_default();
        let products = product_repo
            .find_by_name(query, CATALOG_SEARCH_LIMIT)
            .await?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Adds a catalog product to a seller's listings.
    ///
    /// The submitted price only applies to products whose price sellers may edit, every
    /// other product is listed at its catalog price.
    ///
    /// # Returns
    /// - `Ok(SellerListingDto)` - Listing created
    /// - `Err(Error::CatalogError(CatalogError::ProductNotFound))` - Unknown product
    /// - `Err(Error::CatalogError(CatalogError::AlreadyListed))` - Seller already lists it
    /// - `Err(Error::CatalogError(CatalogError::InvalidPrice))` - Missing or non-positive price
    /// - `Err(Error::CatalogError(CatalogError::MissingCatalogPrice))` - Fixed price product
    ///   without a catalog price
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn add_listing(
        &self,
        seller_id: i32,
        add: AddListingDto,
    ) -> Result<SellerListingDto, Error> {
        let product_repo = ProductRepository::new(self.db);
        let seller_price_repo = SellerPriceRepository::new(self.db);

        let Some(product) = product_repo.get(add.product_id).await? else {
            return Err(CatalogError::ProductNotFound(add.product_id).into());
        };

        if seller_price_repo.find(seller_id, product.id).await?.is_some() {
            return Err(CatalogError::AlreadyListed(product.id).into());
        }

        let price = listing_price(&product, add.price)?;
        let listing = match seller_price_repo.create(seller_id, product.id, price).await {
            Ok(listing) => listing,
            // Lost a race with a concurrent listing of the same product
            Err(err) if is_unique_violation(&err) => {
                return Err(CatalogError::AlreadyListed(product.id).into())
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            "Seller ID {} listed product ID {} at {}",
            seller_id,
            product.id,
            price
        );

        Ok(SellerListingDto::new(listing, Some(product)))
    }

    /// Changes the price of one of the seller's own listings.
    ///
    /// Listings of other sellers are reported as not found.
    ///
    /// # Returns
    /// - `Ok(SellerListingDto)` - Price updated
    /// - `Err(Error::CatalogError(CatalogError::ListingNotFound))` - No such listing for seller
    /// - `Err(Error::CatalogError(CatalogError::PriceNotEditable))` - Price fixed by catalog
    /// - `Err(Error::CatalogError(CatalogError::InvalidPrice))` - Non-positive price
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn update_price(
        &self,
        seller_id: i32,
        listing_id: i32,
        price: Decimal,
    ) -> Result<SellerListingDto, Error> {
        let seller_price_repo = SellerPriceRepository::new(self.db);

        let Some((listing, maybe_product)) =
            seller_price_repo.get_with_product(listing_id).await?
        else {
            return Err(CatalogError::ListingNotFound(listing_id).into());
        };

        if listing.seller_id != seller_id {
            return Err(CatalogError::ListingNotFound(listing_id).into());
        }

        let Some(product) = maybe_product else {
            return Err(CatalogError::ProductNotFound(listing.product_id).into());
        };

        check_price_update(&product, price)?;

        let Some(listing) = seller_price_repo.update_price(listing.id, price).await? else {
            return Err(CatalogError::ListingNotFound(listing_id).into());
        };

        tracing::info!(
            "Seller ID {} repriced listing ID {} to {}",
            seller_id,
            listing.id,
            price
        );

        Ok(SellerListingDto::new(listing, Some(product)))
    }
}
