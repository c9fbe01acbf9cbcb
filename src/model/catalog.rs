use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::server::policy::pricing::is_price_editable;

/// A catalog category
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::category::Model> for CategoryDto {
    fn from(category: entity::category::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            image_url: category.image_url,
            created_at: category.created_at,
        }
    }
}

/// Create a category, the slug is derived from the name
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryDto {
    pub name: String,
    pub image_url: Option<String>,
}

/// A catalog product
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub image_url: Option<String>,
    /// Free text category labels
    pub categories: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub in_stock: bool,
    pub price_mrp: Option<Decimal>,
    pub price_selling: Option<Decimal>,
    pub stock: Option<i32>,
    pub is_seller_editable: bool,
    /// Whether sellers may set their own price for this product
    pub price_editable: bool,
    pub created_at: NaiveDateTime,
}

/// Fields accepted when creating or updating a catalog product
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductInputDto {
    pub name: String,
    pub unit: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub categories: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub price_mrp: Option<Decimal>,
    pub price_selling: Option<Decimal>,
    pub stock: Option<i32>,
    #[serde(default)]
    pub is_seller_editable: bool,
}

fn default_in_stock() -> bool {
    true
}

/// Query string of the admin product list
#[derive(Deserialize, IntoParams)]
pub struct ProductSearchParams {
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Query string of the seller catalog search
#[derive(Deserialize, IntoParams)]
pub struct CatalogSearchParams {
    /// Case-insensitive substring of the product name
    pub q: Option<String>,
}

/// A product offered by a seller at the seller's own price
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerListingDto {
    pub id: i32,
    pub product_id: i32,
    pub price: Decimal,
    pub updated_at: NaiveDateTime,
    pub product: Option<ProductDto>,
}

/// List a catalog product for the calling seller
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddListingDto {
    pub product_id: i32,
    /// Ignored for products whose price is fixed by the catalog
    pub price: Option<Decimal>,
}

/// Change the price of a listing
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateListingPriceDto {
    pub price: Decimal,
}

impl From<entity::product::Model> for ProductDto {
    fn from(product: entity::product::Model) -> Self {
        let price_editable = is_price_editable(&product);

        Self {
            id: product.id,
            name: product.name,
            unit: product.unit,
            image_url: product.image_url,
            categories: product.categories,
            description: product.description,
            brand: product.brand,
            in_stock: product.in_stock,
            price_mrp: product.price_mrp,
            price_selling: product.price_selling,
            stock: product.stock,
            is_seller_editable: product.is_seller_editable,
            price_editable,
            created_at: product.created_at,
        }
    }
}

impl SellerListingDto {
    /// Builds the listing view, `product` is `None` when the product row is missing
    pub fn new(
        listing: entity::seller_specific_price::Model,
        product: Option<entity::product::Model>,
    ) -> Self {
        Self {
            id: listing.id,
            product_id: listing.product_id,
            price: listing.price,
            updated_at: listing.updated_at,
            product: product.map(ProductDto::from),
        }
    }
}
