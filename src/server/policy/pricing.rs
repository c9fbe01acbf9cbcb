//! Seller price editability.
//!
//! Sellers may set their own price for vegetables and for products explicitly flagged as
//! seller editable. Every other product is sold at the catalog price.

use rust_decimal::Decimal;

use crate::server::error::catalog::CatalogError;

/// Category marker that makes a product's price seller editable
const EDITABLE_CATEGORY_MARKER: &str = "veg";

/// Whether a seller may set their own price for the product
pub fn is_price_editable(product: &entity::product::Model) -> bool {
    categories_allow_pricing(&product.categories) || product.is_seller_editable
}

fn categories_allow_pricing(categories: &str) -> bool {
    categories
        .to_lowercase()
        .contains(EDITABLE_CATEGORY_MARKER)
}

/// The catalog price a non-editable product is listed at: selling price, else MRP
pub fn catalog_price(product: &entity::product::Model) -> Option<Decimal> {
    product.price_selling.or(product.price_mrp)
}

/// Resolves the price a new listing is stored with.
///
/// The submitted price is honored for editable products and ignored otherwise.
///
/// # Returns
/// - `Ok(Decimal)` - price greater than zero
/// - `Err(CatalogError::InvalidPrice)` - editable product without a positive submitted price,
///   or a non-positive catalog price
/// - `Err(CatalogError::MissingCatalogPrice)` - non-editable product without any catalog price
pub fn listing_price(
    product: &entity::product::Model,
    submitted: Option<Decimal>,
) -> Result<Decimal, CatalogError> {
    let price = if is_price_editable(product) {
        submitted.ok_or(CatalogError::InvalidPrice)?
    } else {
        catalog_price(product).ok_or(CatalogError::MissingCatalogPrice(product.id))?
    };

    ensure_positive(price)?;

    Ok(price)
}

/// Validates a seller initiated price change on an existing listing
pub fn check_price_update(
    product: &entity::product::Model,
    price: Decimal,
) -> Result<(), CatalogError> {
    if !is_price_editable(product) {
        return Err(CatalogError::PriceNotEditable(product.id));
    }

    ensure_positive(price)
}

fn ensure_positive(price: Decimal) -> Result<(), CatalogError> {
    if price <= Decimal::ZERO {
        return Err(CatalogError::InvalidPrice);
    }

    Ok(())
}
