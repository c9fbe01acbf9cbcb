use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised by catalog and seller listing operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No product with the given ID
    #[error("Product ID {0:?} not found")]
    ProductNotFound(i32),
    /// No category with the given ID
    #[error("Category ID {0:?} not found")]
    CategoryNotFound(i32),
    /// No seller listing with the given ID
    #[error("Seller listing ID {0:?} not found")]
    ListingNotFound(i32),
    /// Another category already uses the slug
    #[error("Category slug {0:?} is already in use")]
    DuplicateSlug(String),
    /// Input failed validation, the message is shown to the caller
    #[error("Invalid catalog input: {0}")]
    Validation(String),
    /// The product's price is fixed and sellers may not override it
    #[error("Price of product ID {0:?} is fixed by the catalog")]
    PriceNotEditable(i32),
    /// The seller already has a listing for the product
    #[error("Product ID {0:?} is already listed by this seller")]
    AlreadyListed(i32),
    /// A listing price was zero or negative
    #[error("Listing price must be greater than zero")]
    InvalidPrice,
    /// The product has neither a base price nor an MRP
    #[error("Product ID {0:?} has no catalog price to list at")]
    MissingCatalogPrice(i32),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::ProductNotFound(_) => error_response(StatusCode::NOT_FOUND, "Product not found"),
            Self::CategoryNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Category not found")
            }
            Self::ListingNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Product listing not found")
            }
            Self::DuplicateSlug(_) => error_response(
                StatusCode::CONFLICT,
                "A category with this name already exists",
            ),
            Self::Validation(message) => error_response(StatusCode::BAD_REQUEST, message),
            Self::PriceNotEditable(_) => error_response(
                StatusCode::FORBIDDEN,
                "The price of this product is set by the catalog and cannot be changed",
            ),
            Self::AlreadyListed(_) => error_response(
                StatusCode::CONFLICT,
                "This product is already in your catalog",
            ),
            Self::InvalidPrice => error_response(
                StatusCode::BAD_REQUEST,
                "Price must be greater than zero",
            ),
            Self::MissingCatalogPrice(_) => error_response(
                StatusCode::BAD_REQUEST,
                "This product has no catalog price yet and cannot be listed",
            ),
        }
    }
}
