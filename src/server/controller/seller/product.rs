use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{
            AddListingDto, CatalogSearchParams, ProductDto, SellerListingDto,
            UpdateListingPriceDto,
        },
    },
    server::{
        controller::{seller::SELLER_TAG, util::session::current_seller},
        error::Error,
        model::app::AppState,
        service::seller_catalog::SellerCatalogService,
    },
};

/// Products the caller lists, with the caller's prices
#[utoipa::path(
    get,
    path = "/seller/products",
    tag = SELLER_TAG,
    responses(
        (status = 200, description = "Seller listings", body = Vec<SellerListingDto>),
        (status = 403, description = "Caller is not a seller", body = ErrorDto),
        (status = 404, description = "Seller account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seller_listings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let seller = current_seller(&state, &session).await?;

    let listings = SellerCatalogService::new(&state.db)
        .listings(seller.id)
        .await?;

    Ok(Json(listings))
}

/// Search the global catalog for products to list
#[utoipa::path(
    get,
    path = "/seller/catalog",
    tag = SELLER_TAG,
    params(CatalogSearchParams),
    responses(
        (status = 200, description = "Up to 20 matching products", body = Vec<ProductDto>),
        (status = 403, description = "Caller is not a seller", body = ErrorDto),
        (status = 404, description = "Seller account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_catalog(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CatalogSearchParams>,
) -> Result<impl IntoResponse, Error> {
    current_seller(&state, &session).await?;

    let products = SellerCatalogService::new(&state.db)
        .search_catalog(params.q.as_deref())
        .await?;

    Ok(Json(products))
}

/// Add a catalog product to the caller's listings
///
/// The submitted price only applies to products sellers may reprice, other products are
/// listed at their catalog price.
#[utoipa::path(
    post,
    path = "/seller/products",
    tag = SELLER_TAG,
    request_body = AddListingDto,
    responses(
        (status = 201, description = "Created listing", body = SellerListingDto),
        (status = 400, description = "Price missing or not positive", body = ErrorDto),
        (status = 403, description = "Caller is not a seller", body = ErrorDto),
        (status = 404, description = "Product or seller account not found", body = ErrorDto),
        (status = 409, description = "Product already listed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_listing(
    State(state): State<AppState>,
    session: Session,
    Json(add): Json<AddListingDto>,
) -> Result<impl IntoResponse, Error> {
    let seller = current_seller(&state, &session).await?;

    let listing = SellerCatalogService::new(&state.db)
        .add_listing(seller.id, add)
        .await?;

    Ok((StatusCode::CREATED, Json(listing)))
}

/// Change the price of one of the caller's listings
#[utoipa::path(
    put,
    path = "/seller/products/{id}/price",
    tag = SELLER_TAG,
    params(("id" = i32, Path, description = "Listing ID")),
    request_body = UpdateListingPriceDto,
    responses(
        (status = 200, description = "Updated listing", body = SellerListingDto),
        (status = 400, description = "Price not positive", body = ErrorDto),
        (status = 403, description = "Price fixed by the catalog", body = ErrorDto),
        (status = 404, description = "Listing or seller account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_listing_price(
    State(state): State<AppState>,
    session: Session,
    Path(listing_id): Path<i32>,
    Json(update): Json<UpdateListingPriceDto>,
) -> Result<impl IntoResponse, Error> {
    let seller = current_seller(&state, &session).await?;

    let listing = SellerCatalogService::new(&state.db)
        .update_price(seller.id, listing_id, update.price)
        .await?;

    Ok(Json(listing))
}
