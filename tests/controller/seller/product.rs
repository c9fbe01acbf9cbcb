use axum::extract::{Path, Query};
use bazaar::{
    model::catalog::{
        AddListingDto, CatalogSearchParams, ProductDto, SellerListingDto, UpdateListingPriceDto,
    },
    server::controller::seller::product::{add_listing, search_catalog, update_listing_price},
};
use rust_decimal::Decimal;

use super::*;

/// Expect a veg product to be listed at the submitted price
#[tokio::test]
async fn lists_editable_product_at_submitted_price() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    login_as_seller(&test).await?;
    let product = test.catalog().insert_product("Tomato", "Veg, Fresh").await?;

    let result = add_listing(
        State(test.into_app_state()),
        test.session.clone(),
        Json(AddListingDto {
            product_id: product.id,
            price: Some(Decimal::from(40)),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let listing: SellerListingDto = json_body(resp).await;
    assert_eq!(listing.price, Decimal::from(40));

    Ok(())
}

/// Expect 403 when repricing a product whose price is fixed by the catalog
#[tokio::test]
async fn refuses_price_change_on_fixed_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let seller = login_as_seller(&test).await?;
    let product = test.catalog().insert_product("Basmati Rice", "Grocery").await?;
    let listing = test
        .catalog()
        .insert_listing(seller.id, product.id, 100)
        .await?;

    let result = update_listing_price(
        State(test.into_app_state()),
        test.session.clone(),
        Path(listing.id),
        Json(UpdateListingPriceDto {
            price: Decimal::from(90),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect catalog search to match names case-insensitively
#[tokio::test]
async fn searches_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    login_as_seller(&test).await?;
    test.catalog().insert_product("Tomato", "Veg").await?;
    test.catalog().insert_product("Toor Dal", "Grocery").await?;

    let result = search_catalog(
        State(test.into_app_state()),
        test.session.clone(),
        Query(CatalogSearchParams {
            q: Some("TOMA".to_string()),
        }),
    )
    .await;

    let products: Vec<ProductDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Tomato");

    Ok(())
}
