use axum::extract::Path;
use bazaar::{
    model::catalog::{CategoryDto, CreateCategoryDto},
    server::controller::admin::catalog::{create_category, delete_category, delete_product},
};

use super::*;

fn category(name: &str) -> Json<CreateCategoryDto> {
    Json(CreateCategoryDto {
        name: name.to_string(),
        image_url: None,
    })
}

/// Expect 201 with a derived slug, then 409 for a name producing the same slug
#[tokio::test]
async fn creates_category_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;

    let result = create_category(
        State(test.into_app_state()),
        test.session.clone(),
        category("Fresh Vegetables"),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: CategoryDto = json_body(resp).await;
    assert_eq!(created.slug, "fresh-vegetables");

    let result = create_category(
        State(test.into_app_state()),
        test.session.clone(),
        category("fresh  vegetables"),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 204 when deleting a category and 404 when it is already gone
#[tokio::test]
async fn deletes_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let existing = test.catalog().insert_category("Dairy").await?;

    let result = delete_category(
        State(test.into_app_state()),
        test.session.clone(),
        Path(existing.id),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let result = delete_category(
        State(test.into_app_state()),
        test.session.clone(),
        Path(existing.id),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204 when deleting a listed product and 404 once it is gone
#[tokio::test]
async fn deletes_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let (_, seller) = test
        .seller()
        .insert_seller(TEST_SELLER_PHONE, "Fresh Farms")
        .await?;
    let product = test.catalog().insert_product("Paneer", "dairy").await?;
    test.catalog().insert_listing(seller.id, product.id, 90).await?;

    let result = delete_product(
        State(test.into_app_state()),
        test.session.clone(),
        Path(product.id),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let result = delete_product(
        State(test.into_app_state()),
        test.session.clone(),
        Path(product.id),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 403 for sellers trying to delete catalog products
#[tokio::test]
async fn rejects_seller_deleting_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_order_tables().build().await?;
    login_with_role(&test, TEST_SELLER_PHONE, Role::Seller).await?;
    let product = test.catalog().insert_product("Paneer", "dairy").await?;

    let result = delete_product(
        State(test.into_app_state()),
        test.session.clone(),
        Path(product.id),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
