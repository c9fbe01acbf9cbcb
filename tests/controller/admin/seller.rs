use axum::extract::{Path, Query};
use bazaar::{
    model::seller::{
        AreaWithSellerDto, CreateAreaDto, SellerDto, SellerListParams, SellerStatusFilter,
        SetActiveDto, UpdateSellerFinancialsDto,
    },
    server::controller::admin::{
        area::create_area,
        seller::{list_sellers, set_seller_active, update_seller_financials},
    },
};
use entity::sea_orm_active_enums::TechFeeType;
use rust_decimal::Decimal;

use super::*;

/// Expect the inactive filter to list only deactivated sellers
#[tokio::test]
async fn filters_sellers_by_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seller_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let (_, seller) = test
        .seller()
        .insert_seller(TEST_SELLER_PHONE, "Fresh Mart")
        .await?;

    let result = set_seller_active(
        State(test.into_app_state()),
        test.session.clone(),
        Path(seller.id),
        Json(SetActiveDto { is_active: false }),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = list_sellers(
        State(test.into_app_state()),
        test.session.clone(),
        Query(SellerListParams {
            status: Some(SellerStatusFilter::Inactive),
        }),
    )
    .await;
    let sellers: Vec<SellerDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(sellers.len(), 1);
    assert!(!sellers[0].is_active);

    Ok(())
}

/// Expect 400 for a commission above 100 percent
#[tokio::test]
async fn rejects_out_of_range_commission() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seller_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let (_, seller) = test
        .seller()
        .insert_seller(TEST_SELLER_PHONE, "Fresh Mart")
        .await?;

    let result = update_seller_financials(
        State(test.into_app_state()),
        test.session.clone(),
        Path(seller.id),
        Json(UpdateSellerFinancialsDto {
            commission_percentage: Decimal::from(150),
            tech_fee_type: TechFeeType::Fixed,
            tech_fee_amount: Decimal::from(10),
            area_id: None,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 201 with the assigned seller when creating an area
#[tokio::test]
async fn creates_area_with_seller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seller_tables().build().await?;
    login_with_role(&test, TEST_PHONE, Role::Admin).await?;
    let (_, seller) = test
        .seller()
        .insert_seller(TEST_SELLER_PHONE, "Fresh Mart")
        .await?;

    let result = create_area(
        State(test.into_app_state()),
        test.session.clone(),
        Json(CreateAreaDto {
            name: "Indiranagar".to_string(),
            pincode: Some("560038".to_string()),
            seller_id: Some(seller.id),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let area: AreaWithSellerDto = json_body(resp).await;
    assert_eq!(area.area.name, "Indiranagar");
    assert_eq!(area.seller.map(|s| s.id), Some(seller.id));

    Ok(())
}
