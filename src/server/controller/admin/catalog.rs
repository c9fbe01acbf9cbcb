use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, Paginated},
        catalog::{CategoryDto, CreateCategoryDto, ProductDto, ProductInputDto, ProductSearchParams},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::session::require_role},
        error::Error,
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

/// List catalog categories
#[utoipa::path(
    get,
    path = "/admin/categories",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Categories ordered by name", body = Vec<CategoryDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let categories = CatalogService::new(&state.db).list_categories().await?;

    Ok(Json(categories))
}

/// Create a category, deriving its slug from the name
#[utoipa::path(
    post,
    path = "/admin/categories",
    tag = ADMIN_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Created category", body = CategoryDto),
        (status = 400, description = "Name missing", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "A category with the same slug exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(create): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let category = CatalogService::new(&state.db).create_category(create).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    CatalogService::new(&state.db)
        .delete_category(category_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Page through the catalog, optionally searching by name
#[utoipa::path(
    get,
    path = "/admin/products",
    tag = ADMIN_TAG,
    params(ProductSearchParams),
    responses(
        (status = 200, description = "One page of products", body = Paginated<ProductDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ProductSearchParams>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let products = CatalogService::new(&state.db).list_products(params).await?;

    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/admin/products/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = ProductDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn product_detail(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let product = CatalogService::new(&state.db).product(product_id).await?;

    Ok(Json(product))
}

/// Create a catalog product
#[utoipa::path(
    post,
    path = "/admin/products",
    tag = ADMIN_TAG,
    request_body = ProductInputDto,
    responses(
        (status = 201, description = "Created product", body = ProductDto),
        (status = 400, description = "Invalid product fields", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<ProductInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let product = CatalogService::new(&state.db).create_product(input).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace the fields of a catalog product
#[utoipa::path(
    put,
    path = "/admin/products/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductInputDto,
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 400, description = "Invalid product fields", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
    Json(input): Json<ProductInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let product = CatalogService::new(&state.db)
        .update_product(product_id, input)
        .await?;

    Ok(Json(product))
}

/// Delete a product and every seller listing of it
#[utoipa::path(
    delete,
    path = "/admin/products/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Role::Admin).await?;

    CatalogService::new(&state.db)
        .delete_product(product_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
