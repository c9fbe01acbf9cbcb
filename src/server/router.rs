//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{middleware::from_fn_with_state, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, middleware::access_gate, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `/`, `/login`, `/access-denied` and `/auth/*` - Login with a one-time SMS code
/// - `/account/profile` - Profile of the logged in user
/// - `/admin` and `/admin/*` - Admin console (orders, sellers, areas, catalog, users, payouts,
///   support)
/// - `/seller` and `/seller/*` - Seller console (orders, listings, catalog search)
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` with Swagger UI at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` without the access gate, use [`app`] to serve requests.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bazaar", description = "Bazaar marketplace administration API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Login and logout routes"),
        (name = controller::account::ACCOUNT_TAG, description = "Account self-service routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin console routes"),
        (name = controller::seller::SELLER_TAG, description = "Seller console routes"),
    ))]
    struct ApiDoc;

    use controller::{account, admin, auth, seller};

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::home))
        .routes(routes!(auth::login_page))
        .routes(routes!(auth::access_denied))
        .routes(routes!(auth::request_otp))
        .routes(routes!(auth::verify_otp))
        .routes(routes!(auth::logout))
        .routes(routes!(account::get_profile, account::update_profile))
        .routes(routes!(admin::dashboard::admin_dashboard))
        .routes(routes!(admin::order::list_orders))
        .routes(routes!(admin::order::live_orders))
        .routes(routes!(admin::order::order_detail))
        .routes(routes!(admin::order::update_order_status))
        .routes(routes!(admin::seller::list_sellers))
        .routes(routes!(admin::seller::seller_detail))
        .routes(routes!(admin::seller::update_seller_financials))
        .routes(routes!(admin::seller::set_seller_active))
        .routes(routes!(admin::area::list_areas, admin::area::create_area))
        .routes(routes!(admin::area::set_area_active))
        .routes(routes!(
            admin::catalog::list_categories,
            admin::catalog::create_category
        ))
        .routes(routes!(admin::catalog::delete_category))
        .routes(routes!(
            admin::catalog::list_products,
            admin::catalog::create_product
        ))
        .routes(routes!(
            admin::catalog::product_detail,
            admin::catalog::update_product,
            admin::catalog::delete_product
        ))
        .routes(routes!(admin::user::list_users))
        .routes(routes!(admin::user::user_detail))
        .routes(routes!(admin::user::update_user_role))
        .routes(routes!(
            admin::payout::list_payouts,
            admin::payout::create_payout
        ))
        .routes(routes!(admin::payout::release_payout))
        .routes(routes!(admin::support::list_tickets))
        .routes(routes!(admin::support::update_ticket_status))
        .routes(routes!(admin::support::update_ticket_notes))
        .routes(routes!(admin::support::list_callbacks))
        .routes(routes!(admin::support::resolve_callback))
        .routes(routes!(seller::dashboard::seller_dashboard))
        .routes(routes!(seller::order::seller_orders))
        .routes(routes!(seller::order::update_seller_order_status))
        .routes(routes!(
            seller::product::seller_listings,
            seller::product::add_listing
        ))
        .routes(routes!(seller::product::search_catalog))
        .routes(routes!(seller::product::update_listing_price))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application with the access gate in front of every route.
///
/// The session layer must be added by the caller, outside of the returned router.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(from_fn_with_state(state.clone(), access_gate))
        .with_state(state)
}
