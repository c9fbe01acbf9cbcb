//! Error types for the Bazaar server application.
//!
//! Each business domain (authentication, orders, catalog, sellers, finance, support, users)
//! owns a `thiserror` enum with its own HTTP mapping. [`Error`] aggregates them together with
//! the infrastructure errors (database, sessions, SMS gateway) so handlers can use `?` freely.

/// Authentication and access errors
pub mod auth;
/// Catalog and listing errors
pub mod catalog;
/// Configuration errors
pub mod config;
/// Order amount and payout errors
pub mod finance;
/// Order errors
pub mod order;
/// Seller and area errors
pub mod seller;
/// SMS delivery errors
pub mod sms;
/// Support ticket and callback errors
pub mod support;
/// User and profile errors
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, catalog::CatalogError, config::ConfigError, finance::FinanceError,
        order::OrderError, seller::SellerError, sms::SmsError, support::SupportError,
        user::UserError,
    },
};

/// Main error type for the Bazaar server application.
///
/// Domain errors carry their own status codes through their `IntoResponse` implementations.
/// Library errors (database, session store, HTTP client) always surface as a generic
/// 500 response after being logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session state, OTP verification, role checks).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Order lookup or status transition error.
    #[error(transparent)]
    OrderError(#[from] OrderError),
    /// Category, product or seller listing error.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Seller account, area or commercial terms error.
    #[error(transparent)]
    SellerError(#[from] SellerError),
    /// Order split or payout error.
    #[error(transparent)]
    FinanceError(#[from] FinanceError),
    /// Support ticket or callback request error.
    #[error(transparent)]
    SupportError(#[from] SupportError),
    /// User profile or role administration error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// SMS gateway refused to deliver a message.
    #[error(transparent)]
    SmsError(#[from] SmsError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// HTTP client error while talking to the SMS gateway.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors delegate to their own mapping; everything else is treated as an
/// internal server error and logged.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::OrderError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::SellerError(err) => err.into_response(),
            Self::FinanceError(err) => err.into_response(),
            Self::SupportError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::SmsError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the JSON error body shared by every domain error mapping.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
