use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginInfoDto, OtpSentDto, RequestOtpDto, VerifyOtpDto},
        user::HomeDto,
    },
    server::{
        controller::util::session::current_user,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        policy::access::{role_home, LOGIN_PATH},
        service::auth::AuthService,
    },
};

/// OpenAPI tag for login, logout and gate landing routes
pub static AUTH_TAG: &str = "auth";

/// Sends a one-time login code to a mobile number
///
/// # Responses
/// - 200 (Success): Code sent, returns the normalized number and how long the code is valid
/// - 400 (Bad Request): The phone number is not a valid mobile number
/// - 502 (Bad Gateway): The SMS gateway refused the message
/// - 500 (Internal Server Error): Database or gateway connection failure
#[utoipa::path(
    post,
    path = "/auth/otp/request",
    tag = AUTH_TAG,
    request_body = RequestOtpDto,
    responses(
        (status = 200, description = "Verification code sent", body = OtpSentDto),
        (status = 400, description = "Invalid phone number", body = ErrorDto),
        (status = 502, description = "SMS gateway rejected the message", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_otp(
    State(state): State<AppState>,
    Json(request): Json<RequestOtpDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.sms, state.otp_ttl);

    let sent = auth_service.request_otp(&request.phone).await?;

    Ok((StatusCode::OK, Json(sent)))
}

/// Verifies a one-time login code and logs the caller in
///
/// The session ID is cycled before the user ID is stored to prevent session fixation.
///
/// # Responses
/// - 303 (See Other): Logged in, redirect to the role home
/// - 400 (Bad Request): Code missing, expired, incorrect or attempts exhausted
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    post,
    path = "/auth/otp/verify",
    tag = AUTH_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 303, description = "Logged in, redirect to role home"),
        (status = 400, description = "Verification failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    session: Session,
    Json(verify): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.sms, state.otp_ttl);

    let logged_in = auth_service.verify_otp(&verify.phone, &verify.code).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, logged_in.account.id).await?;

    tracing::info!(
        "User ID {} logged in with role {:?}",
        logged_in.account.id,
        logged_in.role
    );

    Ok(Redirect::to(role_home(logged_in.role)))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 303 (See Other): Successfully logged out, redirect to login route
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Logged out, redirect to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never stored fails in the Redis store
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::to(LOGIN_PATH))
}

/// Describes the login flow to anonymous callers
///
/// Logged in callers never reach this handler, the access gate sends them to their role home.
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login instructions", body = LoginInfoDto),
        (status = 303, description = "Already logged in, redirect to role home")
    ),
)]
pub async fn login_page() -> impl IntoResponse {
    Json(LoginInfoDto {
        message: "Log in with a one-time code sent to your mobile number".to_string(),
        request_otp: "/auth/otp/request".to_string(),
        verify_otp: "/auth/otp/verify".to_string(),
    })
}

/// Landing route for callers sent away from a console their role cannot use
#[utoipa::path(
    get,
    path = "/access-denied",
    tag = AUTH_TAG,
    responses(
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn access_denied() -> impl IntoResponse {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorDto {
            error: "You do not have access to this page".to_string(),
        }),
    )
}

/// Role home for plain users and delivery partners
///
/// Anonymous callers receive an empty payload.
#[utoipa::path(
    get,
    path = "/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Caller identity", body = HomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let home = match current_user(&state, &session).await {
        Ok(caller) => HomeDto {
            user_id: Some(caller.user_id),
            role: Some(caller.role),
        },
        Err(Error::AuthError(
            AuthError::UserNotInSession | AuthError::UserNotInDatabase(_),
        )) => HomeDto {
            user_id: None,
            role: None,
        },
        Err(err) => return Err(err),
    };

    Ok(Json(home))
}
