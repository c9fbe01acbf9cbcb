use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request a login code by SMS
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RequestOtpDto {
    /// Mobile number, with or without country code
    pub phone: String,
}

/// Exchange a login code for a session
#[derive(Serialize, Deserialize, ToSchema)]
pub struct VerifyOtpDto {
    pub phone: String,
    /// 6 digit code received by SMS
    pub code: String,
}

/// Confirmation that a login code was sent
#[derive(Serialize, Deserialize, ToSchema)]
pub struct OtpSentDto {
    /// Normalized phone number the code was sent to
    pub phone: String,
    pub expires_in_secs: i64,
}

/// Describes how to log in when the login page is requested by an anonymous caller
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginInfoDto {
    pub message: String,
    pub request_otp: String,
    pub verify_otp: String,
}
