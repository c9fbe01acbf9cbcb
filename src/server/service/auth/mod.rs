//! Phone one-time passcode login.
//!
//! A login starts with [`AuthService::request_otp`], which stores the SHA-256 hash of a
//! fresh 6 digit code and texts the code to the caller. [`AuthService::verify_otp`] checks a
//! submitted code against the most recent unused challenge for that phone and, on success,
//! returns the account the caller is logged in as, creating it on first login.

#[cfg(test)]
mod tests;

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::OtpSentDto,
    server::{
        data::{
            account::AccountRepository, otp_challenge::OtpChallengeRepository,
            profile::ProfileRepository,
        },
        error::{auth::AuthError, Error},
        service::role::RoleService,
        sms::SmsGateway,
        util::{
            otp::{generate_code, hash_code, is_well_formed},
            phone::normalize_phone,
        },
    },
};

/// Incorrect submissions allowed against a single challenge
pub const MAX_OTP_ATTEMPTS: i32 = 5;

/// The identity a successful verification logs in as
#[derive(Debug)]
pub struct LoggedIn {
    pub account: entity::account::Model,
    pub role: Role,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    sms: &'a SmsGateway,
    otp_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, sms: &'a SmsGateway, otp_ttl: Duration) -> Self {
        Self { db, sms, otp_ttl }
    }

    /// Issues a new passcode for `phone` and sends it by SMS.
    ///
    /// Earlier unused challenges stay in place but are shadowed by the new one.
    ///
    /// # Returns
    /// - `Ok(OtpSentDto)` - Code stored and accepted by the SMS gateway
    /// - `Err(Error::AuthError(AuthError::InvalidPhone))` - Phone number cannot be normalized
    /// - `Err(Error::SmsError)` / `Err(Error::HttpClientError)` - Gateway refused or unreachable
    /// - `Err(Error::DbErr)` - Challenge could not be stored
    pub async fn request_otp(&self, raw_phone: &str) -> Result<OtpSentDto, Error> {
        let otp_repo = OtpChallengeRepository::new(self.db);

        let phone = normalize_phone(raw_phone)?;
        let code = generate_code();
        let expires_at = Utc::now().naive_utc() + self.otp_ttl;

        otp_repo
            .create(&phone, &hash_code(&code), expires_at)
            .await?;

        let message = format!(
            "{} is your Bazaar login code. It expires in {} minutes.",
            code,
            self.otp_ttl.num_minutes().max(1)
        );
        self.sms.send(&phone, &message).await?;

        tracing::info!("Issued login code for {}", phone);

        Ok(OtpSentDto {
            phone,
            expires_in_secs: self.otp_ttl.num_seconds(),
        })
    }

    /// Checks `code` against the latest unused challenge for `phone`.
    ///
    /// A mismatch counts against the challenge. On success the challenge is consumed and the
    /// account for the phone is returned, created together with an empty profile on first
    /// login.
    ///
    /// # Returns
    /// - `Ok(LoggedIn)` - Code accepted
    /// - `Err(Error::AuthError(AuthError::OtpNotFound))` - No unused challenge for this phone
    /// - `Err(Error::AuthError(AuthError::OtpExpired))` - Latest challenge is past its expiry
    /// - `Err(Error::AuthError(AuthError::OtpAttemptsExceeded))` - Too many wrong codes
    /// - `Err(Error::AuthError(AuthError::OtpInvalid))` - Code does not match
    /// - `Err(Error::DbErr)` - Any store failure
    pub async fn verify_otp(&self, raw_phone: &str, code: &str) -> Result<LoggedIn, Error> {
        let otp_repo = OtpChallengeRepository::new(self.db);

        let phone = normalize_phone(raw_phone)?;
        let code = code.trim();

        let Some(challenge) = otp_repo.latest_unconsumed(&phone).await? else {
            return Err(AuthError::OtpNotFound(phone).into());
        };

        let now = Utc::now().naive_utc();
        if challenge.expires_at <= now {
            return Err(AuthError::OtpExpired(phone).into());
        }

        if challenge.attempts >= MAX_OTP_ATTEMPTS {
            return Err(AuthError::OtpAttemptsExceeded(phone).into());
        }

        if !is_well_formed(code) || hash_code(code) != challenge.code_hash {
            otp_repo.increment_attempts(challenge.id).await?;

            return Err(AuthError::OtpInvalid(phone).into());
        }

        // A concurrent verification of the same code already used this challenge
        let consumed = otp_repo.consume(challenge.id, now).await?;
        if consumed.rows_affected == 0 {
            return Err(AuthError::OtpNotFound(phone).into());
        }

        let account = self.get_or_create_account(&phone).await?;
        let role = RoleService::new(self.db).resolve_role(account.id).await?;

        tracing::info!("User ID {} logged in as {:?}", account.id, role);

        Ok(LoggedIn { account, role })
    }

    async fn get_or_create_account(&self, phone: &str) -> Result<entity::account::Model, Error> {
        let account_repo = AccountRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);

        if let Some(account) = account_repo.find_by_phone(phone).await? {
            return Ok(account);
        }

        let account = account_repo.create(phone).await?;
        profile_repo
            .create(account.id, phone, Some(phone.to_string()))
            .await?;

        tracing::info!("Created account ID {} for {}", account.id, phone);

        Ok(account)
    }
}
