use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn auth<'a>(&'a self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Insert an unconsumed OTP challenge.
    ///
    /// # Arguments
    /// - `phone` - Normalized phone number the code was sent to
    /// - `code_hash` - Hex encoded SHA-256 of the code
    /// - `attempts` - Failed attempts already recorded
    /// - `expires_at` - When the code stops being accepted
    pub async fn insert_challenge(
        &self,
        phone: &str,
        code_hash: &str,
        attempts: i32,
        expires_at: NaiveDateTime,
    ) -> Result<entity::otp_challenge::Model, TestError> {
        Ok(
            entity::prelude::OtpChallenge::insert(entity::otp_challenge::ActiveModel {
                phone: ActiveValue::Set(phone.to_string()),
                code_hash: ActiveValue::Set(code_hash.to_string()),
                attempts: ActiveValue::Set(attempts),
                expires_at: ActiveValue::Set(expires_at),
                consumed_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
