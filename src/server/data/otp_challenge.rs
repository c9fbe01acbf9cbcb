use chrono::{NaiveDateTime, Utc};
use migration::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, UpdateResult,
};

/// Repository for issued login codes
pub struct OtpChallengeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OtpChallengeRepository<'a, C> {
    /// Creates a new instance of [`OtpChallengeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Store a freshly issued code hash for a phone number
    pub async fn create(
        &self,
        phone: &str,
        code_hash: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::otp_challenge::Model, DbErr> {
        let challenge = entity::otp_challenge::ActiveModel {
            phone: ActiveValue::Set(phone.to_string()),
            code_hash: ActiveValue::Set(code_hash.to_string()),
            attempts: ActiveValue::Set(0),
            expires_at: ActiveValue::Set(expires_at),
            consumed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        challenge.insert(self.db).await
    }

    /// The most recently issued challenge for a phone that has not been used yet
    pub async fn latest_unconsumed(
        &self,
        phone: &str,
    ) -> Result<Option<entity::otp_challenge::Model>, DbErr> {
        entity::prelude::OtpChallenge::find()
            .filter(entity::otp_challenge::Column::Phone.eq(phone))
            .filter(entity::otp_challenge::Column::ConsumedAt.is_null())
            .order_by_desc(entity::otp_challenge::Column::CreatedAt)
            .order_by_desc(entity::otp_challenge::Column::Id)
            .one(self.db)
            .await
    }

    /// Record a failed attempt in place
    pub async fn increment_attempts(&self, challenge_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::OtpChallenge::update_many()
            .col_expr(
                entity::otp_challenge::Column::Attempts,
                Expr::col(entity::otp_challenge::Column::Attempts).add(1),
            )
            .filter(entity::otp_challenge::Column::Id.eq(challenge_id))
            .exec(self.db)
            .await
    }

    /// Mark a challenge used, unless a concurrent verification already did
    pub async fn consume(
        &self,
        challenge_id: i32,
        consumed_at: NaiveDateTime,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::OtpChallenge::update_many()
            .col_expr(
                entity::otp_challenge::Column::ConsumedAt,
                Expr::value(Some(consumed_at)),
            )
            .filter(entity::otp_challenge::Column::Id.eq(challenge_id))
            .filter(entity::otp_challenge::Column::ConsumedAt.is_null())
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod latest_unconsumed {
        use bazaar_test_utils::prelude::*;
        use chrono::{Duration, Utc};

        use crate::server::data::otp_challenge::OtpChallengeRepository;

        /// Expect the newest challenge to win and consumed ones to be skipped
        #[tokio::test]
        async fn returns_newest_unconsumed() -> Result<(), TestError> {
            let test = TestBuilder::new().with_otp_tables().build().await?;
            let expires_at = Utc::now().naive_utc() + Duration::minutes(5);

            let otp_repo = OtpChallengeRepository::new(&test.db);
            let first = otp_repo.create(TEST_PHONE, "first", expires_at).await?;
            let second = otp_repo.create(TEST_PHONE, "second", expires_at).await?;

            let latest = otp_repo.latest_unconsumed(TEST_PHONE).await?;
            assert_eq!(latest.map(|c| c.id), Some(second.id));

            otp_repo.consume(second.id, Utc::now().naive_utc()).await?;
            let latest = otp_repo.latest_unconsumed(TEST_PHONE).await?;
            assert_eq!(latest.map(|c| c.id), Some(first.id));

            Ok(())
        }
    }

    mod increment_attempts {
        use bazaar_test_utils::prelude::*;
        use chrono::{Duration, Utc};

        use crate::server::data::otp_challenge::OtpChallengeRepository;

        /// Expect each call to add one attempt
        #[tokio::test]
        async fn counts_attempts() -> Result<(), TestError> {
            let test = TestBuilder::new().with_otp_tables().build().await?;
            let otp_repo = OtpChallengeRepository::new(&test.db);
            let challenge = otp_repo
                .create(TEST_PHONE, "hash", Utc::now().naive_utc() + Duration::minutes(5))
                .await?;

            otp_repo.increment_attempts(challenge.id).await?;
            otp_repo.increment_attempts(challenge.id).await?;

            let stored = otp_repo.latest_unconsumed(TEST_PHONE).await?.unwrap();
            assert_eq!(stored.attempts, 2);

            Ok(())
        }
    }

    mod consume {
        use bazaar_test_utils::prelude::*;
        use chrono::{Duration, Utc};

        use crate::server::data::otp_challenge::OtpChallengeRepository;

        /// Expect a challenge to be consumable only once
        #[tokio::test]
        async fn consumes_once() -> Result<(), TestError> {
            let test = TestBuilder::new().with_otp_tables().build().await?;
            let otp_repo = OtpChallengeRepository::new(&test.db);
            let challenge = otp_repo
                .create(TEST_PHONE, "hash", Utc::now().naive_utc() + Duration::minutes(5))
                .await?;

            let first = otp_repo.consume(challenge.id, Utc::now().naive_utc()).await?;
            let second = otp_repo.consume(challenge.id, Utc::now().naive_utc()).await?;

            assert_eq!(first.rows_affected, 1);
            assert_eq!(second.rows_affected, 0);

            Ok(())
        }
    }
}
