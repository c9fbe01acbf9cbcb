use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Repository for login accounts keyed by phone number
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account for a normalized phone number
    pub async fn create(&self, phone: &str) -> Result<entity::account::Model, DbErr> {
        let account = entity::account::ActiveModel {
            phone: ActiveValue::Set(phone.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    /// Get the account registered to a normalized phone number
    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Phone.eq(phone))
            .one(self.db)
            .await
    }

    /// Get an account together with its role row, if one was ever assigned
    pub async fn get_with_role(
        &self,
        user_id: i32,
    ) -> Result<Option<(entity::account::Model, Option<entity::user_role::Model>)>, DbErr> {
        entity::prelude::Account::find_by_id(user_id)
            .find_also_related(entity::user_role::Entity)
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use bazaar_test_utils::prelude::*;

        use crate::server::data::account::AccountRepository;

        /// Expect success when creating a new account
        #[tokio::test]
        async fn creates_account() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;

            let account_repo = AccountRepository::new(&test.db);
            let result = account_repo.create(TEST_PHONE).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().phone, TEST_PHONE);

            Ok(())
        }

        /// Expect Error when the phone number already has an account
        #[tokio::test]
        async fn fails_for_duplicate_phone() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            test.user().insert_account(TEST_PHONE).await?;

            let account_repo = AccountRepository::new(&test.db);
            let result = account_repo.create(TEST_PHONE).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_phone {
        use bazaar_test_utils::prelude::*;

        use crate::server::data::account::AccountRepository;

        /// Expect Some when account exists for the phone number
        #[tokio::test]
        async fn finds_existing_account() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let account = test.user().insert_account(TEST_PHONE).await?;

            let account_repo = AccountRepository::new(&test.db);
            let result = account_repo.find_by_phone(TEST_PHONE).await?;

            assert_eq!(result.map(|a| a.id), Some(account.id));

            Ok(())
        }

        /// Expect None for a phone number that never logged in
        #[tokio::test]
        async fn returns_none_for_unknown_phone() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;

            let account_repo = AccountRepository::new(&test.db);
            let result = account_repo.find_by_phone(TEST_PHONE).await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod get_with_role {
        use bazaar_test_utils::prelude::*;
        use entity::sea_orm_active_enums::Role;

        use crate::server::data::account::AccountRepository;

        /// Expect the role row to be returned alongside the account
        #[tokio::test]
        async fn returns_role_row() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (account, _) = test
                .user()
                .insert_user_with_role(TEST_PHONE, "Asha", Role::Admin)
                .await?;

            let account_repo = AccountRepository::new(&test.db);
            let result = account_repo.get_with_role(account.id).await?;

            let (_, maybe_role) = result.unwrap();
            assert_eq!(maybe_role.map(|r| r.role), Some(Role::Admin));

            Ok(())
        }

        /// Expect None for the role when no role was ever assigned
        #[tokio::test]
        async fn returns_account_without_role() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let (account, _) = test.user().insert_user(TEST_PHONE, "Asha").await?;

            let account_repo = AccountRepository::new(&test.db);
            let result = account_repo.get_with_role(account.id).await?;

            assert!(matches!(result, Some((_, None))));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let account_repo = AccountRepository::new(&test.db);
            let result = account_repo.get_with_role(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
